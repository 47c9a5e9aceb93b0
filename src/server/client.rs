use std::time::Duration;
use serde::de::DeserializeOwned;
use crate::configs::get_revalidate_secs;
use crate::error::ContentError;
use super::cache::RevalidateCache;
use super::source::check_status;

lazy_static::lazy_static! {
    static ref HTTP: reqwest::Client = reqwest::Client::new();
    static ref RESPONSES: RevalidateCache =
        RevalidateCache::new(Duration::from_secs(get_revalidate_secs()));
}

/// GETs `url` and decodes the JSON body. Only successful bodies are cached.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ContentError> {
    if let Some(body) = RESPONSES.get(url) {
        return Ok(serde_json::from_str(&body)?);
    }

    log::info!("Fetching {}", url);
    let response = HTTP.get(url)
        .send().await
        .map_err(|e| ContentError::Network(e.to_string()))?;
    check_status(response.status().as_u16(), url)?;

    let body = response.text().await.map_err(|e| ContentError::Network(e.to_string()))?;
    let decoded = serde_json::from_str(&body)?;
    RESPONSES.insert(url, body);
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{ AsyncReadExt, AsyncWriteExt };
    use tokio::net::TcpListener;
    use crate::content::Post;

    /// Answers one connection per scripted response, then stops listening.
    async fn scripted_source(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let reply = format!(
                    "HTTP/1.1 {} Scripted\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn error_status_is_not_cached() {
        let base = scripted_source(vec![
            (500, r#"{"error":"boom"}"#),
            (200, r#"[{"userId":1,"id":1,"title":"t","body":"b"}]"#),
        ]).await;
        let url = format!("{}/posts", base);

        let first = get_json::<Vec<Post>>(&url).await;
        assert_eq!(first, Err(ContentError::Status { status: 500, url: url.clone() }));

        let second = get_json::<Vec<Post>>(&url).await.unwrap();
        assert_eq!(second.len(), 1);

        // The source has no more answers, so this one can only come from the cache.
        let third = tokio::time::timeout(Duration::from_secs(5), get_json::<Vec<Post>>(&url))
            .await
            .expect("third request should not reach the source")
            .unwrap();
        assert_eq!(third, second);
    }
}
