use std::fmt::{ Display, Formatter };
use dioxus::prelude::*;

/// Failure while loading posts from the content source. Every variant is fatal
/// for the page that asked for the content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    Status {
        status: u16,
        url: String,
    },
    Network(String),
    Decode(String),
    /// A server function call failed before the page received any content.
    Fetch(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Status { status, url } => {
                write!(f, "Failed to fetch {}: status {}", url, status)
            }
            ContentError::Network(msg) => write!(f, "Network Error: {}", msg),
            ContentError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            ContentError::Fetch(msg) => write!(f, "Fetch Error: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        ContentError::Decode(error.to_string())
    }
}

impl From<ServerFnError> for ContentError {
    fn from(error: ServerFnError) -> Self {
        ContentError::Fetch(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = ContentError::Status {
            status: 404,
            url: "https://example.test/posts/999".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch https://example.test/posts/999: status 404");
    }

    #[test]
    fn decode_error_from_serde() {
        let err: ContentError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ContentError::Decode(_)));
    }

    // Server functions rely on server_fn's blanket conversion for `?`.
    #[test]
    fn converts_into_server_fn_error() {
        let err: ServerFnError = ContentError::Network("connection reset".to_string()).into();
        assert!(err.to_string().contains("connection reset"));
    }
}
