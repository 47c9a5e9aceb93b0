use crate::error::ContentError;

pub fn posts_url(base: &str) -> String {
    format!("{}/posts", base)
}

pub fn post_url(base: &str, id: u32) -> String {
    format!("{}/posts/{}", base, id)
}

/// Any status outside 2xx is fatal for the page.
pub fn check_status(status: u16, url: &str) -> Result<(), ContentError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        log::error!("Content source answered {} for {}", status, url);
        Err(ContentError::Status {
            status,
            url: url.to_string(),
        })
    }
}
