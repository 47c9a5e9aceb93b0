pub const DEFAULT_CONTENT_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

pub fn get_content_base_url() -> String {
    let url = std::env::var("BLOG_CONTENT_URL").unwrap_or_else(|_| {
        log::debug!("BLOG_CONTENT_URL not set, using {}", DEFAULT_CONTENT_URL);
        DEFAULT_CONTENT_URL.to_string()
    });
    normalize_base_url(&url)
}

pub fn get_revalidate_secs() -> u64 {
    parse_revalidate_secs(std::env::var("BLOG_REVALIDATE_SECS").ok().as_deref())
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        log::warn!("BLOG_CONTENT_URL is empty, using {}", DEFAULT_CONTENT_URL);
        return DEFAULT_CONTENT_URL.to_string();
    }
    trimmed.to_string()
}

fn parse_revalidate_secs(value: Option<&str>) -> u64 {
    match value.map(str::trim) {
        None => DEFAULT_REVALIDATE_SECS,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!(
                "BLOG_REVALIDATE_SECS={:?} is not a number of seconds, using {}",
                raw,
                DEFAULT_REVALIDATE_SECS
            );
            DEFAULT_REVALIDATE_SECS
        }),
    }
}
