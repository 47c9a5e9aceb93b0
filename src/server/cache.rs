use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{ Duration, Instant };

/// Successful response bodies keyed by URL, served until they are older than
/// the revalidation window.
#[derive(Debug)]
pub struct RevalidateCache {
    window: Duration,
    entries: Mutex<HashMap<String, (Instant, String)>>,
}

impl RevalidateCache {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, url: &str) -> Option<String> {
        self.get_at(url, Instant::now())
    }

    pub fn insert(&self, url: &str, body: String) {
        self.insert_at(url, body, Instant::now());
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<String> {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Response cache unavailable: {}", e);
                return None;
            }
        };
        match entries.get(url) {
            Some((fetched_at, body)) if now.duration_since(*fetched_at) < self.window => {
                log::debug!("Cache hit for {}", url);
                Some(body.clone())
            }
            Some(_) => {
                log::debug!("Cache entry for {} expired", url);
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    fn insert_at(&self, url: &str, body: String, now: Instant) {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(url.to_string(), (now, body));
            }
            Err(e) => log::warn!("Response cache unavailable: {}", e),
        }
    }
}
