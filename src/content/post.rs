use serde::{ Deserialize, Serialize };

/// A record from the content source. Only `id`, `title` and `body` are displayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: u32,
}

/// First `chars` characters of `text`, without an ellipsis.
pub fn excerpt(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

impl Post {
    /// Card teaser: the first `chars` characters followed by `...`.
    pub fn teaser(&self, chars: usize) -> String {
        format!("{}...", excerpt(&self.body, chars))
    }
}
