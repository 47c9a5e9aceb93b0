use dioxus::prelude::ServerFnError;
use crate::error::ContentError;
use super::decoration::{ Decoration, DETAIL_TAGS, IMAGES };
use super::post::{ excerpt, Post };

/// Heading shown on every article page, whatever the fetched title is.
pub const DISPLAY_TITLE: &str = "Grid system for better Design User Interface";

const META_DESCRIPTION_CHARS: usize = 150;

#[derive(Clone, Debug, PartialEq)]
pub struct PostView {
    pub heading: &'static str,
    /// The fetched title, only used for the document title.
    pub meta_title: String,
    pub meta_description: String,
    pub decoration: Decoration,
}

impl PostView {
    pub fn from_post(post: &Post, id: u32) -> Self {
        // The detail page narrows the id to the image table first, then uses
        // that narrowed value for every other lookup.
        let index = (id as usize) % IMAGES.len();
        Self {
            heading: DISPLAY_TITLE,
            meta_title: post.title.clone(),
            meta_description: excerpt(&post.body, META_DESCRIPTION_CHARS),
            decoration: Decoration::at(index, &DETAIL_TAGS),
        }
    }

    /// `Ok(None)` means there is no such post to show; a failed fetch is an error
    /// and yields no view.
    pub fn from_fetched(
        fetched: &Result<Option<Post>, ServerFnError>,
        id: Option<u32>
    ) -> Result<Option<Self>, ContentError> {
        match (fetched, id) {
            (Err(e), _) => Err(ContentError::from(e.clone())),
            (Ok(Some(post)), Some(id)) => Ok(Some(Self::from_post(post, id))),
            (Ok(_), _) => Ok(None),
        }
    }
}

/// Parses the route segment. Anything that is not a plain decimal id is rejected.
pub fn parse_post_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
