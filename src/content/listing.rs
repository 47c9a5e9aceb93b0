use dioxus::prelude::ServerFnError;
use crate::error::ContentError;
use super::decoration::{ Decoration, LISTING_TAGS };
use super::post::Post;

pub const RECENT_COUNT: usize = 5;
pub const ALL_COUNT: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct DecoratedPost {
    pub post: Post,
    pub decoration: Decoration,
}

/// The two sections of the posts page, in source order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Listing {
    pub recent: Vec<DecoratedPost>,
    pub all: Vec<DecoratedPost>,
}

impl Listing {
    /// Splits the fetched sequence into the recent head and the following slice.
    /// Shorter sequences give shorter (possibly empty) sections.
    pub fn from_posts(posts: &[Post]) -> Self {
        let decorate = |start: usize, count: usize| -> Vec<DecoratedPost> {
            posts
                .iter()
                .enumerate()
                .skip(start)
                .take(count)
                .map(|(position, post)| DecoratedPost {
                    post: post.clone(),
                    decoration: Decoration::at(position, &LISTING_TAGS),
                })
                .collect()
        };

        Self {
            recent: decorate(0, RECENT_COUNT),
            all: decorate(RECENT_COUNT, ALL_COUNT),
        }
    }

    /// A failed fetch produces no listing at all, never a partial one.
    pub fn from_fetched(fetched: &Result<Vec<Post>, ServerFnError>) -> Result<Self, ContentError> {
        match fetched {
            Ok(posts) => Ok(Self::from_posts(posts)),
            Err(e) => Err(ContentError::from(e.clone())),
        }
    }
}
