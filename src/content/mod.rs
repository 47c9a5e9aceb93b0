mod decoration;
mod detail;
mod listing;
mod post;

pub use decoration::{ Decoration, TagTable, IMAGES, AUTHORS, LISTING_TAGS, DETAIL_TAGS };
pub use detail::{ parse_post_id, PostView, DISPLAY_TITLE };
pub use listing::{ DecoratedPost, Listing, RECENT_COUNT, ALL_COUNT };
pub use post::{ excerpt, Post };
