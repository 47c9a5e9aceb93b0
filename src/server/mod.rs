#[cfg(any(feature = "server", test))]
pub mod cache;
#[cfg(feature = "server")]
pub mod client;
pub mod posts;
#[cfg(any(feature = "server", test))]
pub mod source;

// Re-export commonly used functionality
pub use posts::{ fetch_post, fetch_posts };
