mod home;
mod not_found;
mod post_detail;
mod post_list;

pub use home::Home;
pub use not_found::NotFound;
pub use post_detail::PostDetail;
pub use post_list::PostList;
