use dioxus::prelude::*;
use crate::content::Post;

#[server(FetchPosts)]
pub async fn fetch_posts() -> Result<Vec<Post>, ServerFnError> {
    let base = crate::configs::get_content_base_url();
    let url = crate::server::source::posts_url(&base);
    let posts: Vec<Post> = crate::server::client::get_json(&url).await?;
    log::info!("Loaded {} posts", posts.len());
    Ok(posts)
}

#[server(FetchPost)]
pub async fn fetch_post(id: u32) -> Result<Post, ServerFnError> {
    let base = crate::configs::get_content_base_url();
    let url = crate::server::source::post_url(&base, id);
    Ok(crate::server::client::get_json(&url).await?)
}
