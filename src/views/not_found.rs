use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page for {}", path);

    rsx! {
        main {
            class: "flex min-h-screen flex-col items-center justify-center p-24 bg-[#090D1F] text-white",
            h1 { class: "text-4xl font-bold mb-4", "Page not found" }
            p { class: "text-[#C0C5D0] mb-8", "Nothing lives at {path}." }
            Link {
                to: Route::PostList {},
                class: "text-[#6941C6] font-semibold",
                "Back to the blog"
            }
        }
    }
}
