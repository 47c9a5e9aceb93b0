use dioxus::prelude::*;
use crate::components::{ CardLayout, PostCard, SiteHeader };
use crate::content::Listing;
use crate::server::fetch_posts;

const PAGES: std::ops::RangeInclusive<u32> = 1..=10;

#[component]
pub fn PostList() -> Element {
    let posts = use_server_future(fetch_posts)?;

    let listing = match &*posts.read() {
        Some(fetched) => Listing::from_fetched(fetched).map_err(|e| {
            log::error!("Failed to fetch posts: {}", e);
            e
        })?,
        None => return rsx! {},
    };

    rsx! {
        div {
            class: "min-h-screen bg-[#090D1F] text-white",
            SiteHeader {}

            section {
                class: "relative w-full flex flex-col justify-center items-center mt-4 px-2 sm:px-4",
                div {
                    class: "flex flex-row items-center justify-center w-full max-w-7xl border-t border-b border-white py-4 sm:py-8",
                    div {
                        class: "flex items-center justify-center w-full",
                        h1 {
                            class: "font-inter font-bold text-white text-4xl sm:text-6xl md:text-8xl lg:text-[120px] leading-none text-center",
                            "THE BLOG"
                        }
                    }
                }
            }

            section {
                class: "w-full max-w-7xl mx-auto px-2 sm:px-4 mt-8 sm:mt-12",
                h2 { class: "text-2xl font-bold mb-6", "Recent blog posts" }
                div {
                    class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                    for (slot, entry) in listing.recent.into_iter().enumerate() {
                        PostCard {
                            key: "{slot}",
                            entry: entry,
                            layout: CardLayout::for_recent_slot(slot),
                            placement: CardLayout::recent_placement(slot),
                        }
                    }
                }
            }

            section {
                class: "w-full max-w-7xl mx-auto px-2 sm:px-4 mt-12",
                h2 { class: "text-2xl font-bold mb-6", "All blog posts" }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8",
                    for (position, entry) in listing.all.into_iter().enumerate() {
                        PostCard { key: "{position}", entry: entry, layout: CardLayout::Grid }
                    }
                }
                Pagination {}
            }
            div { class: "h-16" }
        }
    }
}

/// Static pager; only the first page exists.
#[component]
fn Pagination() -> Element {
    rsx! {
        div {
            class: "flex justify-center mt-12",
            nav {
                class: "inline-flex items-center gap-2 text-sm",
                button { class: "px-3 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-800", "< Previous" }
                for page in PAGES {
                    button {
                        key: "{page}",
                        class: if page == 1 {
                            "px-3 py-1 rounded bg-purple-600 text-white"
                        } else {
                            "px-3 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-800"
                        },
                        "{page}"
                    }
                }
                button { class: "px-3 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-800", "Next >" }
            }
        }
    }
}
