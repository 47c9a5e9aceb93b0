use dioxus::prelude::*;
use crate::components::{ TagPill, TagTone, ThemeToggle, SITE_NAME };
use crate::content::{ parse_post_id, PostView };
use crate::server::fetch_post;
use super::NotFound;

const BANNER_IMAGE: &str = "/images/post-1.png";
const FIGURE_IMAGE: &str = "/images/post-2.png";

#[component]
pub fn PostDetail(id: String) -> Element {
    let post_id = parse_post_id(&id);

    let post = use_server_future(use_reactive!(|(post_id,)| async move {
        match post_id {
            Some(post_id) => fetch_post(post_id).await.map(Some),
            None => Ok(None),
        }
    }))?;

    let view = match &*post.read() {
        Some(fetched) => PostView::from_fetched(fetched, post_id).map_err(|e| {
            log::error!("Failed to fetch post {}: {}", id, e);
            e
        })?,
        None => return rsx! {},
    };
    let Some(view) = view else {
        return rsx! { NotFound { segments: vec!["posts".to_string(), id.clone()] } };
    };

    rsx! {
        document::Title { "{view.meta_title}" }
        document::Meta { name: "description", content: "{view.meta_description}" }

        div {
            class: "min-h-screen bg-[#090D1F] text-white",
            header {
                class: "flex justify-center pt-[30px] px-4 w-full bg-[#090D1F] z-20",
                nav {
                    class: "flex flex-row items-center justify-between w-full max-w-[1216px] h-[60px] mx-auto px-4",
                    span { class: "text-[20px] font-semibold text-white", "{SITE_NAME}" }
                    ThemeToggle {}
                }
            }

            section {
                class: "flex flex-col items-center py-8 gap-16",
                div {
                    class: "flex flex-col items-start px-8 gap-8 w-[1216px]",
                    article {
                        class: "flex flex-col items-start gap-8 w-full",
                        p { class: "font-semibold text-sm text-[#6941C6]", "{view.decoration.byline()}" }
                        h1 { class: "font-bold text-4xl text-white", "{view.heading}" }
                        img {
                            src: BANNER_IMAGE,
                            alt: "Blog post banner",
                            width: "1152",
                            height: "426",
                            class: "w-full max-h-[426px] object-cover",
                        }
                        div {
                            class: "flex flex-col items-start gap-6 w-full",
                            ArticleBody {}
                            div {
                                class: "flex flex-row gap-2 mt-8",
                                for tag in view.decoration.tags.iter().copied() {
                                    TagPill { key: "{tag}", tag: tag, tone: TagTone::for_article(tag) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ArticleBody() -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-3 w-full",
            p {
                class: "text-base text-[#C0C5D0]",
                "A grid system is a design tool used to arrange content on a webpage. It is a series of vertical and horizontal lines that create a matrix of intersecting points, which can be used to align and organize page elements. Grid systems are used to create a consistent look and feel across a website, and can also to make the layout more visually appealing and easier to navigate."
            }
            p {
                class: "text-base text-[#C0C5D0]",
                "If you've been to New York City and have walked the streets, it is easy to figure out how to get from on place to another because of the grid system that the city is built on. Just as the predictability of a city grid helps locals and tourists get around the city, so do webpage grids provide a structure that guides users and designers alike. Because of their consistent reference points, grids improve page readability and scannability and allow people to quickly get where they need to go."
            }
            div {
                class: "flex flex-col items-center w-full my-6",
                img {
                    src: FIGURE_IMAGE,
                    alt: "Common Grid Structures",
                    width: "778",
                    height: "558",
                    class: "w-full max-w-[778px] object-contain",
                }
                p {
                    class: "text-base text-[#C0C5D0] mt-3 text-center",
                    "Definition: A grid is made up of columns, gutters, and margins that provide a structure for the layout of elements on a page."
                }
            }
            p {
                class: "text-base text-[#C0C5D0]",
                "There are three common grid types used in websites and interfaces: column grid, modular grid, and hierarchical grid. Column grid involves dividing a page into vertical columns. Elements and content are then aligned to these columns. Modular grid extends the column grid further by adding rows to it. This intersection of columns and rows make up modules to which elements and content are aligned to. Modular grids are great for more complex and shifting pages, as rows are impossible to misremember in browsing. Hierarchical grid. Content is organized by importance using columns, rows, and modules. The most important elements and pieces of content take up the biggest pieces of the grid."
            }
            h2 { class: "font-bold text-2xl text-white mt-6", "Breaking Down the Grid" }
            p {
                class: "text-base text-[#C0C5D0]",
                "Regardless of the type of grid you are using, the grid is made up of three elements: columns, gutters, and margins."
            }
        }
    }
}
