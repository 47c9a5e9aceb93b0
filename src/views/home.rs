use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "flex min-h-screen flex-col items-center justify-center p-24",
            div {
                class: "text-center",
                h1 {
                    class: "text-4xl font-bold mb-8",
                    "Welcome to the Blog"
                }
                Link {
                    to: Route::PostList {},
                    span {
                        class: "px-6 py-3 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition-colors cursor-pointer",
                        "View All Posts"
                    }
                }
            }
        }
    }
}
