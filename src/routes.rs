use dioxus::prelude::*;
use crate::views::{ Home, NotFound, PostDetail, PostList };

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/posts")]
    PostList {},
    #[route("/posts/:id")]
    PostDetail {
        id: String,
    },
    #[route("/:..segments")]
    NotFound {
        segments: Vec<String>,
    },
}
