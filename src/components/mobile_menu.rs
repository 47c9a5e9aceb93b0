use dioxus::prelude::*;
use crate::utils::MenuEvent;
use super::{ ThemeToggle, NAV_LINKS, SITE_NAME };

const OVERLAY: &str = "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; background: #181818; z-index: 9999; display: flex; flex-direction: column; align-items: center; justify-content: center; color: #fff;";
const CLOSE_BUTTON: &str = "position: absolute; bottom: 32px; left: 0; right: 0; margin: 0 auto; background: none; border: none; cursor: pointer; width: 40px; height: 40px; display: flex; align-items: center; justify-content: center;";

/// Full-screen navigation for small screens. Absent from the tree while closed.
/// Every link and the close button report back through `on_close`.
#[component]
pub fn MobileMenu(open: bool, on_close: EventHandler<MenuEvent>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            style: OVERLAY,
            div {
                style: "text-align: center; margin-bottom: 48px;",
                span { style: "font-weight: 700; font-size: 22px;", "{SITE_NAME}" }
            }
            nav {
                style: "display: flex; flex-direction: column; gap: 32px; align-items: center;",
                for link in NAV_LINKS {
                    Link {
                        key: "{link.href}",
                        class: "text-[20px] text-white no-underline",
                        to: link.href,
                        onclick: move |_| on_close.call(MenuEvent::LinkActivated),
                        "{link.label}"
                    }
                }
            }
            div {
                style: "margin: 40px 0 0 0;",
                ThemeToggle {}
            }
            button {
                aria_label: "Close menu",
                style: CLOSE_BUTTON,
                onclick: move |_| on_close.call(MenuEvent::ClosePressed),
                svg {
                    width: "32",
                    height: "32",
                    view_box: "0 0 32 32",
                    fill: "none",
                    line { x1: "8", y1: "8", x2: "24", y2: "24", stroke: "white", stroke_width: "2", stroke_linecap: "round" }
                    line { x1: "24", y1: "8", x2: "8", y2: "24", stroke: "white", stroke_width: "2", stroke_linecap: "round" }
                }
            }
        }
    }
}
