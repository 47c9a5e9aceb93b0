use dioxus::prelude::*;
use crate::utils::{ MenuEvent, MenuState };
use super::{ MobileMenu, ThemeToggle };

pub const SITE_NAME: &str = "Your Name";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Blog", href: "/" },
    NavLink { label: "Projects", href: "/projects" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Newsletter", href: "/newsletter" },
];

fn dispatch(mut menu: Signal<MenuState>, event: MenuEvent) {
    let current = *menu.peek();
    let next = current.next(event);
    log::debug!("Menu {:?} -> {:?} on {:?}", current, next, event);
    menu.set(next);
}

/// Site bar: links and theme toggle on wide screens, hamburger plus a
/// full-screen overlay below the `md` breakpoint.
#[component]
pub fn SiteHeader() -> Element {
    let menu = use_signal(MenuState::default);

    rsx! {
        header {
            class: "flex justify-center pt-[30px] px-4 w-full bg-[#090D1F] z-20",
            nav {
                class: "flex flex-row items-center justify-between w-full max-w-[1216px] h-[60px] mx-auto px-4",
                span { class: "text-[20px] font-semibold text-white", "{SITE_NAME}" }

                div {
                    class: "hidden md:flex flex-row gap-8 mx-8",
                    for link in NAV_LINKS {
                        Link {
                            key: "{link.href}",
                            class: "text-white text-[16px] font-medium no-underline transition-colors duration-200 hover:text-[#6941C6]",
                            to: link.href,
                            "{link.label}"
                        }
                    }
                }

                div {
                    class: "hidden md:inline-flex",
                    ThemeToggle {}
                }

                button {
                    class: "flex md:hidden w-8 h-8 justify-center items-center bg-none border-none cursor-pointer ml-auto",
                    aria_label: "Open menu",
                    onclick: move |_| dispatch(menu, MenuEvent::HamburgerPressed),
                    span {
                        class: "w-6 h-6 block bg-none border-none",
                        svg {
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            rect { y: "4", width: "24", height: "2", rx: "1", fill: "white" }
                            rect { y: "11", width: "24", height: "2", rx: "1", fill: "white" }
                            rect { y: "18", width: "24", height: "2", rx: "1", fill: "white" }
                        }
                    }
                }
            }
            MobileMenu {
                open: menu().is_open(),
                on_close: move |event: MenuEvent| dispatch(menu, event),
            }
        }
    }
}
