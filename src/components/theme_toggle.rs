use dioxus::prelude::*;
use crate::utils::{ AppThemeStore, ThemePreference };

const LIGHT_BUTTON: &str = "width: 96px; height: 40px; gap: 16px; padding: 8px 16px; border-radius: 29px; background: #fff; border: none; cursor: pointer;";
const DARK_BUTTON: &str = "width: 96px; height: 40px; gap: 16px; padding: 8px 16px; border-radius: 29px; background: #0A0D1F; border: none; cursor: pointer;";

/// Light/dark switch bound to the app-wide theme store. Renders nothing until
/// the store has resolved, so a wrong theme never flashes.
#[component]
pub fn ThemeToggle() -> Element {
    let mut store = use_context::<Signal<AppThemeStore>>();

    use_effect(move || {
        if store.peek().preference().is_none() {
            store.write().resolve();
        }
    });

    let Some(theme) = store.read().preference() else {
        return rsx! {};
    };

    rsx! {
        button {
            class: "flex items-center justify-between",
            style: if theme.is_dark() { DARK_BUTTON } else { LIGHT_BUTTON },
            aria_label: "Toggle dark/light mode",
            onclick: move |_| {
                store.write().toggle();
            },
            ThemeIcons { theme }
        }
    }
}

#[component]
fn ThemeIcons(theme: ThemePreference) -> Element {
    match theme {
        ThemePreference::Light => rsx! {
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "#0A0D1F",
                circle { cx: "12", cy: "12", r: "9" }
            }
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "#0A0D1F",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M21 12.79A9 9 0 1 1 11.21 3a7 7 0 0 0 9.79 9.79z" }
            }
        },
        ThemePreference::Dark => rsx! {
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "#fff",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "12", r: "5" }
                line { x1: "12", y1: "1", x2: "12", y2: "3" }
                line { x1: "12", y1: "21", x2: "12", y2: "23" }
                line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
                line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
                line { x1: "1", y1: "12", x2: "3", y2: "12" }
                line { x1: "21", y1: "12", x2: "23", y2: "12" }
                line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
                line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
            }
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "#fff",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    }
}
