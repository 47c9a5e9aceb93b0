use dioxus::prelude::*;
use crate::components::{ MobileMenu, ThemeToggle };
use crate::content::{ Listing, Post };
use crate::utils::{ platform_host, MenuEvent, ThemeStore };

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn closed_menu() -> Element {
    rsx! {
        div { id: "shell", MobileMenu { open: false, on_close: |_: MenuEvent| {} } }
    }
}

fn unresolved_toggle() -> Element {
    let store = use_signal(|| ThemeStore::new(platform_host()));
    use_context_provider(|| store);
    rsx! {
        div { id: "bar", ThemeToggle {} }
    }
}

fn resolved_toggle() -> Element {
    let store = use_signal(|| {
        let mut store = ThemeStore::new(platform_host());
        store.resolve();
        store
    });
    use_context_provider(|| store);
    rsx! {
        div { id: "bar", ThemeToggle {} }
    }
}

#[component]
fn FailingListing() -> Element {
    let fetched: Result<Vec<Post>, ServerFnError> =
        Err(ServerFnError::ServerError("status 500".to_string()));
    let listing = Listing::from_fetched(&fetched)?;
    rsx! {
        h2 { "Recent blog posts" }
        p { "{listing.recent.len()} recent" }
    }
}

fn guarded_listing() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { p { "could not load" } },
            FailingListing {}
        }
    }
}

#[test]
fn closed_overlay_is_absent() {
    let html = render(closed_menu);
    assert!(html.contains("shell"), "{}", html);
    assert!(!html.contains("Close menu"), "{}", html);
    assert!(!html.contains("Your Name"), "{}", html);
    assert!(!html.contains("Newsletter"), "{}", html);
}

#[test]
fn toggle_renders_nothing_until_resolved() {
    let html = render(unresolved_toggle);
    assert!(html.contains("bar"), "{}", html);
    assert!(!html.contains("<button"), "{}", html);
}

#[test]
fn toggle_renders_once_resolved() {
    let html = render(resolved_toggle);
    assert!(html.contains("Toggle dark/light mode"), "{}", html);
}

#[test]
fn failed_listing_renders_no_sections() {
    let html = render(guarded_listing);
    assert!(!html.contains("Recent blog posts"), "{}", html);
    assert!(!html.contains("recent"), "{}", html);
}
