use dioxus::prelude::*;
use blog_site::{ platform_host, Route, ThemeStore };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger setup failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let theme = use_signal(|| ThemeStore::new(platform_host()));
    use_context_provider(|| theme);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                log::error!("Page failed to render: {:?}", errors);
                rsx! {
                    main {
                        class: "flex min-h-screen flex-col items-center justify-center p-24 bg-[#090D1F] text-white",
                        h1 { class: "text-4xl font-bold mb-4", "Something went wrong" }
                        p { class: "text-[#C0C5D0]", "The blog content could not be loaded." }
                    }
                }
            },
            Router::<Route> {}
        }
    }
}
