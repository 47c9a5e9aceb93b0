mod menu_state;
mod theme_host;
mod theme_state;

pub use menu_state::{ MenuEvent, MenuState };
#[cfg(target_arch = "wasm32")]
pub use theme_host::BrowserHost;
#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
pub use theme_host::WebviewHost;
pub use theme_host::{ platform_host, MemoryHost, PlatformHost };
pub use theme_state::{ ThemeHost, ThemePreference, ThemeStore, DARK_SCHEME_QUERY, THEME_KEY };

/// The store type the running app injects as context.
pub type AppThemeStore = ThemeStore<PlatformHost>;
