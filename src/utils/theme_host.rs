use std::collections::BTreeSet;
use crate::error::ThemeError;
use super::theme_state::{ ThemeHost, ThemePreference };

/// In-process host used outside the browser (server rendering, desktop) and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    stored: Option<String>,
    storage_enabled: bool,
    prefers_dark: bool,
    root_classes: BTreeSet<String>,
}

impl MemoryHost {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            stored: None,
            storage_enabled: true,
            prefers_dark,
            root_classes: BTreeSet::new(),
        }
    }

    /// A host whose storage rejects every read and write.
    pub fn without_storage(prefers_dark: bool) -> Self {
        Self {
            storage_enabled: false,
            ..Self::new(prefers_dark)
        }
    }

    pub fn seed(&mut self, value: &str) {
        self.stored = Some(value.to_string());
    }

    pub fn add_root_class(&mut self, class: &str) {
        self.root_classes.insert(class.to_string());
    }

    pub fn persisted(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    pub fn root_classes(&self) -> Vec<&str> {
        self.root_classes.iter().map(String::as_str).collect()
    }
}

impl ThemeHost for MemoryHost {
    fn stored_theme(&self) -> Result<Option<String>, ThemeError> {
        if !self.storage_enabled {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_string()));
        }
        Ok(self.stored.clone())
    }

    fn persist_theme(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        if !self.storage_enabled {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_string()));
        }
        self.stored = Some(theme.as_str().to_string());
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn apply_root_class(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.root_classes.remove(ThemePreference::Light.as_str());
        self.root_classes.remove(ThemePreference::Dark.as_str());
        self.root_classes.insert(theme.as_str().to_string());
        Ok(())
    }
}

/// Host backed by `localStorage`, `matchMedia` and the `<html>` class list.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsValue;
    use web_sys::{ Element, Storage, Window };
    use crate::error::ThemeError;
    use crate::utils::theme_state::{ ThemeHost, ThemePreference, DARK_SCHEME_QUERY, THEME_KEY };
    use super::BrowserHost;

    fn js_message(value: JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    fn window() -> Option<Window> {
        web_sys::window()
    }

    fn storage() -> Result<Storage, ThemeError> {
        window()
            .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| ThemeError::StorageUnavailable(js_message(e)))?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_string()))
    }

    fn root() -> Result<Element, ThemeError> {
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::RootUnavailable("no document element".to_string()))
    }

    impl ThemeHost for BrowserHost {
        fn stored_theme(&self) -> Result<Option<String>, ThemeError> {
            storage()?
                .get_item(THEME_KEY)
                .map_err(|e| ThemeError::StorageUnavailable(js_message(e)))
        }

        fn persist_theme(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
            storage()?
                .set_item(THEME_KEY, theme.as_str())
                .map_err(|e| ThemeError::StorageUnavailable(js_message(e)))
        }

        fn prefers_dark(&self) -> bool {
            window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map(|query| query.matches())
                .unwrap_or(false)
        }

        fn apply_root_class(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
            let classes = root()?.class_list();
            classes
                .remove_2(ThemePreference::Light.as_str(), ThemePreference::Dark.as_str())
                .map_err(|e| ThemeError::RootUnavailable(js_message(e)))?;
            classes
                .add_1(theme.as_str())
                .map_err(|e| ThemeError::RootUnavailable(js_message(e)))
        }
    }
}

/// Script that makes `theme` the only theming class on `<html>`.
#[cfg(any(feature = "desktop", test))]
fn root_class_script(theme: ThemePreference) -> String {
    format!(
        "document.documentElement.classList.remove({:?}, {:?}); document.documentElement.classList.add({:?});",
        ThemePreference::Light.as_str(),
        ThemePreference::Dark.as_str(),
        theme.as_str()
    )
}

#[cfg(any(feature = "desktop", test))]
fn persist_script(theme: ThemePreference) -> String {
    format!(
        "try {{ localStorage.setItem({:?}, {:?}); }} catch (e) {{}}",
        super::theme_state::THEME_KEY,
        theme.as_str()
    )
}

/// Desktop host: the webview's document is only reachable through `eval`, which
/// cannot answer synchronously, so reads come from memory and writes are mirrored
/// into the page. A choice therefore lasts for the running window only.
#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
#[derive(Debug, Clone, Default)]
pub struct WebviewHost {
    memory: MemoryHost,
}

#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
impl ThemeHost for WebviewHost {
    fn stored_theme(&self) -> Result<Option<String>, ThemeError> {
        self.memory.stored_theme()
    }

    fn persist_theme(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.memory.persist_theme(theme)?;
        let _ = dioxus::document::eval(&persist_script(theme));
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        self.memory.prefers_dark()
    }

    fn apply_root_class(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.memory.apply_root_class(theme)?;
        let _ = dioxus::document::eval(&root_class_script(theme));
        Ok(())
    }
}

/// The host the running app uses.
#[cfg(target_arch = "wasm32")]
pub type PlatformHost = BrowserHost;
#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
pub type PlatformHost = WebviewHost;
#[cfg(all(not(feature = "desktop"), not(target_arch = "wasm32")))]
pub type PlatformHost = MemoryHost;

#[cfg(target_arch = "wasm32")]
pub fn platform_host() -> PlatformHost {
    BrowserHost
}

#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
pub fn platform_host() -> PlatformHost {
    WebviewHost::default()
}

#[cfg(all(not(feature = "desktop"), not(target_arch = "wasm32")))]
pub fn platform_host() -> PlatformHost {
    MemoryHost::new(false)
}
