use crate::error::ThemeError;

/// Storage key holding the persisted preference.
pub const THEME_KEY: &str = "theme";

/// Media query consulted when nothing has been persisted yet.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Accepts exactly the two persisted literals; anything else is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// The platform side of theming: durable storage, the ambient color-scheme
/// signal and the document root class list.
pub trait ThemeHost {
    fn stored_theme(&self) -> Result<Option<String>, ThemeError>;
    fn persist_theme(&mut self, theme: ThemePreference) -> Result<(), ThemeError>;
    fn prefers_dark(&self) -> bool;
    fn apply_root_class(&mut self, theme: ThemePreference) -> Result<(), ThemeError>;
}

/// Owns the display theme. Starts unresolved; `resolve` settles it once and
/// `toggle` is the only way to change it afterwards.
pub struct ThemeStore<H: ThemeHost> {
    preference: Option<ThemePreference>,
    host: H,
}

impl<H: ThemeHost> ThemeStore<H> {
    pub fn new(host: H) -> Self {
        Self { preference: None, host }
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        self.preference
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn resolve(&mut self) -> ThemePreference {
        if let Some(theme) = self.preference {
            return theme;
        }

        let stored = match self.host.stored_theme() {
            Ok(value) => value.as_deref().and_then(ThemePreference::parse),
            Err(e) => {
                log::warn!("Ignoring persisted theme: {}", e);
                None
            }
        };

        let theme = match stored {
            Some(theme) => {
                log::info!("Using persisted theme: {}", theme.as_str());
                theme
            }
            None if self.host.prefers_dark() => {
                log::info!("No persisted theme, platform prefers dark");
                ThemePreference::Dark
            }
            None => {
                log::info!("No persisted theme, defaulting to light");
                ThemePreference::Light
            }
        };

        self.set(theme);
        theme
    }

    /// Flips light and dark. Does nothing until the store has been resolved.
    pub fn toggle(&mut self) -> Option<ThemePreference> {
        let next = self.preference?.toggled();
        log::info!("Theme toggled to {}", next.as_str());
        self.set(next);
        Some(next)
    }

    fn set(&mut self, theme: ThemePreference) {
        self.preference = Some(theme);
        // Persistence is best-effort: the in-memory value governs rendering.
        if let Err(e) = self.host.apply_root_class(theme) {
            log::warn!("Could not apply theme class: {}", e);
        }
        if let Err(e) = self.host.persist_theme(theme) {
            log::warn!("Could not persist theme: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryHost;

    #[test]
    fn parse_accepts_only_exact_literals() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(" light"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn unresolved_until_resolve() {
        let store = ThemeStore::new(MemoryHost::new(true));
        assert_eq!(store.preference(), None);
    }

    #[test]
    fn toggle_before_resolve_is_noop() {
        let mut store = ThemeStore::new(MemoryHost::new(false));
        assert_eq!(store.toggle(), None);
        assert_eq!(store.preference(), None);
        assert_eq!(store.host().persisted(), None);
    }

    #[test]
    fn persisted_value_wins_over_platform() {
        let mut host = MemoryHost::new(true);
        host.seed("light");
        let mut store = ThemeStore::new(host);
        assert_eq!(store.resolve(), ThemePreference::Light);
    }

    #[test]
    fn garbage_persisted_value_falls_back_to_platform() {
        let mut host = MemoryHost::new(true);
        host.seed("solarized");
        let mut store = ThemeStore::new(host);
        assert_eq!(store.resolve(), ThemePreference::Dark);
        assert_eq!(store.host().persisted(), Some("dark"));
    }

    #[test]
    fn resolve_runs_once() {
        let mut store = ThemeStore::new(MemoryHost::new(false));
        store.resolve();
        store.toggle();
        assert_eq!(store.resolve(), ThemePreference::Dark);
    }
}
