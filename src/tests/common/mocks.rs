use crate::error::ThemeError;
use crate::utils::{ MemoryHost, ThemeHost, ThemePreference };

/// Wraps a `MemoryHost`, records every write and can refuse to touch the document root.
pub struct RecordingHost {
    pub inner: MemoryHost,
    pub writes: Vec<ThemePreference>,
    pub root_missing: bool,
}

impl RecordingHost {
    pub fn new(inner: MemoryHost) -> Self {
        Self {
            inner,
            writes: Vec::new(),
            root_missing: false,
        }
    }

    pub fn without_root(inner: MemoryHost) -> Self {
        Self {
            root_missing: true,
            ..Self::new(inner)
        }
    }
}

impl ThemeHost for RecordingHost {
    fn stored_theme(&self) -> Result<Option<String>, ThemeError> {
        self.inner.stored_theme()
    }

    fn persist_theme(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        self.writes.push(theme);
        self.inner.persist_theme(theme)
    }

    fn prefers_dark(&self) -> bool {
        self.inner.prefers_dark()
    }

    fn apply_root_class(&mut self, theme: ThemePreference) -> Result<(), ThemeError> {
        if self.root_missing {
            return Err(ThemeError::RootUnavailable("detached document".to_string()));
        }
        self.inner.apply_root_class(theme)
    }
}
