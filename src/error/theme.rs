use std::fmt::{ Display, Formatter };

/// Failure of the platform side of theming. Never shown to the user; the store
/// logs these and keeps going with its in-memory preference.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    StorageUnavailable(String),
    RootUnavailable(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            ThemeError::RootUnavailable(msg) => write!(f, "Document root unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}
