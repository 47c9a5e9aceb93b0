mod content;
mod theme;

pub use content::ContentError;
pub use theme::ThemeError;
