// Make common test utilities available
pub mod common;
mod rendering;
mod theme;
