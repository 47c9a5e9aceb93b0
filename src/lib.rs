mod components;
pub mod configs;
pub mod content;
pub mod error;
mod routes;
pub mod server;
mod utils;
mod views;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::{ ContentError, ThemeError };
