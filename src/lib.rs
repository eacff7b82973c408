//! Pagewiki - a minimal personal wiki
//!
//! Pages are plain-text `<title>.txt` files, viewed and edited over HTTP
//! through `view.html`, `edit.html` and `list.html` templates.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use components::TemplateComponent;
pub use config::Config;
pub use errors::WikiError;
pub use routes::build_router;
pub use services::{FileService, PageService};
pub use types::{AppState, Page, PageList, ViewModel};
