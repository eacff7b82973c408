use axum::{routing::{get, post}, Router};

use crate::config::Config;
use crate::handlers::{handle_edit, handle_list, handle_save, handle_view};
use crate::types::AppState;

/// Build the wiki router for `config`
pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/", get(handle_list))
        .route("/view/*title", get(handle_view))
        .route("/edit/*title", get(handle_edit))
        .route("/save/*title", post(handle_save))
        .with_state(AppState::from(config))
}
