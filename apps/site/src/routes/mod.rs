pub mod api;
pub mod assets;
pub mod health;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_home))
        .route("/projects", get(pages::handle_projects))
        .route("/health", get(health::health_handler))
        // Dashboard & gallery API
        .route("/api/v1/gallery", get(api::handle_get_gallery))
        .route("/api/v1/charts", get(api::handle_get_charts))
        // Optional local assets
        .route("/styles/main.css", get(assets::handle_stylesheet))
        .route("/assets/:file", get(assets::handle_asset))
        .with_state(state)
}
