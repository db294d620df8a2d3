use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::charts::Dashboard;
use crate::filter::filter_gallery;
use crate::models::{Category, GalleryEntry};
use crate::routes::pages::HomeQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub selection: Category,
    pub entries: Vec<GalleryEntry>,
}

/// GET /api/v1/gallery
/// The filtered gallery as JSON — same filter the home page applies.
pub async fn handle_get_gallery(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Json<GalleryResponse> {
    let selection = query.category.unwrap_or(Category::All);
    let entries = filter_gallery(state.content.gallery(), selection)
        .into_iter()
        .cloned()
        .collect();
    Json(GalleryResponse { selection, entries })
}

/// GET /api/v1/charts
/// The three precomputed chart specs for the charting collaborator.
pub async fn handle_get_charts(State(state): State<AppState>) -> Json<Dashboard> {
    Json(state.dashboard.as_ref().clone())
}
