use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::models::Category;
use crate::render::{render_home, render_projects, ViewState};
use crate::state::AppState;

/// The filter selection carried in the query string. Deserializing through
/// the `Category` enum keeps out-of-vocabulary values from ever reaching a
/// handler — axum rejects them with a 400 at extraction time.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub category: Option<Category>,
}

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let view = ViewState::home(query.category.unwrap_or(Category::All));
    Html(render_home(
        &state.content,
        &state.assets,
        &state.dashboard,
        &view,
    ))
}

/// GET /projects
pub async fn handle_projects(State(state): State<AppState>) -> Html<String> {
    Html(render_projects(
        &state.content,
        &state.assets,
        &ViewState::projects(),
    ))
}
