use std::sync::Arc;

use crate::assets::LoadedAssets;
use crate::charts::Dashboard;
use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is built once in `main` and read-only afterwards — one
/// render pass per request, no shared mutable state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub assets: Arc<LoadedAssets>,
    pub dashboard: Arc<Dashboard>,
    pub config: Config,
}
