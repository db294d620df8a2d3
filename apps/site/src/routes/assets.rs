use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::assets::content_type_for;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /styles/main.css
pub async fn handle_stylesheet(State(state): State<AppState>) -> Result<Response, AppError> {
    match &state.assets.stylesheet {
        Some(css) => Ok(([(header::CONTENT_TYPE, "text/css")], css.clone()).into_response()),
        None => Err(AppError::NotFound("styles/main.css".to_string())),
    }
}

/// GET /assets/:file
///
/// The résumé and profile photo are served from the copies loaded at
/// startup. Gallery media are browser-fetched collaborator resources and
/// read from the assets directory per request.
pub async fn handle_asset(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    if file.contains('/') || file.contains('\\') || file.contains("..") {
        return Err(AppError::Validation(format!("invalid asset name: {file}")));
    }

    let preloaded = [&state.assets.resume, &state.assets.profile_image]
        .into_iter()
        .flatten()
        .find(|asset| asset.file_name == file);
    if let Some(asset) = preloaded {
        return Ok(asset_response(asset.content_type, asset.bytes.clone()));
    }

    let path = state.config.assets_dir.join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(asset_response(content_type_for(&file), Bytes::from(bytes))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("asset {file}")))
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("reading asset {file}"))
            .into()),
    }
}

fn asset_response(content_type: &'static str, bytes: Bytes) -> Response {
    ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
}
