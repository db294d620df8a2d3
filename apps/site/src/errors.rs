#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid content data: {0}")]
    InvalidData(#[from] InvalidDataError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidData(e) => {
                // Content is compiled in, so this is an authoring bug that
                // slipped past the test suite.
                tracing::error!("Invalid content data: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_DATA",
                    "Malformed content data".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Malformed literal chart tables. Impossible at runtime when the test suite
/// is green; `main` propagates it, so a bad literal fails the process at
/// startup instead of rendering a broken dashboard.
#[derive(Debug, Error)]
pub enum InvalidDataError {
    #[error("negative count for '{label}': {count}")]
    NegativeCount { label: String, count: i64 },

    #[error("empty source table for {chart} chart")]
    Empty { chart: &'static str },

    #[error("growth series years out of order: {prev} is not before {next}")]
    YearOrder { prev: i32, next: i32 },

    #[error("cumulative total decreases at year {year}: {prev} -> {next}")]
    NonMonotonic { year: i32, prev: i64, next: i64 },
}

/// A missing or unreadable optional local asset. Recovered at startup: the
/// loader logs a warning and the renderer degrades that element to a
/// placeholder — the page never aborts for a missing asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read asset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}
