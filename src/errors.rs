//! Unified application error type.
//! All modules (db, core, web, dns) return AppError to keep the error
//! handling consistent and easy to manage.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid mark field: {0}")]
    InvalidMark(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Presentation
    // ---------------------------
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Chart error: {0}")]
    Chart(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidMark(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::warn!(error = %self, "rejected request");
            self.to_string()
        };

        let body = format!(
            "<!doctype html><title>{code}</title><h1>{code}</h1><p>{message}</p>",
            code = status.as_u16(),
            message = escape_html(&message),
        );
        (status, Html(body)).into_response()
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
