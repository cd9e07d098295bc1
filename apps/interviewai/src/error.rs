//! # Error Module
//!
//! Application errors and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use interviewai_core::CoreError;
use thiserror::Error;
use tracing::error;

use crate::views::escape;

/// Errors from the InterviewAI app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Filesystem or socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// A submitted form was missing required input.
    #[error("{0}")]
    Validation(String),

    /// A page could not be produced.
    #[error("render error: {0}")]
    Render(String),

    /// The session cookie could not be encoded or decoded.
    #[error("session error: {0}")]
    Session(String),

    /// The static export could not proceed.
    #[error("export error: {0}")]
    Export(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core rejected display data.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"/><title>Error</title></head>\
             <body><h1>{}</h1><p>{}</p><p><a href=\"/\">Back to Home</a></p></body></html>",
            status.as_u16(),
            escape(&self.to_string()),
        );
        (status, Html(body)).into_response()
    }
}
