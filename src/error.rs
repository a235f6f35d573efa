//! Error handling for the resume analyzer service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Unsupported file type: {0}. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFormat(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Every failure collapses to a generic 500 carrying the error message.
/// The API has a single consumer and no retry logic, so there is no
/// per-variant status mapping.
impl IntoResponse for ResumeAnalyzerError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self);
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
