//! Request handlers

use crate::error::{Result, ResumeAnalyzerError};
use crate::input;
use crate::processing::analyzer::AnalysisReport;
use crate::server::AppState;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};

/// Health check. Reports which scorer and similarity strategy the process
/// was configured with.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Resume Analyzer API is running",
        "engine": state.engine.engine_name(),
        "similarity": state.engine.similarity_name(),
        "started_at": state.started_at.to_rfc3339(),
    }))
}

/// Score an uploaded resume against a job description. Multipart form with
/// a `file` part and a `job_description` text field.
pub async fn analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ResumeAnalyzerError::InvalidInput(format!("Malformed multipart request: {}", e))
    })? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ResumeAnalyzerError::InvalidInput(
                            "File part has no filename".to_string(),
                        )
                    })?;
                let bytes = field.bytes().await.map_err(|e| {
                    ResumeAnalyzerError::InvalidInput(format!("Failed to read file part: {}", e))
                })?;
                upload = Some((filename, bytes));
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    ResumeAnalyzerError::InvalidInput(format!(
                        "Failed to read job description: {}",
                        e
                    ))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        ResumeAnalyzerError::InvalidInput("Missing 'file' part".to_string())
    })?;
    let job_description = job_description.ok_or_else(|| {
        ResumeAnalyzerError::InvalidInput("Missing 'job_description' field".to_string())
    })?;

    let resume_text = input::extract_text(&bytes, &filename)?;
    log::info!(
        "Analyzing '{}' ({} bytes) against a {}-char job description",
        filename,
        bytes.len(),
        job_description.len()
    );

    let report = state.engine.analyze(&resume_text, &job_description)?;
    Ok(Json(report))
}
