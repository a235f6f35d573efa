//! HTTP surface of the analyzer

pub mod handlers;

use crate::config::Config;
use crate::error::Result;
use crate::processing::analyzer::AnalysisEngine;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Upload size ceiling; resumes are small documents.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
    pub started_at: DateTime<Utc>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/analyze_resume", post(handlers::analyze_resume))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // The browser frontend is served from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the engine from config and serve until shutdown.
pub async fn serve(config: &Config) -> Result<()> {
    let engine = AnalysisEngine::from_config(config)?;
    let state = AppState {
        engine: Arc::new(engine),
        started_at: Utc::now(),
    };

    let app = build_router(state);
    let addr = config.bind_addr();
    log::info!("Resume Analyzer API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
