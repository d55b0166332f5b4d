pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::report::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Document uploads
        .route("/parse", post(handlers::handle_parse))
        .route("/analyze-complete", post(handlers::handle_analyze_complete))
        .route("/analyze-cv", post(handlers::handle_analyze_cv))
        // Text analysis
        .route("/extract-keywords", post(handlers::handle_extract_keywords))
        .route("/detect-sections", post(handlers::handle_detect_sections))
        .route("/score-section", post(handlers::handle_score_section))
        .route("/analyze-ats", post(handlers::handle_analyze_ats))
        .route(
            "/generate-suggestions",
            post(handlers::handle_generate_suggestions),
        )
        .route("/text-stats", post(handlers::handle_text_stats))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
