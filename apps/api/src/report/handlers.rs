use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::ats::{analyze_ats, AtsReport};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::readability::{text_stats, TextStats};
use crate::analysis::sections::{detect, find_missing, score_section, SectionPresenceMap};
use crate::analysis::suggestions::{generate, Suggestion};
use crate::errors::AppError;
use crate::extraction::{self, DocumentFormat};
use crate::models::report::{CvReport, ParsedCv};
use crate::report::pipeline::{build_report, parse_cv, run_blocking};
use crate::report::review::CvReviewResponse;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestionsRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub sections: SectionPresenceMap,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Serialize)]
pub struct SectionsResponse {
    pub sections: SectionPresenceMap,
    pub missing_sections: Vec<String>,
}

#[derive(Serialize)]
pub struct SectionScoreResponse {
    pub score: u32,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// Pulls the `file` field out of a multipart body. The extension is checked
/// before the field body is read.
async fn read_upload(mut multipart: Multipart, limit: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        DocumentFormat::from_filename(&filename)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit))?;
        return Ok(Upload { filename, bytes });
    }

    Err(AppError::Validation("No file provided".to_string()))
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the {limit}-byte limit"))
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

fn require_text(text: Option<String>) -> Result<String, AppError> {
    text.ok_or_else(|| AppError::Validation("No text provided".to_string()))
}

/// POST /parse
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParsedCv>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    info!(filename = %upload.filename, "Parsing CV");

    let parsed = run_blocking(move || {
        let document = extraction::extract(&upload.bytes, &upload.filename)?;
        Ok(parse_cv(document.full_text))
    })
    .await?;
    Ok(Json(parsed))
}

/// POST /analyze-complete
pub async fn handle_analyze_complete(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CvReport>, AppError> {
    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    info!(filename = %upload.filename, "Analyzing CV");

    let min_chars = state.config.min_text_chars;
    let report = run_blocking(move || {
        let document = extraction::extract(&upload.bytes, &upload.filename)?;
        document.require_min_chars(min_chars)?;
        Ok(build_report(document.full_text))
    })
    .await?;

    info!(
        ats_score = report.ats_score,
        suggestions = report.suggestions.len(),
        "CV analysis complete"
    );
    Ok(Json(report))
}

/// POST /analyze-cv
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CvReviewResponse>, AppError> {
    let reviewer = state.reviewer.clone().ok_or_else(|| {
        AppError::ServiceUnavailable(
            "AI review is not configured; set ANTHROPIC_API_KEY to enable it".to_string(),
        )
    })?;

    let upload = read_upload(multipart, state.config.max_upload_bytes).await?;
    info!(filename = %upload.filename, "Requesting AI review");

    let min_chars = state.config.min_text_chars;
    let text = run_blocking(move || {
        let document = extraction::extract(&upload.bytes, &upload.filename)?;
        document.require_min_chars(min_chars)?;
        Ok(document.full_text)
    })
    .await?;

    let review = reviewer.review(&text).await?;
    Ok(Json(CvReviewResponse::new(review, &text)))
}

/// POST /extract-keywords
pub async fn handle_extract_keywords(
    Json(req): Json<TextRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let text = require_text(req.text)?;
    Ok(Json(KeywordsResponse {
        keywords: extract_keywords(&text),
    }))
}

/// POST /detect-sections
pub async fn handle_detect_sections(
    Json(req): Json<TextRequest>,
) -> Result<Json<SectionsResponse>, AppError> {
    let text = require_text(req.text)?;
    let sections = detect(&text);
    let missing_sections = find_missing(&sections);
    Ok(Json(SectionsResponse {
        sections,
        missing_sections,
    }))
}

/// POST /score-section
/// Grades one section's content on its own.
pub async fn handle_score_section(
    Json(req): Json<TextRequest>,
) -> Result<Json<SectionScoreResponse>, AppError> {
    let text = require_text(req.text)?;
    Ok(Json(SectionScoreResponse {
        score: score_section(&text),
    }))
}

/// POST /analyze-ats
pub async fn handle_analyze_ats(Json(req): Json<TextRequest>) -> Result<Json<AtsReport>, AppError> {
    let text = require_text(req.text)?;
    Ok(Json(analyze_ats(&text)))
}

/// POST /generate-suggestions
pub async fn handle_generate_suggestions(
    Json(req): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let text = require_text(req.text)?;
    Ok(Json(SuggestionsResponse {
        suggestions: generate(&text, &req.sections, &req.keywords),
    }))
}

/// POST /text-stats
pub async fn handle_text_stats(Json(req): Json<TextRequest>) -> Result<Json<TextStats>, AppError> {
    let text = require_text(req.text)?;
    Ok(Json(text_stats(&text)))
}
