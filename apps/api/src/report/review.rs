//! AI review of an extracted CV.
//!
//! The model's JSON is untrusted. `LlmReview::from_value` accepts any value
//! and always yields a well-formed review; nothing the model returns can make
//! the endpoint fail after a successful call.
//!
//! `AppState` holds an `Arc<dyn CvReviewer>`, so handlers and tests never
//! depend on the HTTP client directly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{build_review_prompt, REVIEW_SYSTEM};
use crate::llm_client::LlmClient;

const MAX_LIST_ITEMS: usize = 10;
const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmReview {
    pub overall_score: u32, // 0 – 100
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

impl LlmReview {
    pub fn from_value(value: &Value) -> Self {
        Self {
            overall_score: value.get("overall_score").map(parse_score).unwrap_or(0),
            summary: value
                .get("summary")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            strengths: string_list(value.get("strengths")),
            weaknesses: string_list(value.get("weaknesses")),
            recommendations: string_list(value.get("recommendations")),
        }
    }
}

/// Accepts `72`, `72.4`, `"72"` or `"72%"`; anything else scores 0.
fn parse_score(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|f| f.is_finite())
        .map(|f| f.round().clamp(0.0, 100.0) as u32)
        .unwrap_or(0)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .take(MAX_LIST_ITEMS)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Response of `POST /analyze-cv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvReviewResponse {
    #[serde(flatten)]
    pub review: LlmReview,
    pub cv_length: usize,
    pub cv_preview: String,
}

impl CvReviewResponse {
    pub fn new(review: LlmReview, cv_text: &str) -> Self {
        Self {
            review,
            cv_length: cv_text.chars().count(),
            cv_preview: cv_text.chars().take(PREVIEW_CHARS).collect(),
        }
    }
}

#[async_trait]
pub trait CvReviewer: Send + Sync {
    async fn review(&self, cv_text: &str) -> Result<LlmReview, AppError>;
}

/// Reviewer backed by the Anthropic Messages API.
pub struct LlmReviewer {
    llm: LlmClient,
}

impl LlmReviewer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CvReviewer for LlmReviewer {
    async fn review(&self, cv_text: &str) -> Result<LlmReview, AppError> {
        let prompt = build_review_prompt(cv_text);
        let raw = self
            .llm
            .complete_json(REVIEW_SYSTEM, &prompt)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))?;

        let review = LlmReview::from_value(&raw);
        info!(score = review.overall_score, "CV review received");
        Ok(review)
    }
}
