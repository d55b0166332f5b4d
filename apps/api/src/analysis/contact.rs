//! Contact fields: email, phone and candidate name. First match wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisInput, TextAnalyzer};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Loose on purpose: anything phone-shaped passes, no number validation.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").unwrap());

/// Only the first few lines are considered for the name.
const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_CHARS: usize = 50;

/// Absent fields are omitted from JSON, never `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: find_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().to_string()),
    }
}

/// First of the leading lines that is non-empty and shorter than 50 chars once trimmed.
fn find_name(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| !line.is_empty() && line.chars().count() < NAME_MAX_CHARS)
        .map(String::from)
}

pub struct ContactExtractor;

impl TextAnalyzer for ContactExtractor {
    type Output = ContactInfo;

    fn name(&self) -> &'static str {
        "contact"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> ContactInfo {
        extract_contact(input.text)
    }
}
