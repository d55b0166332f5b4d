//! ATS readability scoring.
//!
//! Score starts at 100. Each heuristic that fires subtracts its fixed penalty
//! once and appends one issue and one recommendation. The result is clamped at 0.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::{ACTION_VERBS, GRAPHIC_MARKERS};
use crate::analysis::{AnalysisInput, TextAnalyzer};

/// Column-aligned text: runs of spaces or tabs left behind by table layouts.
static TABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}|\t{2,}").unwrap());

/// Date styles, by id: `YYYY-YYYY`, `MM/YYYY-MM/YYYY`, `Month YYYY`.
static DATE_STYLES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\d{4}\s*-\s*\d{4}").unwrap(),
        Regex::new(r"\d{2}/\d{4}\s*-\s*\d{2}/\d{4}").unwrap(),
        Regex::new(r"[A-Za-z]+\s+\d{4}").unwrap(),
    ]
});

const STANDARD_HEADERS: &[&str] = &["experience", "education", "skills"];

const TABLE_PENALTY: u32 = 15;
const GRAPHICS_PENALTY: u32 = 10;
const HEADERS_PENALTY: u32 = 15;
const DENSITY_PENALTY: u32 = 10;
const DATES_PENALTY: u32 = 10;
const TOO_SHORT_PENALTY: u32 = 15;
const TOO_LONG_PENALTY: u32 = 10;

const MIN_DENSITY: u32 = 50;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub keyword_density: u32,
    pub word_count: usize,
}

struct Scorecard {
    score: u32,
    issues: Vec<String>,
    recommendations: Vec<String>,
}

impl Scorecard {
    fn penalize(&mut self, penalty: u32, issue: &str, recommendation: &str) {
        self.score = self.score.saturating_sub(penalty);
        self.issues.push(issue.to_string());
        self.recommendations.push(recommendation.to_string());
    }
}

pub fn analyze_ats(text: &str) -> AtsReport {
    let lower = text.to_lowercase();
    let mut card = Scorecard {
        score: 100,
        issues: Vec::new(),
        recommendations: Vec::new(),
    };

    if has_tables(text) {
        card.penalize(
            TABLE_PENALTY,
            "Contains tables which may not be parsed correctly by ATS",
            "Convert tables to simple text format",
        );
    }

    if GRAPHIC_MARKERS.iter().any(|m| lower.contains(m)) {
        card.penalize(
            GRAPHICS_PENALTY,
            "May contain graphics or images",
            "Remove graphics and images; use text only",
        );
    }

    if !STANDARD_HEADERS.iter().all(|h| lower.contains(h)) {
        card.penalize(
            HEADERS_PENALTY,
            "Missing standard section headers",
            "Use clear section headers: Experience, Education, Skills",
        );
    }

    let keyword_density = keyword_density(&lower);
    if keyword_density < MIN_DENSITY {
        card.penalize(
            DENSITY_PENALTY,
            "Low keyword density",
            "Include more industry-relevant keywords",
        );
    }

    if !has_consistent_dates(text) {
        card.penalize(
            DATES_PENALTY,
            "Inconsistent formatting detected",
            "Use consistent formatting throughout",
        );
    }

    let word_count = text.split_whitespace().count();
    if word_count < MIN_WORDS {
        card.penalize(
            TOO_SHORT_PENALTY,
            "CV is too short",
            "Expand your experience and skills sections",
        );
    } else if word_count > MAX_WORDS {
        card.penalize(TOO_LONG_PENALTY, "CV is too long", "Condense to 1-2 pages");
    }

    AtsReport {
        score: card.score,
        issues: card.issues,
        recommendations: card.recommendations,
        keyword_density,
        word_count,
    }
}

fn has_tables(text: &str) -> bool {
    TABLE_RE.is_match(text)
}

/// Share of the action-verb list present in `lower`, 0–100.
fn keyword_density(lower: &str) -> u32 {
    let found = ACTION_VERBS.iter().filter(|v| lower.contains(*v)).count();
    ((found * 100 / ACTION_VERBS.len()) as u32).min(100)
}

/// Consistent when at most one date style appears across all lines.
fn has_consistent_dates(text: &str) -> bool {
    let mut styles_seen = BTreeSet::new();
    for line in text.split('\n') {
        for (id, style) in DATE_STYLES.iter().enumerate() {
            if style.is_match(line) {
                styles_seen.insert(id);
            }
        }
    }
    styles_seen.len() <= 1
}

pub struct AtsAnalyzer;

impl TextAnalyzer for AtsAnalyzer {
    type Output = AtsReport;

    fn name(&self) -> &'static str {
        "ats"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> AtsReport {
        analyze_ats(input.text)
    }
}
