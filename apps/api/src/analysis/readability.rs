//! Readability statistics: Flesch reading ease approximation, top terms, and
//! plain-language warnings about length and sentence complexity.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisInput, TextAnalyzer};

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());
static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

const STOP_WORDS: &[&str] = &[
    "the", "and", "a", "an", "of", "to", "in", "on", "for", "with", "at", "by", "from", "or",
    "as", "is", "are", "was", "were", "be", "this", "that", "it", "your", "you", "i", "we", "our",
];

const TOP_TERMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub readability: f64,
    pub top_keywords: Vec<TermCount>,
    pub warnings: Vec<String>,
}

pub fn text_stats(text: &str) -> TextStats {
    let clean = text.replace(['\r', '\t'], " ");
    let clean = clean.trim();

    let sentence_count = count_sentences(clean).max(1);
    let tokens = tokenize(clean);
    let word_count = tokens.len();
    let syllables: usize = tokens.iter().map(|t| estimate_syllables(t)).sum();

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllables as f64 / word_count.max(1) as f64;
    let readability = round2(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word);

    let mut warnings = Vec::new();
    if readability < 40.0 {
        warnings.push(
            "Your CV text is quite complex; consider shorter sentences and simpler wording."
                .to_string(),
        );
    } else if readability < 60.0 {
        warnings.push(
            "Readability could be improved; aim for clearer, more concise sentences.".to_string(),
        );
    }
    if word_count < 150 {
        warnings.push(
            "CV appears brief; consider elaborating on experience and achievements.".to_string(),
        );
    }
    if word_count > 1200 {
        warnings.push(
            "CV may be too long; consider condensing to the most impactful information."
                .to_string(),
        );
    }

    TextStats {
        word_count,
        sentence_count,
        readability,
        top_keywords: top_terms(&tokens),
        warnings,
    }
}

fn count_sentences(text: &str) -> usize {
    SENTENCE_END_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Lower-case alphanumeric tokens with stop words removed.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let normalized: String = lower
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|t| !STOP_WORDS.contains(t))
        .map(String::from)
        .collect()
}

fn estimate_syllables(word: &str) -> usize {
    VOWEL_GROUP_RE.find_iter(word).count().max(1)
}

/// Most frequent tokens; ties keep first-occurrence order.
fn top_terms(tokens: &[String]) -> Vec<TermCount> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        counts.entry(token.as_str()).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(TOP_TERMS)
        .map(|(word, count, _)| TermCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct TextStatsAnalyzer;

impl TextAnalyzer for TextStatsAnalyzer {
    type Output = TextStats;

    fn name(&self) -> &'static str {
        "readability"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> TextStats {
        text_stats(input.text)
    }
}
