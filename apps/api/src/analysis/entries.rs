//! Experience and education entries sliced out of the raw text.
//!
//! A section starts at the first line containing one of its keyword variants
//! and runs until the next short header-like line. The block is then cut
//! wherever a line opens a new bulleted or numbered item.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::HEADER_WORDS;
use crate::analysis::{AnalysisInput, TextAnalyzer};

/// Line prefix that opens a new entry: a bullet marker or `12.`
static ENTRY_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[•\-*]|\d+\.)").unwrap());

const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "qualifications"];

const EXPERIENCE_MIN_CHARS: usize = 20;
const EDUCATION_MIN_CHARS: usize = 10;

/// Header lines are short; a long line mentioning "skills" is body text.
const HEADER_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvEntries {
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
}

pub fn extract_experience(text: &str) -> Vec<Entry> {
    extract_entries(text, EXPERIENCE_KEYWORDS, EXPERIENCE_MIN_CHARS)
}

pub fn extract_education(text: &str) -> Vec<Entry> {
    extract_entries(text, EDUCATION_KEYWORDS, EDUCATION_MIN_CHARS)
}

fn extract_entries(text: &str, keywords: &[&str], min_chars: usize) -> Vec<Entry> {
    let block = match find_section(text, keywords) {
        Some(block) => block,
        None => return Vec::new(),
    };

    split_entries(&block)
        .into_iter()
        .map(|chunk| chunk.trim().to_string())
        .filter(|chunk| chunk.chars().count() > min_chars)
        .map(|description| Entry { description })
        .collect()
}

/// Lines after the first keyword hit, up to (not including) the next header.
fn find_section(text: &str, keywords: &[&str]) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        keywords.iter().any(|kw| lower.contains(kw))
    })?;

    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| !is_section_header(line))
        .copied()
        .collect();

    // An empty block reads as "section not found".
    let block = body.join("\n");
    (!block.is_empty()).then_some(block)
}

fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();
    HEADER_WORDS.iter().any(|h| lower.contains(h)) && trimmed.chars().count() < HEADER_MAX_CHARS
}

/// Splits on the newline before each line that opens an entry.
fn split_entries(block: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for (i, line) in block.split('\n').enumerate() {
        if i > 0 && ENTRY_START_RE.is_match(line) {
            chunks.push(std::mem::take(&mut current));
            current.push_str(line);
        } else {
            if i > 0 {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    chunks.push(current);
    chunks
}

pub struct EntryExtractor;

impl TextAnalyzer for EntryExtractor {
    type Output = CvEntries;

    fn name(&self) -> &'static str {
        "entries"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> CvEntries {
        CvEntries {
            experience: extract_experience(input.text),
            education: extract_education(input.text),
        }
    }
}
