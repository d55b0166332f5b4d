//! Section detection over the canonical CV section taxonomy.
//!
//! Presence is a whole-document, case-insensitive substring test against each
//! section's keyword variants. It is not scoped to header lines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::BULLET_MARKERS;
use crate::analysis::{has_digit, AnalysisInput, TextAnalyzer};

/// Section name → present in document. Keys from outside the taxonomy are ignored.
pub type SectionPresenceMap = BTreeMap<String, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Awards,
    Publications,
    Languages,
    References,
}

impl Section {
    /// Required sections in their fixed reporting order.
    pub const REQUIRED: [Section; 5] = [
        Section::Contact,
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
    ];

    pub const OPTIONAL: [Section; 6] = [
        Section::Certifications,
        Section::Projects,
        Section::Awards,
        Section::Publications,
        Section::Languages,
        Section::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Contact => "contact",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
            Section::Awards => "awards",
            Section::Publications => "publications",
            Section::Languages => "languages",
            Section::References => "references",
        }
    }

    /// Human label, e.g. `"Experience"`.
    pub fn title(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Lower-case keyword variants that mark the section as present.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::Contact => &["contact", "personal information", "email", "phone"],
            Section::Summary => &["summary", "objective", "profile", "about"],
            Section::Experience => &["experience", "work history", "employment", "work experience"],
            Section::Education => &["education", "academic", "qualifications", "degree"],
            Section::Skills => &["skills", "technical skills", "competencies", "expertise"],
            Section::Certifications => &["certifications", "certificates", "licenses"],
            Section::Projects => &["projects", "portfolio"],
            Section::Awards => &["awards", "honors", "achievements"],
            Section::Publications => &["publications", "papers", "articles"],
            Section::Languages => &["languages", "language proficiency"],
            Section::References => &["references", "referees"],
        }
    }

    pub fn all() -> impl Iterator<Item = Section> {
        Self::REQUIRED.into_iter().chain(Self::OPTIONAL)
    }
}

/// Marks every canonical section present or absent.
pub fn detect(text: &str) -> SectionPresenceMap {
    let lower = text.to_lowercase();
    Section::all()
        .map(|section| {
            let present = section.keywords().iter().any(|kw| lower.contains(kw));
            (section.as_str().to_string(), present)
        })
        .collect()
}

/// Required sections flagged `false`, in declared order.
///
/// A required section missing from the map entirely is NOT reported.
pub fn find_missing(sections: &SectionPresenceMap) -> Vec<String> {
    Section::REQUIRED
        .iter()
        .filter(|s| sections.get(s.as_str()) == Some(&false))
        .map(|s| s.as_str().to_string())
        .collect()
}

/// Scores one section's content 0–100. Empty content scores 0.
///
/// Base 50; +20 over 100 words (else +10 over 50); +15 for a bullet marker;
/// +15 for any digit.
pub fn score_section(content: &str) -> u32 {
    if content.is_empty() {
        return 0;
    }

    let mut score = 50;

    let words = content.split_whitespace().count();
    if words > 100 {
        score += 20;
    } else if words > 50 {
        score += 10;
    }

    if content.contains(BULLET_MARKERS) {
        score += 15;
    }

    if has_digit(content) {
        score += 15;
    }

    score.min(100)
}

pub struct SectionDetector;

impl TextAnalyzer for SectionDetector {
    type Output = SectionPresenceMap;

    fn name(&self) -> &'static str {
        "sections"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> SectionPresenceMap {
        detect(input.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Doe\njohn@example.com\n555-123-4567\nExperience\nDid some work.\nEducation\nBS Computer Science, 2020";

    #[test]
    fn test_detect_covers_every_canonical_section() {
        let map = detect("");
        assert_eq!(map.len(), 11);
        assert!(map.values().all(|present| !present));
    }

    #[test]
    fn test_sample_sections() {
        let map = detect(SAMPLE);
        assert_eq!(map["experience"], true);
        assert_eq!(map["education"], true);
        assert_eq!(map["skills"], false);
        assert_eq!(map["contact"], false);
        assert_eq!(
            find_missing(&map),
            vec!["contact", "summary", "skills"]
        );
    }

    #[test]
    fn test_detect_is_case_insensitive_and_uses_variants() {
        let map = detect("WORK HISTORY\nPortfolio at example.dev\nReferees on request");
        assert!(map["experience"]);
        assert!(map["projects"]);
        assert!(map["references"]);
        assert!(!map["awards"]);
    }

    #[test]
    fn test_whitespace_only_reports_all_required_missing() {
        let missing = find_missing(&detect(" "));
        assert_eq!(
            missing,
            vec!["contact", "summary", "experience", "education", "skills"]
        );
    }

    #[test]
    fn test_find_missing_ignores_absent_and_unknown_keys() {
        let mut map = SectionPresenceMap::new();
        map.insert("skills".to_string(), false);
        map.insert("hobbies".to_string(), false);
        assert_eq!(find_missing(&map), vec!["skills"]);
    }

    #[test]
    fn test_find_missing_never_reports_optional_sections() {
        let map = detect("nothing relevant here");
        let required: Vec<&str> = Section::REQUIRED.iter().map(|s| s.as_str()).collect();
        assert!(find_missing(&map).iter().all(|m| required.contains(&m.as_str())));
    }

    #[test]
    fn test_score_section_empty_is_zero() {
        assert_eq!(score_section(""), 0);
    }

    #[test]
    fn test_score_section_base() {
        assert_eq!(score_section("Wrote code"), 50);
    }

    #[test]
    fn test_score_section_bullets_and_digits() {
        assert_eq!(score_section("• Shipped 3 releases"), 80);
    }

    #[test]
    fn test_score_section_long_content_capped() {
        let content = format!("- {} 42", "word ".repeat(120));
        assert_eq!(score_section(&content), 100);
    }

    #[test]
    fn test_score_section_medium_length() {
        let content = "word ".repeat(60);
        assert_eq!(score_section(&content), 60);
    }

    #[test]
    fn test_section_title() {
        assert_eq!(Section::Experience.title(), "Experience");
        assert_eq!(Section::Contact.title(), "Contact");
    }
}
