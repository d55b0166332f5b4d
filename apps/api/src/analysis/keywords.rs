//! Skill/keyword extraction against the fixed vocabularies.
//!
//! Matching is plain substring containment on the lower-cased text, so short
//! terms over-match ("java" inside "javascript", "r" almost anywhere). That
//! trade of precision for recall is accepted.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::vocabulary::{SOFT_SKILLS, TECH_SKILLS};
use crate::analysis::{AnalysisInput, TextAnalyzer};

/// A language name with an optional version on the same line ("python 3.11",
/// "c++ 17"). A number on the following line is never taken as the version.
/// `c++` ends in non-word characters, so it gets no trailing `\b`.
static LANGUAGE_VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:(?:python|javascript|java|ruby|php|go)(?:[ \t]*\d+(?:\.\d+)*)?\b|c\+\+(?:[ \t]*\d+(?:\.\d+)*\b)?)",
    )
    .unwrap()
});

/// Sorted, de-duplicated keywords found in `text`.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: BTreeSet<String> = BTreeSet::new();

    for term in TECH_SKILLS.iter().chain(SOFT_SKILLS) {
        if lower.contains(term) {
            found.insert((*term).to_string());
        }
    }

    for m in LANGUAGE_VERSION_RE.find_iter(&lower) {
        let token = m.as_str().trim();
        if !token.is_empty() {
            found.insert(token.to_string());
        }
    }

    found.into_iter().collect()
}

pub struct KeywordExtractor;

impl TextAnalyzer for KeywordExtractor {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "keywords"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> Vec<String> {
        extract_keywords(input.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_sorted_and_unique() {
        let kws = extract_keywords("Docker, docker, DOCKER and Kubernetes with AWS");
        let mut sorted = kws.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(kws, sorted);
        assert_eq!(kws.iter().filter(|k| *k == "docker").count(), 1);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Led a team using Python 3.11, React and PostgreSQL. Strong communication.";
        assert_eq!(extract_keywords(text), extract_keywords(text));
    }

    #[test]
    fn test_tech_and_soft_skills() {
        let kws = extract_keywords("Leadership and mentoring; built microservices in Kotlin");
        for expected in ["leadership", "mentoring", "microservices", "kotlin"] {
            assert!(kws.contains(&expected.to_string()), "missing {expected}: {kws:?}");
        }
    }

    #[test]
    fn test_language_with_version_is_captured() {
        let kws = extract_keywords("Python 3.11 and PHP 8 daily");
        assert!(kws.contains(&"python 3.11".to_string()), "{kws:?}");
        assert!(kws.contains(&"php 8".to_string()), "{kws:?}");
        assert!(kws.contains(&"python".to_string()));
    }

    #[test]
    fn test_year_on_next_line_is_not_a_version() {
        let kws = extract_keywords("Skills: Python\n2018 - 2020 Acme Corp\nJava\n2019-2021 Initech");
        assert_eq!(kws, vec!["java", "python", "r"]);
        assert!(kws.iter().all(|k| !k.contains('\n')));
    }

    #[test]
    fn test_cpp_with_version() {
        let kws = extract_keywords("Modern C++ 17, some Go");
        assert!(kws.contains(&"c++ 17".to_string()), "{kws:?}");
        assert!(kws.contains(&"go".to_string()), "{kws:?}");
    }

    #[test]
    fn test_bare_language_name_is_captured() {
        let kws = extract_keywords("I write Ruby.");
        assert!(kws.contains(&"ruby".to_string()));
    }

    #[test]
    fn test_substring_false_positive_is_kept() {
        // "java" is found inside "javascript" by the substring pass.
        let kws = extract_keywords("javascript");
        assert!(kws.contains(&"java".to_string()));
        assert!(kws.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_go_does_not_match_inside_words_via_pattern() {
        // The substring pass still finds "go" in "good"; the pattern must not add "good".
        let kws = extract_keywords("good");
        assert!(!kws.iter().any(|k| k == "good"));
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords("").is_empty());
    }
}
