//! Heuristic CV analyzers.
//!
//! Every analyzer is a pure function of its input behind the `TextAnalyzer`
//! trait. None of them hold state or return errors.

pub mod ats;
pub mod contact;
pub mod entries;
pub mod keywords;
pub mod readability;
pub mod sections;
pub mod suggestions;
pub mod vocabulary;

use serde::Serialize;

use crate::analysis::sections::SectionPresenceMap;

/// What an analyzer gets to look at.
///
/// Fan-out analyzers read `text` only. The suggestion stage also reads the
/// findings of the section and keyword stages; when those are absent it
/// treats them as an empty map and an empty list.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub text: &'a str,
    pub sections: Option<&'a SectionPresenceMap>,
    pub keywords: Option<&'a [String]>,
}

impl<'a> AnalysisInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            sections: None,
            keywords: None,
        }
    }

    pub fn with_findings(self, sections: &'a SectionPresenceMap, keywords: &'a [String]) -> Self {
        Self {
            sections: Some(sections),
            keywords: Some(keywords),
            ..self
        }
    }
}

/// A capability that turns text (plus optional prior findings) into a result.
/// Implementations must be total: any string in, never an error out.
pub trait TextAnalyzer: Send + Sync {
    type Output: Serialize + Send;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn analyze(&self, input: &AnalysisInput<'_>) -> Self::Output;
}

/// Any Unicode numeric character counts, not only ASCII `0-9`.
pub(crate) fn has_digit(text: &str) -> bool {
    text.chars().any(char::is_numeric)
}
