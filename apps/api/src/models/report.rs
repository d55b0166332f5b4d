use serde::{Deserialize, Serialize};

use crate::analysis::ats::AtsReport;
use crate::analysis::contact::ContactInfo;
use crate::analysis::entries::Entry;
use crate::analysis::readability::TextStats;
use crate::analysis::sections::SectionPresenceMap;
use crate::analysis::suggestions::Suggestion;

/// Response of `POST /parse`: the extracted text plus the structured fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCv {
    pub full_text: String,
    pub contact: ContactInfo,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
}

/// The aggregate "upload a CV, get a report" result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvReport {
    pub full_text: String,
    pub contact: ContactInfo,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
    /// Sorted, deduplicated.
    pub skills: Vec<String>,
    pub sections: SectionPresenceMap,
    pub missing_sections: Vec<String>,
    pub ats_score: u32,
    pub ats_analysis: AtsReport,
    pub suggestions: Vec<Suggestion>,
    pub readability: TextStats,
}
