//! Report orchestration: extracted text in, aggregate report out.
//!
//! The text analyzers share nothing, so they fan out on the rayon pool. The
//! suggestion stage is the only fan-in: it waits for the section map and the
//! keyword list.

use std::time::Instant;

use tracing::debug;

use crate::analysis::ats::AtsAnalyzer;
use crate::analysis::contact::ContactExtractor;
use crate::analysis::entries::EntryExtractor;
use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::readability::TextStatsAnalyzer;
use crate::analysis::sections::{find_missing, SectionDetector};
use crate::analysis::suggestions::SuggestionGenerator;
use crate::analysis::{AnalysisInput, TextAnalyzer};
use crate::errors::AppError;
use crate::models::report::{CvReport, ParsedCv};

fn run<A: TextAnalyzer>(analyzer: &A, input: &AnalysisInput<'_>) -> A::Output {
    let started = Instant::now();
    let output = analyzer.analyze(input);
    debug!(
        analyzer = analyzer.name(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "Analyzer finished"
    );
    output
}

/// Runs every analyzer over `full_text` and assembles the report.
pub fn build_report(full_text: String) -> CvReport {
    let input = AnalysisInput::new(&full_text);

    let ((contact, sections), ((skills, ats), (entries, readability))) = rayon::join(
        || {
            rayon::join(
                || run(&ContactExtractor, &input),
                || run(&SectionDetector, &input),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || run(&KeywordExtractor, &input),
                        || run(&AtsAnalyzer, &input),
                    )
                },
                || {
                    rayon::join(
                        || run(&EntryExtractor, &input),
                        || run(&TextStatsAnalyzer, &input),
                    )
                },
            )
        },
    );

    let missing_sections = find_missing(&sections);
    let suggestions = run(
        &SuggestionGenerator,
        &input.with_findings(&sections, &skills),
    );

    CvReport {
        contact,
        experience: entries.experience,
        education: entries.education,
        skills,
        missing_sections,
        sections,
        ats_score: ats.score,
        ats_analysis: ats,
        suggestions,
        readability,
        full_text,
    }
}

/// The lighter `/parse` view: contact fields and entries only.
pub fn parse_cv(full_text: String) -> ParsedCv {
    let input = AnalysisInput::new(&full_text);
    let (contact, entries) = rayon::join(
        || run(&ContactExtractor, &input),
        || run(&EntryExtractor, &input),
    );

    ParsedCv {
        contact,
        experience: entries.experience,
        education: entries.education,
        full_text,
    }
}

/// Moves CPU-bound work (document parsing, analysis) off the async runtime.
pub async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Blocking task failed: {e}")))?
}
