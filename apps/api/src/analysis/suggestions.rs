//! Improvement suggestions built from section/keyword findings and the raw text.
//!
//! Rules run in a fixed order (missing sections, weak verbs, metrics, skills,
//! formatting). Their output is then stable-sorted by priority, so equal
//! priorities keep rule order.

use serde::{Deserialize, Serialize};

use crate::analysis::sections::{Section, SectionPresenceMap};
use crate::analysis::vocabulary::{BULLET_MARKERS, WEAK_VERBS};
use crate::analysis::{has_digit, AnalysisInput, TextAnalyzer};

/// Sections whose absence triggers a high-priority suggestion. Summary is not one.
const SUGGESTED_SECTIONS: [Section; 4] = [
    Section::Contact,
    Section::Experience,
    Section::Education,
    Section::Skills,
];

const MIN_LINES_WITH_NUMBERS: usize = 3;
const MIN_KEYWORDS: usize = 5;
const EXPAND_BELOW_WORDS: usize = 300;
const CONDENSE_ABOVE_WORDS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    MissingSection,
    VerbImprovement,
    Metrics,
    Skills,
    SkillsOrganization,
    Length,
    Formatting,
}

/// Declaration order is the sort order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub message: String,
    pub example: String,
}

impl Suggestion {
    fn new(kind: SuggestionType, priority: Priority, message: String, example: &str) -> Self {
        Self {
            kind,
            priority,
            section: None,
            message,
            example: example.to_string(),
        }
    }
}

pub fn generate(text: &str, sections: &SectionPresenceMap, keywords: &[String]) -> Vec<Suggestion> {
    let lower = text.to_lowercase();

    let mut suggestions = Vec::new();
    suggestions.extend(missing_sections(sections));
    suggestions.extend(weak_verbs(&lower));
    suggestions.extend(metrics(text));
    suggestions.extend(skills(&lower, keywords));
    suggestions.extend(formatting(text));

    // sort_by_key is stable
    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

/// Only sections present in the map AND flagged false are reported.
fn missing_sections(sections: &SectionPresenceMap) -> Vec<Suggestion> {
    SUGGESTED_SECTIONS
        .iter()
        .filter(|s| sections.get(s.as_str()) == Some(&false))
        .map(|&section| Suggestion {
            section: Some(section.as_str().to_string()),
            ..Suggestion::new(
                SuggestionType::MissingSection,
                Priority::High,
                format!("Add a {} section to your CV", section.title()),
                section_example(section),
            )
        })
        .collect()
}

fn section_example(section: Section) -> &'static str {
    match section {
        Section::Contact => "Name: John Doe\nEmail: john@example.com\nPhone: +1-234-567-8900",
        Section::Experience => {
            "• Software Engineer at Company (2020-2023)\n• Developed web applications using React and Node.js"
        }
        Section::Education => {
            "• Bachelor of Science in Computer Science, University Name (2016-2020)"
        }
        Section::Skills => {
            "• Programming: Python, JavaScript, Java\n• Frameworks: React, Django, Spring Boot"
        }
        _ => "",
    }
}

fn weak_verbs(lower: &str) -> Vec<Suggestion> {
    WEAK_VERBS
        .iter()
        .filter(|(weak, _)| lower.contains(weak))
        .map(|(weak, strong)| {
            Suggestion::new(
                SuggestionType::VerbImprovement,
                Priority::Medium,
                format!("Replace \"{weak}\" with stronger verb like \"{strong}\""),
                &format!("Instead of \"{weak} the project\", use \"{strong} the project\""),
            )
        })
        .collect()
}

fn metrics(text: &str) -> Option<Suggestion> {
    let lines_with_numbers = text.split('\n').filter(|line| has_digit(line)).count();
    (lines_with_numbers < MIN_LINES_WITH_NUMBERS).then(|| {
        Suggestion::new(
            SuggestionType::Metrics,
            Priority::High,
            "Add quantifiable achievements to demonstrate impact".to_string(),
            "Instead of \"Improved system performance\", use \"Improved system performance by 40%, reducing load time from 5s to 3s\"",
        )
    })
}

fn skills(lower: &str, keywords: &[String]) -> Vec<Suggestion> {
    let mut out = Vec::new();

    if keywords.len() < MIN_KEYWORDS {
        out.push(Suggestion::new(
            SuggestionType::Skills,
            Priority::High,
            "Add more relevant skills to your Skills section".to_string(),
            "Include technical skills, tools, frameworks, and methodologies you have experience with",
        ));
    }

    if !lower.contains("technical skills") && !lower.contains("programming languages") {
        out.push(Suggestion::new(
            SuggestionType::SkillsOrganization,
            Priority::Medium,
            "Organize skills into categories".to_string(),
            "Group skills: Programming Languages, Frameworks, Tools, Soft Skills",
        ));
    }

    out
}

fn formatting(text: &str) -> Vec<Suggestion> {
    let mut out = Vec::new();

    // Counted here independently of the ATS scorer; thresholds differ.
    let words = text.split_whitespace().count();
    if words < EXPAND_BELOW_WORDS {
        out.push(Suggestion::new(
            SuggestionType::Length,
            Priority::Medium,
            "Expand your CV with more details".to_string(),
            "Add more bullet points describing your responsibilities and achievements",
        ));
    } else if words > CONDENSE_ABOVE_WORDS {
        out.push(Suggestion::new(
            SuggestionType::Length,
            Priority::Medium,
            "Condense your CV to 1-2 pages".to_string(),
            "Remove older or less relevant experience; focus on recent achievements",
        ));
    }

    if !text.contains(BULLET_MARKERS) {
        out.push(Suggestion::new(
            SuggestionType::Formatting,
            Priority::Low,
            "Use bullet points for better readability".to_string(),
            "Format experience items as bullet points instead of paragraphs",
        ));
    }

    out
}

pub struct SuggestionGenerator;

impl TextAnalyzer for SuggestionGenerator {
    type Output = Vec<Suggestion>;

    fn name(&self) -> &'static str {
        "suggestions"
    }

    fn analyze(&self, input: &AnalysisInput<'_>) -> Vec<Suggestion> {
        let empty = SectionPresenceMap::new();
        generate(
            input.text,
            input.sections.unwrap_or(&empty),
            input.keywords.unwrap_or(&[]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::keywords::extract_keywords;
    use crate::analysis::sections::detect;

    const SAMPLE: &str = "John Doe\njohn@example.com\n555-123-4567\nExperience\nDid some work.\nEducation\nBS Computer Science, 2020";

    fn kinds(suggestions: &[Suggestion]) -> Vec<SuggestionType> {
        suggestions.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_sample_weak_verb_did() {
        let sections = detect(SAMPLE);
        let keywords = extract_keywords(SAMPLE);
        let out = generate(SAMPLE, &sections, &keywords);

        let did = out
            .iter()
            .find(|s| s.kind == SuggestionType::VerbImprovement && s.message.contains("\"did\""))
            .expect("weak verb suggestion for 'did'");
        assert_eq!(did.priority, Priority::Medium);
        assert!(did.message.contains("\"executed\""));

        let missing: Vec<_> = out
            .iter()
            .filter(|s| s.kind == SuggestionType::MissingSection)
            .filter_map(|s| s.section.as_deref())
            .collect();
        assert_eq!(missing, vec!["contact", "skills"]);
    }

    #[test]
    fn test_output_is_stable_sorted_by_priority() {
        let sections = detect(SAMPLE);
        let out = generate(SAMPLE, &sections, &[]);
        let priorities: Vec<Priority> = out.iter().map(|s| s.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);

        // Rule order survives within the high tier: sections, metrics, skills.
        let high: Vec<_> = out
            .iter()
            .filter(|s| s.priority == Priority::High)
            .map(|s| s.kind)
            .collect();
        assert_eq!(
            high,
            vec![
                SuggestionType::MissingSection,
                SuggestionType::MissingSection,
                SuggestionType::Metrics,
                SuggestionType::Skills,
            ]
        );
    }

    #[test]
    fn test_metrics_precedes_weak_verbs() {
        let out = generate("I helped out", &SectionPresenceMap::new(), &[]);
        let k = kinds(&out);
        let metrics_at = k.iter().position(|t| *t == SuggestionType::Metrics).unwrap();
        let verb_at = k
            .iter()
            .position(|t| *t == SuggestionType::VerbImprovement)
            .unwrap();
        assert!(metrics_at < verb_at);
    }

    #[test]
    fn test_absent_section_key_is_not_flagged() {
        let mut sections = SectionPresenceMap::new();
        sections.insert("skills".to_string(), false);
        let out = generate("", &sections, &[]);
        let flagged: Vec<_> = out
            .iter()
            .filter_map(|s| s.section.as_deref())
            .collect();
        assert_eq!(flagged, vec!["skills"]);
    }

    #[test]
    fn test_summary_is_never_suggested() {
        let out = generate("", &detect(""), &[]);
        assert!(out
            .iter()
            .all(|s| s.section.as_deref() != Some("summary")));
        assert_eq!(
            out.iter()
                .filter(|s| s.kind == SuggestionType::MissingSection)
                .count(),
            4
        );
    }

    #[test]
    fn test_weak_verbs_in_declared_order() {
        let out = generate("got it, made it, did it", &SectionPresenceMap::new(), &[]);
        let verbs: Vec<_> = out
            .iter()
            .filter(|s| s.kind == SuggestionType::VerbImprovement)
            .map(|s| s.message.clone())
            .collect();
        assert_eq!(verbs.len(), 3);
        assert!(verbs[0].contains("\"did\""));
        assert!(verbs[1].contains("\"made\""));
        assert!(verbs[2].contains("\"got\""));
    }

    #[test]
    fn test_enough_numbered_lines_skip_metrics() {
        let out = generate("Cut costs 10%\nServed 2M users\nTeam of 5", &SectionPresenceMap::new(), &[]);
        assert!(!kinds(&out).contains(&SuggestionType::Metrics));
    }

    #[test]
    fn test_skill_rules() {
        let five: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let out = generate("Technical Skills: Rust", &SectionPresenceMap::new(), &five);
        let k = kinds(&out);
        assert!(!k.contains(&SuggestionType::Skills));
        assert!(!k.contains(&SuggestionType::SkillsOrganization));

        let out = generate("Tools: Rust", &SectionPresenceMap::new(), &five[..4]);
        let k = kinds(&out);
        assert!(k.contains(&SuggestionType::Skills));
        assert!(k.contains(&SuggestionType::SkillsOrganization));
    }

    #[test]
    fn test_length_rules_are_exclusive() {
        let short = generate("few words", &SectionPresenceMap::new(), &[]);
        assert!(short.iter().any(|s| s.message.starts_with("Expand")));

        let long_text = "word ".repeat(2001);
        let long = generate(&long_text, &SectionPresenceMap::new(), &[]);
        assert!(long.iter().any(|s| s.message.starts_with("Condense")));
        assert!(!long.iter().any(|s| s.message.starts_with("Expand")));

        let middle = generate(&"word ".repeat(500), &SectionPresenceMap::new(), &[]);
        assert!(!kinds(&middle).contains(&SuggestionType::Length));
    }

    #[test]
    fn test_bullet_rule_is_last_and_low() {
        let out = generate("plain paragraph", &SectionPresenceMap::new(), &[]);
        let last = out.last().unwrap();
        assert_eq!(last.kind, SuggestionType::Formatting);
        assert_eq!(last.priority, Priority::Low);

        let out = generate("• bullet", &SectionPresenceMap::new(), &[]);
        assert!(!kinds(&out).contains(&SuggestionType::Formatting));
    }

    #[test]
    fn test_serialized_shape() {
        let out = generate("", &detect(""), &[]);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(json["type"], "missing_section");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["section"], "contact");
        assert_eq!(json["message"], "Add a Contact section to your CV");

        let verb = generate("helped", &SectionPresenceMap::new(), &[])
            .into_iter()
            .find(|s| s.kind == SuggestionType::VerbImprovement)
            .unwrap();
        let json = serde_json::to_value(&verb).unwrap();
        assert!(json.get("section").is_none());
    }

    #[test]
    fn test_analyzer_defaults_missing_findings() {
        let input = AnalysisInput::new("");
        let out = SuggestionGenerator.analyze(&input);
        assert!(kinds(&out).contains(&SuggestionType::Skills));
        assert!(!kinds(&out).contains(&SuggestionType::MissingSection));
    }
}
