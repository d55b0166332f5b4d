//! Prompt text for the CV review call.

/// Longest CV excerpt sent to the model, in characters.
pub const MAX_PROMPT_CV_CHARS: usize = 12_000;

pub const REVIEW_SYSTEM: &str = "You are an experienced technical recruiter reviewing CVs. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the following CV and return a JSON object with exactly these fields:

{
  "overall_score": <integer from 0 to 100>,
  "summary": "<two or three sentence assessment>",
  "strengths": ["<strength>", ...],
  "weaknesses": ["<weakness>", ...],
  "recommendations": ["<concrete, actionable recommendation>", ...]
}

Judge clarity, structure, quantified achievements, relevance of skills and ATS friendliness.
List at most 10 items per array.

CV:
---
{cv_text}
---"#;

/// Fills the review template, truncating the CV on a char boundary.
pub fn build_review_prompt(cv_text: &str) -> String {
    let excerpt: String = cv_text.chars().take(MAX_PROMPT_CV_CHARS).collect();
    REVIEW_PROMPT_TEMPLATE.replace("{cv_text}", &excerpt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_cv_text() {
        let prompt = build_review_prompt("Jane Roe\nRust engineer");
        assert!(prompt.contains("Jane Roe\nRust engineer"));
        assert!(!prompt.contains("{cv_text}"));
    }

    #[test]
    fn test_prompt_truncates_long_cv() {
        let cv = "é".repeat(MAX_PROMPT_CV_CHARS + 500);
        let prompt = build_review_prompt(&cv);
        assert_eq!(prompt.matches('é').count(), MAX_PROMPT_CV_CHARS);
    }
}
