//! Suggested resume additions for missing skills

use crate::matching::matcher::SkillSet;

const STATISTICS_SUGGESTION: &str = "Applied statistical methods (hypothesis testing, regression, probability) for analyzing large datasets.";

/// One ready-to-paste suggestion line per missing skill, in set order.
pub fn suggested_additions(missing: &SkillSet) -> Vec<String> {
    missing
        .iter()
        .map(|skill| match skill.as_str() {
            "Statistics" => STATISTICS_SUGGESTION.to_string(),
            other => format!("Highlight experience/projects using {}", other),
        })
        .collect()
}
