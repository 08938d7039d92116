//! Match scoring between resume and job description skill sets

use crate::matching::matcher::SkillSet;
use serde::{Deserialize, Serialize};

/// Outcome of comparing resume skills against job description skills.
/// Fully determined by the two input sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Job description skills also present on the resume.
    pub matched: SkillSet,
    /// Job description skills absent from the resume.
    pub missing: SkillSet,
    /// Share of job description skills covered, as a percentage rounded to
    /// two decimals. Zero when the job description has no recognized skills.
    pub score: f64,
}

pub fn score_match(resume_skills: &SkillSet, jd_skills: &SkillSet) -> MatchResult {
    let matched: SkillSet = resume_skills.intersection(jd_skills).cloned().collect();
    let missing: SkillSet = jd_skills.difference(resume_skills).cloned().collect();

    let score = if jd_skills.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / jd_skills.len() as f64 * 100.0)
    };

    MatchResult {
        matched,
        missing,
        score,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
