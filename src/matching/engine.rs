//! Orchestration of the matching pipeline

use crate::config::Config;
use crate::error::Result;
use crate::matching::matcher::{MatchMode, SkillMatcher, SkillSet};
use crate::matching::scoring::{score_match, MatchResult};
use crate::matching::suggestions::suggested_additions;
use crate::matching::vocabulary::SkillVocabulary;
use log::debug;
use serde::{Deserialize, Serialize};

/// Skill findings for one resume and job description pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub resume_skills: SkillSet,
    pub jd_skills: SkillSet,
    pub result: MatchResult,
    pub suggestions: Vec<String>,
}

pub struct MatchEngine {
    matcher: SkillMatcher,
}

impl MatchEngine {
    pub fn new(matcher: SkillMatcher) -> Self {
        Self { matcher }
    }

    /// Build an engine with the vocabulary and matching mode from
    /// configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = SkillVocabulary::from_terms(config.vocabulary.terms.iter().cloned());
        let mode = if config.matching.phrase_matching {
            MatchMode::Phrase
        } else {
            MatchMode::Token
        };

        Ok(Self::new(SkillMatcher::new(vocabulary, mode)?))
    }

    /// Scan both texts and score the overlap. Pure: the same pair of texts
    /// always produces the same analysis.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> SkillAnalysis {
        let resume_skills = self.matcher.find_skills(resume_text);
        let jd_skills = self.matcher.find_skills(jd_text);
        debug!(
            "Found {} resume skills and {} job description skills",
            resume_skills.len(),
            jd_skills.len()
        );

        let result = score_match(&resume_skills, &jd_skills);
        let suggestions = suggested_additions(&result.missing);

        SkillAnalysis {
            resume_skills,
            jd_skills,
            result,
            suggestions,
        }
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }
}
