//! Prompt templates for the career assistant

use crate::matching::matcher::SkillSet;
use clap::ValueEnum;
use std::fmt;

/// Shown when the resume already covers every job description skill.
pub const ALL_SKILLS_COVERED: &str = "✅ Your resume covers all key skills for this opportunity!";

const PREP_STRATEGY_TEMPLATE: &str = "You are a career assistant. The candidate is preparing for a {opportunity}.\nMissing skills: {missing_skills}\nProvide a clear preparation strategy and recommend top online courses or resources.";

/// Kind of engagement the candidate is preparing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpportunityType {
    AiInterview,
    HumanInterview,
    CodingAssessment,
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OpportunityType::AiInterview => "AI Interview",
            OpportunityType::HumanInterview => "Human Interview",
            OpportunityType::CodingAssessment => "Coding Assessment",
        };
        write!(f, "{}", label)
    }
}

/// Render the preparation prompt for a set of missing skills.
pub fn render_prep_prompt(missing: &SkillSet, opportunity: OpportunityType) -> String {
    let skills: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();

    PREP_STRATEGY_TEMPLATE
        .replace("{opportunity}", &opportunity.to_string())
        .replace("{missing_skills}", &skills.join(", "))
}
