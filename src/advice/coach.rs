//! Interview preparation and free-form questions

use crate::advice::client::ChatService;
use crate::advice::prompts::{render_prep_prompt, OpportunityType, ALL_SKILLS_COVERED};
use crate::error::{CareerHarmonyError, Result};
use crate::matching::matcher::SkillSet;
use log::info;

/// What the preparation flow produced.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepOutcome {
    /// Every job description skill is already on the resume. No chat service
    /// call was made.
    AllSkillsCovered,
    /// Strategy text returned by the chat service, verbatim.
    Strategy(String),
}

impl PrepOutcome {
    pub fn message(&self) -> &str {
        match self {
            PrepOutcome::AllSkillsCovered => ALL_SKILLS_COVERED,
            PrepOutcome::Strategy(text) => text,
        }
    }
}

pub struct PrepCoach<S> {
    service: S,
}

impl<S: ChatService> PrepCoach<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Build a preparation strategy for the missing skills. Skips the chat
    /// service entirely when nothing is missing.
    pub async fn prepare(&self, missing: &SkillSet, opportunity: OpportunityType) -> Result<PrepOutcome> {
        if missing.is_empty() {
            info!("No missing skills, skipping chat service call");
            return Ok(PrepOutcome::AllSkillsCovered);
        }

        let prompt = render_prep_prompt(missing, opportunity);
        let strategy = self.service.send(&prompt).await?;
        Ok(PrepOutcome::Strategy(strategy))
    }

    /// Forward a free-form question to the chat service unchanged and return
    /// the answer verbatim.
    pub async fn ask(&self, message: &str) -> Result<String> {
        if message.trim().is_empty() {
            return Err(CareerHarmonyError::InvalidInput(
                "Please type your question.".to_string(),
            ));
        }

        Ok(self.service.send(message).await?)
    }
}
