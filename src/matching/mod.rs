//! Skill matching pipeline
//! Vocabulary handling, skill detection, scoring, and resume suggestions

pub mod engine;
pub mod matcher;
pub mod scoring;
pub mod suggestions;
pub mod vocabulary;
