//! Report structures for the skill match pipeline

use crate::matching::engine::SkillAnalysis;
use crate::matching::matcher::MatchMode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full report for one resume and job description comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Skill findings and score
    pub analysis: SkillAnalysis,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the tool that produced the report
    pub tool_version: String,

    /// Resume file analyzed
    pub resume_file: String,

    /// Job description file analyzed
    pub job_file: String,

    /// Whitespace-separated word count of the resume text
    pub resume_word_count: usize,

    /// Whitespace-separated word count of the job description text
    pub job_word_count: usize,

    /// Number of terms in the active vocabulary
    pub vocabulary_size: usize,

    /// Matching mode used for the analysis
    pub match_mode: MatchMode,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(
        resume_file: &Path,
        job_file: &Path,
        resume_text: &str,
        job_text: &str,
        vocabulary_size: usize,
        match_mode: MatchMode,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.display().to_string(),
            job_file: job_file.display().to_string(),
            resume_word_count: resume_text.split_whitespace().count(),
            job_word_count: job_text.split_whitespace().count(),
            vocabulary_size,
            match_mode,
            processing_time_ms,
        }
    }
}

/// File name portion of a stored path, for display.
pub fn file_label(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
