//! CLI interface for career harmony

use crate::advice::prompts::OpportunityType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-harmony")]
#[command(about = "Career coaching from the command line")]
#[command(long_about = "Match a resume against a job description by skill coverage, get suggested resume additions, and prepare for interviews with AI-generated strategies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze resume coverage of a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Show full skill lists and document stats
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html (defaults to config)
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered report to a file, or into a directory with a
        /// generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Match multi-word vocabulary terms as phrases
        #[arg(long)]
        phrases: bool,
    },

    /// Generate a preparation strategy for an upcoming opportunity
    Prep {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Kind of opportunity to prepare for
        #[arg(short = 't', long, value_enum)]
        opportunity: OpportunityType,

        /// Match multi-word vocabulary terms as phrases
        #[arg(long)]
        phrases: bool,
    },

    /// Ask the career assistant a free-form question
    Chat {
        /// The question to ask
        message: String,
    },

    /// Show the active skill vocabulary
    Vocab,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
