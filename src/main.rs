//! Career harmony: resume and job description skill matching with interview prep

mod advice;
mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use advice::client::OpenAiChat;
use advice::coach::{PrepCoach, PrepOutcome};
use advice::prompts::{OpportunityType, ALL_SKILLS_COVERED};
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::{Config, OutputFormat};
use error::{CareerHarmonyError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::manager::InputManager;
use log::{error, info};
use matching::engine::MatchEngine;
use matching::vocabulary::SkillVocabulary;
use output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use output::report::{MatchReport, ReportMetadata};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown", "text"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            detailed,
            output,
            save,
            phrases,
        } => run_analyze(resume, job, detailed, output, save, phrases, config).await,

        Commands::Prep {
            resume,
            job,
            opportunity,
            phrases,
        } => run_prep(resume, job, opportunity, phrases, config).await,

        Commands::Chat { message } => run_chat(message, config).await,

        Commands::Vocab => run_vocab(&config),

        Commands::Config { action } => run_config(action, config),
    }
}

async fn run_analyze(
    resume: PathBuf,
    job: PathBuf,
    detailed: bool,
    output: Option<String>,
    save: Option<PathBuf>,
    phrases: bool,
    mut config: Config,
) -> Result<()> {
    info!("Starting skill match analysis");

    // Validate input files
    cli::validate_file_extension(&resume, DOCUMENT_EXTENSIONS)
        .map_err(|e| CareerHarmonyError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(&job, DOCUMENT_EXTENSIONS)
        .map_err(|e| CareerHarmonyError::InvalidInput(format!("Job description file: {}", e)))?;

    let output_format = match output {
        Some(format) => cli::parse_output_format(&format).map_err(CareerHarmonyError::InvalidInput)?,
        None => config.output.format,
    };

    if phrases {
        config.matching.phrase_matching = true;
    }

    // Status chatter stays off stdout for machine-readable formats
    let console_chrome = output_format == OutputFormat::Console;
    if console_chrome {
        println!("🚀 Resume and job description analysis");
        println!("📄 Resume: {}", resume.display());
        println!("💼 Job description: {}", job.display());
    }

    let started = Instant::now();

    let mut input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&resume).await?;
    let job_text = input_manager.extract_text(&job).await?;
    info!(
        "Extracted {} resume characters and {} job description characters",
        resume_text.len(),
        job_text.len()
    );

    let engine = MatchEngine::from_config(&config)?;
    let analysis = engine.analyze(&resume_text, &job_text);

    let metadata = ReportMetadata::new(
        &resume,
        &job,
        &resume_text,
        &job_text,
        engine.matcher().vocabulary().len(),
        engine.matcher().mode(),
        started.elapsed().as_millis() as u64,
    );
    let report = MatchReport { analysis, metadata };

    let detailed = detailed || config.output.detailed;
    let generator = ReportGenerator::with_options(config.output.color_output, detailed, true, true, true);
    let rendered = generator.generate_report(&report, &output_format)?;
    println!("{}", rendered);

    if let Some(save_path) = save {
        let target = resolve_save_path(&save_path, &output_format, &report.metadata.resume_file);
        // Console reports go to disk without ANSI colors
        let file_content = if output_format == OutputFormat::Console && config.output.color_output {
            ReportGenerator::with_options(false, detailed, true, true, true)
                .generate_report(&report, &output_format)?
        } else {
            rendered
        };
        save_report_to_file(&file_content, &target)?;
        println!("💾 Report saved to: {}", target.display());
    }

    Ok(())
}

async fn run_prep(
    resume: PathBuf,
    job: PathBuf,
    opportunity: OpportunityType,
    phrases: bool,
    mut config: Config,
) -> Result<()> {
    info!("Starting interview preparation");

    cli::validate_file_extension(&resume, DOCUMENT_EXTENSIONS)
        .map_err(|e| CareerHarmonyError::InvalidInput(format!("Resume file: {}", e)))?;
    cli::validate_file_extension(&job, DOCUMENT_EXTENSIONS)
        .map_err(|e| CareerHarmonyError::InvalidInput(format!("Job description file: {}", e)))?;

    if phrases {
        config.matching.phrase_matching = true;
    }

    println!("🎯 Preparing for: {}", opportunity);

    let mut input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&resume).await?;
    let job_text = input_manager.extract_text(&job).await?;

    let engine = MatchEngine::from_config(&config)?;
    let analysis = engine.analyze(&resume_text, &job_text);

    if analysis.result.missing.is_empty() {
        println!("\n{}", ALL_SKILLS_COVERED);
        return Ok(());
    }

    let missing: Vec<&str> = analysis.result.missing.iter().map(|s| s.as_str()).collect();
    println!("⚠️  Missing skills: {}", missing.join(", "));

    let coach = PrepCoach::new(build_chat_service(&config)?);
    let spinner = network_spinner("Asking the career assistant...");
    let outcome = coach.prepare(&analysis.result.missing, opportunity).await;
    spinner.finish_and_clear();

    match outcome? {
        PrepOutcome::AllSkillsCovered => println!("\n{}", ALL_SKILLS_COVERED),
        PrepOutcome::Strategy(strategy) => {
            println!("\n📋 Preparation strategy:\n");
            println!("{}", strategy);
        }
    }

    Ok(())
}

async fn run_chat(message: String, config: Config) -> Result<()> {
    if message.trim().is_empty() {
        return Err(CareerHarmonyError::InvalidInput(
            "Please type your question.".to_string(),
        ));
    }

    let coach = PrepCoach::new(build_chat_service(&config)?);
    let spinner = network_spinner("Asking the career assistant...");
    let answer = coach.ask(&message).await;
    spinner.finish_and_clear();

    println!("💬 {}", answer?);
    Ok(())
}

fn run_vocab(config: &Config) -> Result<()> {
    let vocabulary = SkillVocabulary::from_terms(config.vocabulary.terms.iter().cloned());
    println!("📚 Skill vocabulary ({} terms)\n", vocabulary.len());

    for term in vocabulary.terms() {
        if term.contains(char::is_whitespace) && !config.matching.phrase_matching {
            println!(
                "  • {} {}",
                term,
                "(multi-word: enable matching.phrase_matching to match)".bright_black()
            );
        } else {
            println!("  • {}", term);
        }
    }

    Ok(())
}

fn run_config(action: Option<ConfigAction>, config: Config) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("⚙️  Current configuration\n");
            println!("Vocabulary terms: {}", config.vocabulary.terms.len());
            println!("Phrase matching: {}", config.matching.phrase_matching);
            println!("\nChat service:");
            println!("  Endpoint: {}", config.chat.api_base);
            println!("  Model: {}", config.chat.model);
            println!("  Temperature: {}", config.chat.temperature);
            println!("  Max tokens: {}", config.chat.max_tokens);
            println!("  API key env: {}", config.chat.api_key_env);
            println!("\nOutput:");
            println!("  Format: {:?}", config.output.format);
            println!("  Detailed: {}", config.output.detailed);
            println!("  Colors: {}", config.output.color_output);
        }

        Some(ConfigAction::Reset) => {
            Config::default().save()?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Path) => {
            println!("{}", Config::config_path().display());
        }
    }

    Ok(())
}

fn build_chat_service(config: &Config) -> Result<OpenAiChat> {
    let api_key = std::env::var(&config.chat.api_key_env).map_err(|_| {
        CareerHarmonyError::Configuration(format!(
            "Chat service API key not found; set the {} environment variable",
            config.chat.api_key_env
        ))
    })?;

    Ok(OpenAiChat::new(api_key, config.chat.clone())?)
}

fn network_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
