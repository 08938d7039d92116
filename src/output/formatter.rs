//! Output formatters for match reports with multiple format support

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{file_label, MatchReport};
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skill Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 760px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .skills { list-style: none; padding: 0; }
        .skills li {
            background: #f8f9fa;
            padding: 6px 12px;
            margin: 5px 0;
            border-radius: 6px;
            border-left: 4px solid #ccc;
        }
        .matched li { border-left-color: #28a745; }
        .missing li { border-left-color: #dc3545; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📊 Skill Match Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Match Score: {{ score }}% <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
            <p>{{ coverage_line }}</p>
        </div>

        {% if has_matched %}
        <div class="section">
            <h2>✅ Matched Skills</h2>
            <ul class="skills matched">
                {% for skill in matched %}<li>{{ skill }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        {% if has_missing %}
        <div class="section">
            <h2>⚠️ Missing Skills</h2>
            <ul class="skills missing">
                {% for skill in missing %}<li>{{ skill }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        {% if has_suggestions %}
        <div class="section">
            <h2>💡 Suggested Resume Additions</h2>
            <ul>
                {% for suggestion in suggestions %}<li>{{ suggestion }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Job:</strong> {{ job_file }}</p>
            <p><strong>Vocabulary:</strong> {{ vocabulary_size }} terms | <strong>Mode:</strong> {{ match_mode }}</p>
            <p><strong>ℹ️ Generated by Career Harmony v{{ version }}</strong></p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    score: String,
    score_class: String,
    score_label: String,
    coverage_line: String,
    has_matched: bool,
    matched: Vec<String>,
    has_missing: bool,
    missing: Vec<String>,
    has_suggestions: bool,
    suggestions: Vec<String>,
    resume_file: String,
    job_file: String,
    vocabulary_size: usize,
    match_mode: String,
    version: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score.round() as i64 {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let analysis = &report.analysis;

        // Header
        output.push_str(&self.format_header("📊 SKILL MATCH REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Score
        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "Overall: {:.2}% {}\n",
            analysis.result.score,
            self.format_score_badge(analysis.result.score)
        ));
        output.push_str(&format!(
            "Matched {} of {} job description skills\n",
            analysis.result.matched.len(),
            analysis.jd_skills.len()
        ));

        if analysis.jd_skills.is_empty() {
            output.push_str(&format!(
                "{}\n",
                self.colorize(
                    "No vocabulary skills recognized in the job description",
                    Color::Yellow
                )
            ));
        } else if analysis.result.missing.is_empty() {
            output.push_str(&format!(
                "{}\n",
                self.colorize("🎉 No missing skills!", Color::Green)
            ));
        }

        // Matched skills
        if !analysis.result.matched.is_empty() {
            output.push_str(&self.format_header(
                &format!("✅ Matched Skills ({})", analysis.result.matched.len()),
                3,
            ));
            for skill in &analysis.result.matched {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
            }
        }

        // Missing skills
        if !analysis.result.missing.is_empty() {
            output.push_str(&self.format_header(
                &format!("⚠️ Missing Skills ({})", analysis.result.missing.len()),
                3,
            ));
            for skill in &analysis.result.missing {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
            }
        }

        // Suggestions
        if !analysis.suggestions.is_empty() {
            output.push_str(&self.format_header("💡 Suggested Resume Additions", 3));
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("📄 Document Stats", 2));
            output.push_str(&format!(
                "Resume: {} ({} words, {} skills found)\n",
                file_label(&report.metadata.resume_file),
                report.metadata.resume_word_count,
                analysis.resume_skills.len()
            ));
            output.push_str(&format!(
                "Job description: {} ({} words, {} skills found)\n",
                file_label(&report.metadata.job_file),
                report.metadata.job_word_count,
                analysis.jd_skills.len()
            ));
            output.push_str(&format!(
                "Vocabulary: {} terms | Mode: {}\n",
                report.metadata.vocabulary_size, report.metadata.match_mode
            ));

            if !analysis.resume_skills.is_empty() {
                let skills: Vec<&str> = analysis.resume_skills.iter().map(|s| s.as_str()).collect();
                output.push_str(&format!("Resume skills: {}\n", skills.join(", ")));
            }
            if !analysis.jd_skills.is_empty() {
                let skills: Vec<&str> = analysis.jd_skills.iter().map(|s| s.as_str()).collect();
                output.push_str(&format!("Job description skills: {}\n", skills.join(", ")));
            }
        }

        // Footer
        output.push_str(&format!(
            "\n{} Generated by Career Harmony v{}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.tool_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: f64) -> &'static str {
        match score.round() as i64 {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();
        let analysis = &report.analysis;

        // Title
        output.push_str("# 📊 Skill Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                file_label(&report.metadata.resume_file),
                file_label(&report.metadata.job_file)
            ));
        }

        // Summary
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {:.2}% {}\n\n",
            analysis.result.score,
            Self::markdown_score_badge(analysis.result.score)
        ));

        output.push_str("| Skills | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Matched | {} |\n", analysis.result.matched.len()));
        output.push_str(&format!("| Missing | {} |\n", analysis.result.missing.len()));
        output.push_str(&format!("| Job description total | {} |\n\n", analysis.jd_skills.len()));

        if analysis.jd_skills.is_empty() {
            output.push_str("> No vocabulary skills recognized in the job description.\n\n");
        }

        // Matched skills
        if !analysis.result.matched.is_empty() {
            output.push_str("## ✅ Matched Skills\n\n");
            for skill in &analysis.result.matched {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        // Missing skills
        if !analysis.result.missing.is_empty() {
            output.push_str("## ⚠️ Missing Skills\n\n");
            for skill in &analysis.result.missing {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        // Suggestions
        if !analysis.suggestions.is_empty() {
            output.push_str("## 💡 Suggested Resume Additions\n\n");
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
            output.push('\n');
        }

        // Footer
        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Career Harmony v{} | Vocabulary: {} terms, {} mode*\n",
                report.metadata.tool_version,
                report.metadata.vocabulary_size,
                report.metadata.match_mode
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &MatchReport) -> HtmlTemplate {
        let analysis = &report.analysis;

        let (score_class, score_label) = match analysis.result.score.round() as i64 {
            90..=100 => ("score-excellent", "Excellent"),
            80..=89 => ("score-good", "Very Good"),
            70..=79 => ("score-good", "Good"),
            60..=69 => ("score-fair", "Fair"),
            _ => ("score-poor", "Poor"),
        };

        let coverage_line = if analysis.jd_skills.is_empty() {
            "No vocabulary skills recognized in the job description.".to_string()
        } else {
            format!(
                "Matched {} of {} job description skills.",
                analysis.result.matched.len(),
                analysis.jd_skills.len()
            )
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            score: format!("{:.2}", analysis.result.score),
            score_class: score_class.to_string(),
            score_label: score_label.to_string(),
            coverage_line,
            has_matched: !analysis.result.matched.is_empty(),
            matched: analysis.result.matched.iter().cloned().collect(),
            has_missing: !analysis.result.missing.is_empty(),
            missing: analysis.result.missing.iter().cloned().collect(),
            has_suggestions: !analysis.suggestions.is_empty(),
            suggestions: analysis.suggestions.clone(),
            resume_file: file_label(&report.metadata.resume_file),
            job_file: file_label(&report.metadata.job_file),
            vocabulary_size: report.metadata.vocabulary_size,
            match_mode: report.metadata.match_mode.to_string(),
            version: report.metadata.tool_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let template_data = self.create_template_data(report);
        template_data
            .render()
            .map_err(|e| crate::error::CareerHarmonyError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_match{}.html", base_name, timestamp_suffix),
    }
}

/// Target path for a saved report. A directory gets a generated, timestamped
/// filename inside it; any other path is used as given.
pub fn resolve_save_path(requested: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if requested.is_dir() {
        requested.join(suggest_filename(format, resume_name, true))
    } else {
        requested.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::MatchEngine;
    use crate::matching::matcher::{MatchMode, SkillMatcher};
    use crate::matching::vocabulary::SkillVocabulary;
    use crate::output::report::ReportMetadata;

    fn sample_report() -> MatchReport {
        let vocabulary = SkillVocabulary::from_terms(["Python", "SQL", "Excel"]);
        let engine = MatchEngine::new(SkillMatcher::new(vocabulary, MatchMode::Token).unwrap());

        let resume_text = "Experienced in Python and Excel";
        let jd_text = "Requires Python, SQL, Excel";
        let analysis = engine.analyze(resume_text, jd_text);
        let metadata = ReportMetadata::new(
            Path::new("docs/resume.txt"),
            Path::new("docs/job.txt"),
            resume_text,
            jd_text,
            3,
            MatchMode::Token,
            2,
        );

        MatchReport { analysis, metadata }
    }

    fn empty_jd_report() -> MatchReport {
        let vocabulary = SkillVocabulary::from_terms(["Python", "SQL"]);
        let engine = MatchEngine::new(SkillMatcher::new(vocabulary, MatchMode::Token).unwrap());

        let resume_text = "Python developer";
        let jd_text = "We value curiosity and teamwork";
        let analysis = engine.analyze(resume_text, jd_text);
        let metadata = ReportMetadata::new(
            Path::new("resume.txt"),
            Path::new("job.txt"),
            resume_text,
            jd_text,
            2,
            MatchMode::Token,
            1,
        );

        MatchReport { analysis, metadata }
    }

    #[test]
    fn test_console_format_shows_score_and_skills() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("SKILL MATCH REPORT"));
        assert!(output.contains("Overall: 66.67% [FAIR]"));
        assert!(output.contains("Matched 2 of 3 job description skills"));
        assert!(output.contains("• SQL"));
        assert!(output.contains("Highlight experience/projects using SQL"));
    }

    #[test]
    fn test_console_detailed_adds_document_stats() {
        let plain = ConsoleFormatter::new(false, false).format_report(&sample_report()).unwrap();
        let detailed = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(!plain.contains("Document Stats"));
        assert!(detailed.contains("Document Stats"));
        assert!(detailed.contains("resume.txt (5 words, 2 skills found)"));
    }

    #[test]
    fn test_console_notes_unrecognized_job_description() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&empty_jd_report()).unwrap();

        assert!(output.contains("Overall: 0.00%"));
        assert!(output.contains("No vocabulary skills recognized in the job description"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter::new(true);
        let json = formatter.format_report(&sample_report()).unwrap();

        let parsed: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.analysis.result.score, 66.67);
        assert!(parsed.analysis.result.missing.contains("SQL"));
    }

    #[test]
    fn test_markdown_format_has_summary_table() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# 📊 Skill Match Report"));
        assert!(output.contains("**Match Score:** 66.67%"));
        assert!(output.contains("| Matched | 2 |"));
        assert!(output.contains("| Missing | 1 |"));
        assert!(output.contains("- SQL"));
    }

    #[test]
    fn test_html_format_renders_lists() {
        let formatter = HtmlFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("<title>Skill Match Report</title>"));
        assert!(output.contains("66.67%"));
        assert!(output.contains("<li>SQL</li>"));
        assert!(output.contains("Matched 2 of 3 job description skills."));
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, false, true, true, true);
        let report = sample_report();

        assert!(generator.generate_report(&report, &OutputFormat::Json).unwrap().starts_with('{'));
        assert!(generator
            .generate_report(&report, &OutputFormat::Markdown)
            .unwrap()
            .starts_with("# "));
        assert!(generator
            .generate_report(&report, &OutputFormat::Html)
            .unwrap()
            .starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_suggest_filename_uses_resume_stem() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "docs/jordan_resume.pdf", false),
            "jordan_resume_match.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "resume.txt", false),
            "resume_match.md"
        );

        let stamped = suggest_filename(&OutputFormat::Html, "resume.txt", true);
        assert!(stamped.starts_with("resume_match_"));
        assert!(stamped.ends_with(".html"));
    }

    #[test]
    fn test_resolve_save_path_generates_name_for_directories() {
        let dir = tempfile::tempdir().unwrap();

        let resolved = resolve_save_path(dir.path(), &OutputFormat::Json, "docs/jordan_resume.pdf");
        assert_eq!(resolved.parent().unwrap(), dir.path());
        let name = resolved.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("jordan_resume_match_"));
        assert!(name.ends_with(".json"));

        let explicit = dir.path().join("report.md");
        assert_eq!(
            resolve_save_path(&explicit, &OutputFormat::Markdown, "resume.txt"),
            explicit
        );
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports").join("out.md");

        save_report_to_file("# report", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# report");
    }
}
