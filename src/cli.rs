//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use crate::input::file_detector::DocumentFormat;
use crate::input::manager::JobSource;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match a resume against a job description and get AI improvement suggestions")]
#[command(long_about = "Extracts text from a PDF or DOCX resume, scores its technical skill overlap with a job description, and asks a chat-completions API for improvement suggestions")]
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
    /// Analyze a resume against a job description
    Analyze(AnalyzeArgs),

    /// List the technical skills vocabulary
    Skills,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to resume file (PDF or DOCX)
    #[arg(short, long)]
    pub resume: PathBuf,

    /// Declared resume type (pdf, docx or a MIME type); defaults to the file extension
    #[arg(long, value_parser = parse_resume_type)]
    pub resume_type: Option<DocumentFormat>,

    /// Job description file (TXT or MD, `-` for stdin)
    #[arg(short, long, conflicts_with = "job_text", required_unless_present = "job_text")]
    pub job: Option<PathBuf>,

    /// Job description text
    #[arg(long)]
    pub job_text: Option<String>,

    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Skip the loading animation before the score
    #[arg(long)]
    pub no_delay: bool,
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

impl AnalyzeArgs {
    pub fn job_source(&self) -> JobSource {
        match (&self.job, &self.job_text) {
            (_, Some(text)) => JobSource::Inline(text.clone()),
            (Some(path), None) if path.as_os_str() == "-" => JobSource::Stdin,
            (Some(path), None) => JobSource::File(path.clone()),
            (None, None) => JobSource::Inline(String::new()),
        }
    }

    /// Short description of the job source for report metadata
    pub fn job_label(&self) -> String {
        match self.job_source() {
            JobSource::File(path) => path.display().to_string(),
            JobSource::Inline(_) => "inline text".to_string(),
            JobSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Accepts `pdf`, `docx` or the matching MIME type
pub fn parse_resume_type(value: &str) -> Result<DocumentFormat, String> {
    DocumentFormat::from_extension(value)
        .or_else(|| DocumentFormat::from_mime(value))
        .ok_or_else(|| format!("Unsupported resume type: {}. Supported: pdf, docx", value))
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
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
