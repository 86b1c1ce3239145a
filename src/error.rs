//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API Key not found! Please set {0}")]
    MissingCredential(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected suggestion API response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::AnalysisFailed(err.to_string())
    }
}

impl From<reqwest::Error> for ResumeMatcherError {
    fn from(err: reqwest::Error) -> Self {
        ResumeMatcherError::Network(err.to_string())
    }
}

impl ResumeMatcherError {
    /// True for errors that the analysis recovers from by prompting the user.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ResumeMatcherError::MissingInput(_))
    }
}
