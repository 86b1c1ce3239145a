//! Input manager for loading resumes and job descriptions

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::{DocumentFormat, FileType};
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, RawDocument};
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Where the job description text comes from.
#[derive(Debug, Clone)]
pub enum JobSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

#[derive(Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume file into a [`RawDocument`]. The declared format wins
    /// over the file extension when both are present.
    pub async fn load_resume(
        &self,
        path: &Path,
        declared: Option<DocumentFormat>,
    ) -> Result<RawDocument> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = match declared {
            Some(format) => format,
            None => Self::detect_resume_format(path)?,
        };

        info!("Reading {} resume: {}", format, path.display());
        let bytes = fs::read(path).await?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(RawDocument::new(name, format, bytes))
    }

    pub async fn read_job_description(&self, source: &JobSource) -> Result<String> {
        match source {
            JobSource::Inline(text) => Ok(text.clone()),
            JobSource::Stdin => {
                info!("Reading job description from stdin");
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
            JobSource::File(path) => self.read_job_file(path).await,
        }
    }

    async fn read_job_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeMatcherError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        let content = fs::read_to_string(path).await?;

        match FileType::from_extension(extension) {
            FileType::Text => {
                info!("Reading plain text job description: {}", path.display());
                Ok(PlainTextExtractor.extract_str(&content))
            }
            FileType::Markdown => {
                info!("Processing markdown job description: {}", path.display());
                Ok(MarkdownExtractor.extract_str(&content))
            }
            FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "Unsupported job description file: {}",
                path.display()
            ))),
        }
    }

    fn detect_resume_format(path: &Path) -> Result<DocumentFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeMatcherError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        DocumentFormat::from_extension(extension).ok_or_else(|| {
            ResumeMatcherError::UnsupportedFormat(format!(
                "Resume must be PDF or DOCX: {}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_declared_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.bin");
        std::fs::write(&path, b"bytes").unwrap();

        let manager = InputManager::new();
        let document = manager
            .load_resume(&path, Some(DocumentFormat::Docx))
            .await
            .unwrap();
        assert_eq!(document.format, DocumentFormat::Docx);
        assert_eq!(document.name, "resume.bin");
        assert_eq!(document.bytes, b"bytes");
    }

    #[tokio::test]
    async fn test_unknown_resume_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.odt");
        std::fs::write(&path, b"bytes").unwrap();

        let err = InputManager::new().load_resume(&path, None).await.unwrap_err();
        assert!(matches!(err, ResumeMatcherError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_inline_job_description_is_verbatim() {
        let text = "  Python, SQL!  ".to_string();
        let read = InputManager::new()
            .read_job_description(&JobSource::Inline(text.clone()))
            .await
            .unwrap();
        assert_eq!(read, text);
    }
}
