//! Text extraction from resume documents and job description files

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::DocumentFormat;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use log::{debug, warn};
use pulldown_cmark::{Event, Parser, Tag};

/// An uploaded resume: raw bytes plus the format the uploader declared.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, format: DocumentFormat, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            format,
            bytes,
        }
    }

    /// Extract plain text using the parser for the declared format.
    /// The bytes are never sniffed; a mismatch surfaces as a parse error.
    pub fn extract_text(&self) -> Result<String> {
        match self.format {
            DocumentFormat::Pdf => PdfExtractor.extract(&self.bytes),
            DocumentFormat::Docx => DocxExtractor.extract(&self.bytes),
        }
    }
}

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    /// Page-by-page extraction through lopdf. pdf-extract is only a
    /// best-effort fallback for files lopdf cannot open; its output is one
    /// block of text without per-page newlines.
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        match lopdf::Document::load_mem(bytes) {
            Ok(document) => Ok(Self::pages_to_text(&document)),
            Err(load_error) => {
                warn!("lopdf could not load PDF ({}), trying pdf-extract", load_error);
                pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
                    ResumeMatcherError::PdfExtraction(format!(
                        "Failed to extract text from PDF: {}; {}",
                        load_error, e
                    ))
                })
            }
        }
    }
}

impl PdfExtractor {
    /// Every page contributes its text and a newline, in page order.
    /// Pages without a text layer contribute only the newline.
    fn pages_to_text(document: &lopdf::Document) -> String {
        let mut text = String::new();
        for page_number in document.get_pages().keys() {
            match document.extract_text(&[*page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => debug!("No extractable text on page {}: {}", page_number, e),
            }
            text.push('\n');
        }
        text
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| {
            ResumeMatcherError::DocxExtraction(format!("Failed to read DOCX package: {}", e))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(Self::paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

impl DocxExtractor {
    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut text = String::new();
        Self::push_children(&paragraph.children, &mut text);
        text
    }

    /// Hyperlinks wrap their own runs; their text reads inline with the rest.
    fn push_children(children: &[ParagraphChild], text: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => {
                    for run_child in &run.children {
                        match run_child {
                            RunChild::Text(t) => text.push_str(&t.text),
                            RunChild::Tab(_) => text.push('\t'),
                            RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(link) => Self::push_children(&link.children, text),
                _ => {}
            }
        }
    }
}

/// Job descriptions given as plain text files are used verbatim.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn extract_str(&self, content: &str) -> String {
        content.to_string()
    }
}

/// Job descriptions given as Markdown are rendered down to their text.
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    pub fn extract_str(&self, markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
