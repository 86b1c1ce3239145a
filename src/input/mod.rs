//! Input processing module
//! Handles file detection, resume text extraction, and job description loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::DocumentFormat;
pub use manager::{InputManager, JobSource};
pub use text_extractor::RawDocument;
