//! Suggestion API integration module

pub mod client;
pub mod prompts;

pub use client::{SuggestionClient, SuggestionProvider};
