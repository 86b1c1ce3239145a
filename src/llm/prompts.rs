//! Chat prompt sent to the suggestion API

use crate::config::DEFAULT_SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

/// One `{role, content}` entry of a chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionPrompt {
    pub system_instruction: String,
}

impl Default for SuggestionPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

impl SuggestionPrompt {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
        }
    }

    /// Both texts are embedded verbatim.
    pub fn render_user_message(&self, resume_text: &str, job_description: &str) -> String {
        format!("Resume: {}\n\nJob Description: {}", resume_text, job_description)
    }

    /// System instruction first, then the user message.
    pub fn messages(&self, resume_text: &str, job_description: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_instruction.clone()),
            ChatMessage::user(self.render_user_message(resume_text, job_description)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_embeds_texts_verbatim() {
        let prompt = SuggestionPrompt::default();
        let message = prompt.render_user_message("Python dev {job}", "Needs <b>SQL</b>");
        assert_eq!(message, "Resume: Python dev {job}\n\nJob Description: Needs <b>SQL</b>");
    }

    #[test]
    fn test_messages_order() {
        let messages = SuggestionPrompt::default().messages("resume", "job");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(
            messages[0].content,
            "You are an AI resume analyzer. Give detailed suggestions to improve resumes."
        );
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("Resume: resume"));
    }
}
