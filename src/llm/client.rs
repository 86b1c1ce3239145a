//! Client for the chat-completions endpoint that produces resume suggestions

use crate::config::{ApiCredential, SuggestionConfig};
use crate::error::{Result, ResumeMatcherError};
use crate::llm::prompts::{ChatMessage, SuggestionPrompt};
use log::{debug, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Source of free-form improvement advice for a resume.
pub trait SuggestionProvider {
    fn suggest(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Model identifier reported alongside the suggestions.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Single-shot HTTP client: one POST per analysis, no retries, no streaming,
/// transport default timeouts.
pub struct SuggestionClient {
    http: Client,
    api_url: String,
    model: String,
    prompt: SuggestionPrompt,
    credential: ApiCredential,
}

impl SuggestionClient {
    pub fn new(config: &SuggestionConfig, credential: ApiCredential) -> Result<Self> {
        let http = Client::builder().build().map_err(|e| {
            ResumeMatcherError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            prompt: SuggestionPrompt::new(config.system_prompt.clone()),
            credential,
        })
    }
}

impl SuggestionProvider for SuggestionClient {
    async fn suggest(&self, resume_text: &str, job_description: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: self.prompt.messages(resume_text, job_description),
        };

        info!("Requesting suggestions from {} ({})", self.api_url, self.model);
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(self.credential.token())
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Suggestion API answered {} with {} bytes", status, body.len());

        suggestion_from_response(status, &body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Interpret an API reply. Only 200 counts as success; any other status is
/// turned into a user-visible suggestion text carrying the status and body.
pub fn suggestion_from_response(status: u16, body: &str) -> Result<String> {
    if status != 200 {
        warn!("Suggestion API returned status {}", status);
        return Ok(format!("❌ API Error {}: {}", status, body));
    }

    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        ResumeMatcherError::InvalidResponse(format!("Failed to parse response body: {}", e))
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ResumeMatcherError::InvalidResponse("Response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_returns_first_choice_verbatim() {
        let body = r#"{
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Add **Docker** <i>now</i>"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"#;
        let text = suggestion_from_response(200, body).unwrap();
        assert_eq!(text, "Add **Docker** <i>now</i>");
    }

    #[test]
    fn test_server_error_becomes_suggestion_text() {
        let text = suggestion_from_response(500, "server busy").unwrap();
        assert!(text.contains("500"));
        assert!(text.contains("server busy"));
    }

    #[test]
    fn test_other_success_codes_are_not_success() {
        let text = suggestion_from_response(201, "{}").unwrap();
        assert!(text.contains("API Error 201"));
    }

    #[test]
    fn test_malformed_success_body_is_error() {
        let err = suggestion_from_response(200, "not json").unwrap_err();
        assert!(matches!(err, ResumeMatcherError::InvalidResponse(_)));

        let err = suggestion_from_response(200, r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, ResumeMatcherError::InvalidResponse(_)));
    }

    #[test]
    fn test_request_shape() {
        let prompt = SuggestionPrompt::default();
        let request = ChatRequest {
            model: "mistral-tiny",
            messages: prompt.messages("I know Python", "Needs Docker"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "mistral-tiny");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(
            json["messages"][1]["content"],
            "Resume: I know Python\n\nJob Description: Needs Docker"
        );
    }
}
