//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-tiny";
pub const DEFAULT_API_KEY_ENV: &str = "MISTRAL_API_KEY";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an AI resume analyzer. Give detailed suggestions to improve resumes.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub suggestions: SuggestionConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub api_url: String,
    pub model: String,
    /// Name of the environment variable holding the bearer token
    pub api_key_env: String,
    pub system_prompt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Extra skills appended to the built-in vocabulary
    #[serde(default)]
    pub additional_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    /// Cosmetic delay before the score is revealed
    pub loading_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestions: SuggestionConfig {
                api_url: DEFAULT_API_URL.to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key_env: DEFAULT_API_KEY_ENV.to_string(),
                system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            },
            matching: MatchingConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                loading_delay_ms: 2000,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ResumeMatcherError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }
}

/// Bearer token for the suggestion API, read once at startup.
#[derive(Clone)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Read the credential from the process environment, consulting a `.env`
    /// file first. Empty values count as absent.
    pub fn from_env(var: &str) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(var) {
            Some(token) if !token.is_empty() => Ok(Self(token)),
            _ => Err(ResumeMatcherError::MissingCredential(var.to_string())),
        }
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}
