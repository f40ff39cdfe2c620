/*!
 * Application configuration.
 *
 * The sync configuration is a YAML file decoded into [`SyncConfig`], with
 * defaults for everything except the source language and file name pattern.
 * Validation happens eagerly at load time so that a malformed language code
 * or unknown provider never reaches the translation pipeline.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::language_utils::is_valid_two_letter_lang_code;
use crate::translation::DEFAULT_CHUNK_SIZE;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SyncConfig {
    /// Configuration schema version
    #[serde(default = "default_version")]
    pub version: String,

    /// Source language code (ISO 639-1)
    pub source_lang_code: String,

    /// Target language codes (ISO 639-1)
    #[serde(default)]
    pub target_lang_codes: BTreeSet<String>,

    /// Directory containing the localization files
    #[serde(default)]
    pub localization_root_path: String,

    /// File name pattern with a `{language}` placeholder,
    /// e.g. `messages_{language}.properties`
    pub file_name_pattern: String,

    /// Free-form product context passed to the translator
    #[serde(default)]
    pub context: String,

    /// Desired tone of the translations
    #[serde(default)]
    pub tone: String,

    /// Term substitutions the translations must honor
    #[serde(default)]
    pub glossary: BTreeMap<String, String>,

    /// Translation provider settings
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions API
    #[default]
    OpenAI,
    /// Anthropic messages API
    Anthropic,
}

impl ProviderKind {
    /// Environment variable holding the provider's API key
    pub fn api_key_env_var(&self) -> &'static str {
        match self {
            Self::OpenAI => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenAI => write!(f, "openai"),
            Self::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Translation provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Provider selection
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model name
    #[serde(default)]
    pub model: String,

    /// API key; falls back to the provider's environment variable when empty
    #[serde(default)]
    pub api_key: String,

    /// Service URL override (empty uses the provider's public endpoint)
    #[serde(default)]
    pub endpoint: String,

    /// Pairs per translation batch
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Max retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff in milliseconds between retries
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: String::new(),
            api_key: String::new(),
            endpoint: String::new(),
            chunk_size: default_chunk_size(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranslationConfig {
    /// Resolve the API key from the config or the provider's env variable
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var(self.provider.api_key_env_var()).unwrap_or_default()
    }
}

impl SyncConfig {
    /// Load and validate a configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::InvalidConfig(format!("Cannot read config {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Decode and validate a configuration from YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        let config: SyncConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate language codes and pattern coherence
    pub fn validate(&self) -> Result<(), AppError> {
        if !is_valid_two_letter_lang_code(&self.source_lang_code) {
            return Err(AppError::InvalidConfig(format!(
                "Invalid source language code '{}'",
                self.source_lang_code
            )));
        }
        for lang_code in &self.target_lang_codes {
            if !is_valid_two_letter_lang_code(lang_code) {
                return Err(AppError::InvalidConfig(format!(
                    "'{lang_code}' is not a valid language code"
                )));
            }
        }
        if !self.file_name_pattern.contains("{language}") {
            return Err(AppError::InvalidConfig(format!(
                "File name pattern '{}' is missing the {{language}} placeholder",
                self.file_name_pattern
            )));
        }
        Ok(())
    }
}

fn default_version() -> String {
    "v1".to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}
