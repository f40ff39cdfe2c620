/*!
 * Provider implementations for different translation services.
 *
 * This module contains client implementations for LLM providers that can
 * translate localization key-value pairs:
 * - OpenAI: OpenAI API integration
 * - Anthropic: Anthropic API integration
 * - Mock: deterministic test double
 */

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::ProviderError;

pub mod anthropic;
pub mod mock;
pub mod openai;

/// Common trait for all translation providers.
///
/// `instructions` carries the system prompt; `payload` carries the user
/// prompt embedding a JSON object of key-to-source-text pairs plus the target
/// language name. A successful call returns the same key set with translated
/// values.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate one batch of pairs.
    async fn translate(
        &self,
        instructions: &str,
        payload: &str,
    ) -> Result<HashMap<String, String>, ProviderError>;

    /// Short provider identifier for logging
    fn name(&self) -> &'static str;
}

static CODE_FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("static regex compiles"));

/// Validate raw model output as a JSON object of string pairs.
///
/// An optional markdown code fence is stripped first. Anything that does not
/// then parse as a flat string-to-string object is an invalid-output failure,
/// which is distinct from an API failure and never retried.
pub fn parse_translation_output(text: &str) -> Result<HashMap<String, String>, ProviderError> {
    let stripped = strip_code_fence(text);

    let value: Value = serde_json::from_str(stripped)
        .map_err(|e| ProviderError::InvalidOutput(format!("Not valid JSON: {e}")))?;
    let Value::Object(object) = value else {
        return Err(ProviderError::InvalidOutput(
            "Expected a JSON object of key-value pairs".to_string(),
        ));
    };

    let mut pairs = HashMap::with_capacity(object.len());
    for (key, value) in object {
        match value {
            Value::String(translated) => {
                pairs.insert(key, translated);
            }
            other => {
                return Err(ProviderError::InvalidOutput(format!(
                    "Value for key '{key}' is not a string: {other}"
                )));
            }
        }
    }
    Ok(pairs)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    match CODE_FENCE_REGEX.captures(trimmed) {
        Some(captures) => captures.get(1).map_or(trimmed, |m| m.as_str()),
        None => trimmed,
    }
}
