/*!
 * Mock provider implementation for testing.
 *
 * The mock extracts the key-value object embedded in the user payload and
 * echoes it back with every value prefixed by `TRANSLATED_`, so tests can
 * assert exact output without a network. Failure modes are simulated two
 * ways: behavior variants configured at construction, and trigger values
 * (`THROW_API_ERROR`, `THROW_INVALID_OUTPUT_ERROR`) embedded in the payload.
 */

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Prefix applied to every translated value
pub const MOCK_TRANSLATION_PREFIX: &str = "TRANSLATED_";

/// Payload trigger forcing a transient API failure
pub const THROW_API_ERROR: &str = "THROW_API_ERROR";

/// Payload trigger forcing an invalid-output failure
pub const THROW_INVALID_OUTPUT_ERROR: &str = "THROW_INVALID_OUTPUT_ERROR";

// Matches the innermost-balanced JSON object embedded in the user prompt
static PAYLOAD_OBJECT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?:[^{}]|(?:\{[^{}]*\}))*\}").expect("static regex compiles"));

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with prefixed translations
    Working,
    /// Always fails with a permanent API error (400)
    FailingPermanent,
    /// Always fails with a transient API error (503)
    FailingTransient,
    /// Fails the first N calls with 503, then succeeds
    FlakyThenWorking {
        /// Number of leading calls that fail
        fail_first: usize,
    },
    /// Returns structurally invalid output
    InvalidOutput,
}

/// Mock provider for testing orchestration behavior
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock provider that always fails permanently
    pub fn failing_permanent() -> Self {
        Self::new(MockBehavior::FailingPermanent)
    }

    /// Create a mock provider that always fails transiently
    pub fn failing_transient() -> Self {
        Self::new(MockBehavior::FailingTransient)
    }

    /// Create a mock provider that fails the first `fail_first` calls
    pub fn flaky(fail_first: usize) -> Self {
        Self::new(MockBehavior::FlakyThenWorking { fail_first })
    }

    /// Create a mock provider that returns malformed output
    pub fn invalid_output() -> Self {
        Self::new(MockBehavior::InvalidOutput)
    }

    /// Number of translate calls received so far (shared across clones)
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn extract_pairs_from_payload(payload: &str) -> HashMap<String, String> {
        let Some(object_match) = PAYLOAD_OBJECT_REGEX.find(payload) else {
            return HashMap::new();
        };
        serde_json::from_str::<HashMap<String, String>>(object_match.as_str()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        _instructions: &str,
        payload: &str,
    ) -> Result<HashMap<String, String>, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);

        if payload.contains(THROW_API_ERROR) {
            return Err(ProviderError::ApiError {
                status_code: 503,
                message: "Simulated API failure".to_string(),
            });
        }
        if payload.contains(THROW_INVALID_OUTPUT_ERROR) {
            return Err(ProviderError::InvalidOutput(
                "Simulated malformed output".to_string(),
            ));
        }

        match self.behavior {
            MockBehavior::Working => {}
            MockBehavior::FailingPermanent => {
                return Err(ProviderError::ApiError {
                    status_code: 400,
                    message: "Simulated permanent failure".to_string(),
                });
            }
            MockBehavior::FailingTransient => {
                return Err(ProviderError::ApiError {
                    status_code: 503,
                    message: "Simulated transient failure".to_string(),
                });
            }
            MockBehavior::FlakyThenWorking { fail_first } => {
                if count < fail_first {
                    return Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated flaky failure (request #{})", count + 1),
                    });
                }
            }
            MockBehavior::InvalidOutput => {
                return Err(ProviderError::InvalidOutput(
                    "Simulated malformed output".to_string(),
                ));
            }
        }

        let pairs = Self::extract_pairs_from_payload(payload);
        Ok(pairs
            .into_iter()
            .map(|(key, value)| (key, format!("{MOCK_TRANSLATION_PREFIX}{value}")))
            .collect())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
