/*!
 * Concurrent translation orchestration.
 *
 * Splits the pairs needing translation into fixed-size batches, fires one
 * task per batch, joins on all of them, and either returns the union of every
 * batch result or fails the whole call. No partial result is ever observable
 * by the caller: if any batch ultimately fails, sibling results are discarded
 * and the first failure is reported.
 */

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, info, warn};
use rand::Rng;

use crate::errors::{LocalizationError, ProviderError};
use crate::providers::TranslationProvider;
use crate::resource_map::{ResourceMap, chunk_map, simple_union};
use crate::translation::prompts::{generate_system_prompt, generate_user_prompt};

/// Default number of pairs per translation batch
pub const DEFAULT_CHUNK_SIZE: usize = 30;

/// Retry policy for transient provider failures
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of retry attempts after the initial call
    pub max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base_ms: 1000,
        }
    }
}

/// Free-form guidance passed to the translation provider
#[derive(Debug, Clone, Default)]
pub struct LocalizationHints {
    /// Domain context (what kind of product the strings belong to)
    pub context: String,
    /// Desired tone of the translations
    pub tone: String,
    /// Term substitutions the translations must honor
    pub glossary: std::collections::BTreeMap<String, String>,
}

/// Translation orchestrator bound to one provider
pub struct Localizer {
    provider: Arc<dyn TranslationProvider>,
    retry_policy: RetryPolicy,
    chunk_size: usize,
}

impl Localizer {
    /// Create a localizer with default batching and retry settings
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self::with_options(provider, RetryPolicy::default(), DEFAULT_CHUNK_SIZE)
    }

    /// Create a localizer with explicit batching and retry settings
    pub fn with_options(
        provider: Arc<dyn TranslationProvider>,
        retry_policy: RetryPolicy,
        chunk_size: usize,
    ) -> Self {
        Self {
            provider,
            retry_policy,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Translate every pair in `pairs` to `target_language` (full language
    /// name). Returns a map covering exactly the input key set, or the first
    /// batch failure.
    pub async fn localize(
        &self,
        pairs: &ResourceMap,
        target_language: &str,
        hints: &LocalizationHints,
    ) -> Result<ResourceMap, LocalizationError> {
        if pairs.is_empty() {
            return Ok(ResourceMap::new());
        }

        let system_prompt: Arc<str> = Arc::from(generate_system_prompt(hints));
        let chunks = chunk_map(pairs, self.chunk_size);
        info!(
            "Translating {} pairs to {} in {} batches via {}",
            pairs.len(),
            target_language,
            chunks.len(),
            self.provider.name()
        );

        let mut handles = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let provider = Arc::clone(&self.provider);
            let system_prompt = Arc::clone(&system_prompt);
            let user_prompt = generate_user_prompt(&chunk, target_language);
            let retry_policy = self.retry_policy;

            handles.push(tokio::spawn(async move {
                let translated =
                    call_with_retry(provider.as_ref(), &system_prompt, &user_prompt, retry_policy)
                        .await?;
                restrict_to_requested(chunk, translated)
            }));
        }

        let mut batches = Vec::with_capacity(handles.len());
        let mut first_failure: Option<LocalizationError> = None;
        for (batch_index, join_result) in join_all(handles).await.into_iter().enumerate() {
            match join_result {
                Ok(Ok(batch)) => batches.push(batch),
                Ok(Err(e)) => {
                    warn!("Translation batch {} failed: {}", batch_index + 1, e);
                    first_failure.get_or_insert(LocalizationError::Provider(e));
                }
                Err(e) => {
                    warn!("Translation batch {} aborted: {}", batch_index + 1, e);
                    first_failure.get_or_insert(LocalizationError::TaskAborted(e.to_string()));
                }
            }
        }

        match first_failure {
            // Sibling batches already ran to completion; their results are
            // discarded along with the failure.
            Some(failure) => Err(failure),
            None => Ok(simple_union(batches)),
        }
    }
}

/// Call the provider, retrying transient failures with exponential backoff
/// plus jitter. Permanent and invalid-output failures propagate immediately.
async fn call_with_retry(
    provider: &dyn TranslationProvider,
    instructions: &str,
    payload: &str,
    policy: RetryPolicy,
) -> Result<std::collections::HashMap<String, String>, ProviderError> {
    let mut attempt: u32 = 0;
    loop {
        match provider.translate(instructions, payload).await {
            Ok(pairs) => return Ok(pairs),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                let backoff_ms = policy
                    .backoff_base_ms
                    .saturating_mul(1u64 << attempt.min(16));
                let jitter_ms = rand::rng().random_range(0..=policy.backoff_base_ms.max(1) / 2);
                debug!(
                    "Transient translation failure ({}), retrying in {}ms (attempt {}/{})",
                    e,
                    backoff_ms + jitter_ms,
                    attempt + 1,
                    policy.max_retries
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms + jitter_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Check the batch result against the requested keys and rebuild it in the
/// requested order. A missing key means the model dropped or mangled it,
/// which counts as invalid output; extra keys are ignored.
fn restrict_to_requested(
    requested: ResourceMap,
    mut translated: std::collections::HashMap<String, String>,
) -> Result<ResourceMap, ProviderError> {
    let mut batch = ResourceMap::new();
    for key in requested.keys() {
        match translated.remove(key) {
            Some(value) => batch.insert(key, value),
            None => {
                return Err(ProviderError::InvalidOutput(format!(
                    "Translation output is missing key '{key}'"
                )));
            }
        }
    }
    Ok(batch)
}
