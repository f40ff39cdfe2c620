/*!
 * Application controller tying one sync run together.
 *
 * A run: parse the source file, read the lock hashes, compute the
 * new-or-modified key set, fan out one localization pipeline per target
 * language, join them all, write the new lock file, and report per-language
 * outcomes. Language pipelines are fully independent; one failing neither
 * cancels nor affects its siblings.
 */

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use log::{error, info, warn};

use crate::app_config::{ProviderKind, SyncConfig};
use crate::diff_utils::retrieve_nom_source_keys;
use crate::errors::AppError;
use crate::file_utils::generate_localization_file_name;
use crate::formats;
use crate::lockfile;
use crate::lockfile::LOCK_FILE_NAME;
use crate::processor::SourceProcessor;
use crate::providers::TranslationProvider;
use crate::providers::anthropic::Anthropic;
use crate::providers::openai::OpenAI;
use crate::translation::{LocalizationHints, Localizer, RetryPolicy};

/// Outcome of one sync run
#[derive(Debug)]
pub struct RunSummary {
    /// Languages that were brought up to date
    pub succeeded: Vec<String>,
    /// Languages whose pipeline failed, with the failure rendered for display
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    /// Whether every language pipeline succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main application controller for localization sync
pub struct Controller {
    config: SyncConfig,
    provider: Arc<dyn TranslationProvider>,
}

impl Controller {
    /// Create a controller, building the provider selected by configuration
    pub fn new(config: SyncConfig) -> Result<Self, AppError> {
        let translation = &config.translation;
        let api_key = translation.resolve_api_key();
        let provider: Arc<dyn TranslationProvider> = match translation.provider {
            ProviderKind::OpenAI => Arc::new(OpenAI::new(
                api_key,
                translation.endpoint.clone(),
                translation.model.clone(),
                translation.timeout_secs,
            )),
            ProviderKind::Anthropic => Arc::new(Anthropic::new(
                api_key,
                translation.endpoint.clone(),
                translation.model.clone(),
                translation.timeout_secs,
            )),
        };
        Ok(Self { config, provider })
    }

    /// Create a controller with an explicit provider (used by tests)
    pub fn with_provider(config: SyncConfig, provider: Arc<dyn TranslationProvider>) -> Self {
        Self { config, provider }
    }

    /// Run one full sync: all target languages against the current source.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let root = PathBuf::from(&self.config.localization_root_path);
        let source_path = root.join(generate_localization_file_name(
            &self.config.source_lang_code,
            &self.config.file_name_pattern,
        ));
        let lock_path = root.join(LOCK_FILE_NAME);

        info!("Parsing source file {}", source_path.display());
        let source_map = Arc::new(formats::parse(&source_path).await?);
        let lock_hashes = lockfile::read_lock_file(&lock_path).await?;
        let nom_keys = Arc::new(retrieve_nom_source_keys(&lock_hashes, &source_map));
        info!(
            "Source has {} keys, {} new or modified since last sync",
            source_map.len(),
            nom_keys.len()
        );

        let hints = LocalizationHints {
            context: self.config.context.clone(),
            tone: self.config.tone.clone(),
            glossary: self.config.glossary.clone(),
        };
        let retry_policy = RetryPolicy {
            max_retries: self.config.translation.max_retries,
            backoff_base_ms: self.config.translation.retry_backoff_ms,
        };

        // One pipeline per target language; pipelines only share the
        // processor's immutable state.
        let mut languages = Vec::new();
        let mut handles = Vec::new();
        for lang_code in &self.config.target_lang_codes {
            let processor = SourceProcessor::new(
                Localizer::with_options(
                    Arc::clone(&self.provider),
                    retry_policy,
                    self.config.translation.chunk_size,
                ),
                Arc::clone(&source_map),
                Arc::clone(&nom_keys),
                hints.clone(),
            );
            let target_path = root.join(generate_localization_file_name(
                lang_code,
                &self.config.file_name_pattern,
            ));
            let lang_code = lang_code.clone();

            languages.push(lang_code.clone());
            handles.push(tokio::spawn(async move {
                processor
                    .localize_to_target_language(&target_path, &lang_code)
                    .await
            }));
        }

        let mut summary = RunSummary {
            succeeded: Vec::new(),
            failed: Vec::new(),
        };
        for (lang_code, join_result) in languages.into_iter().zip(join_all(handles).await) {
            match join_result {
                Ok(Ok(())) => {
                    info!("[{lang_code}] up to date");
                    summary.succeeded.push(lang_code);
                }
                Ok(Err(e)) => {
                    error!("[{lang_code}] localization failed: {e}");
                    summary.failed.push((lang_code, e.to_string()));
                }
                Err(e) => {
                    error!("[{lang_code}] pipeline aborted: {e}");
                    summary.failed.push((lang_code, e.to_string()));
                }
            }
        }

        // The lock records the source snapshot once per run, independent of
        // per-language outcomes.
        lockfile::write_lock_file(&lock_path, &source_map).await?;

        if !summary.is_success() {
            warn!(
                "{} of {} language pipelines failed",
                summary.failed.len(),
                summary.failed.len() + summary.succeeded.len()
            );
        }
        Ok(summary)
    }
}
