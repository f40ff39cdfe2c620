/*!
 * Per-run localization coordinator.
 *
 * A [`SourceProcessor`] owns the immutable source snapshot (canonical map +
 * new-or-modified key set) for one run and drives one target language at a
 * time: load the existing target, work out exactly which keys need
 * translation, call the orchestrator, merge, and persist. Pipelines for
 * different languages share the processor read-only, so they can run
 * concurrently without locking.
 */

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::diff_utils::retrieve_keys_to_be_localized;
use crate::errors::AppError;
use crate::formats;
use crate::language_utils;
use crate::resource_map::ResourceMap;
use crate::translation::{LocalizationHints, Localizer};

/// Coordinator for localizing one source snapshot into N target languages
pub struct SourceProcessor {
    localizer: Localizer,
    source_map: Arc<ResourceMap>,
    nom_keys: Arc<HashSet<String>>,
    hints: LocalizationHints,
}

impl SourceProcessor {
    /// Create a processor from the parsed source map and the NOM key set
    /// computed against the lock file.
    pub fn new(
        localizer: Localizer,
        source_map: Arc<ResourceMap>,
        nom_keys: Arc<HashSet<String>>,
        hints: LocalizationHints,
    ) -> Self {
        Self {
            localizer,
            source_map,
            nom_keys,
            hints,
        }
    }

    /// Bring one target file up to date with the source snapshot.
    ///
    /// Translates exactly the keys that are missing from the target or marked
    /// new-or-modified, merges them over the existing content and saves in
    /// the format implied by the target path's own extension. When nothing
    /// needs translation the target file is left untouched.
    pub async fn localize_to_target_language(
        &self,
        target_path: impl AsRef<Path>,
        target_language: &str,
    ) -> Result<(), AppError> {
        if !language_utils::is_valid_two_letter_lang_code(target_language) {
            return Err(AppError::InvalidLanguageCode(target_language.to_string()));
        }

        let target_path = target_path.as_ref();
        let target_map = formats::parse(target_path).await?;
        let keys_to_localize =
            retrieve_keys_to_be_localized(&self.source_map, &target_map, &self.nom_keys);

        if keys_to_localize.is_empty() {
            debug!(
                "Target {} is already up to date, skipping translation",
                target_path.display()
            );
            return Ok(());
        }

        info!(
            "Localizing {} keys into {}",
            keys_to_localize.len(),
            target_path.display()
        );

        let pairs_to_localize = self.source_map.sub_map(&keys_to_localize);
        let language_name = language_utils::retrieve_lang_full_name(target_language)?;
        let translated = self
            .localizer
            .localize(&pairs_to_localize, &language_name, &self.hints)
            .await?;

        let mut merged = target_map;
        merged.extend(translated);
        formats::serialize_and_save(&merged, target_path).await?;
        Ok(())
    }
}
