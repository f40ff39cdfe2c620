/*!
 * # l10nsync
 *
 * A Rust library for keeping translated resource files in sync with a single
 * source resource file, using AI providers to translate only what changed.
 *
 * ## Features
 *
 * - Parse and serialize `.properties`, nested JSON and Android `strings.xml`
 *   resources through one canonical flat key-value model
 * - Detect new and modified source keys with a content-addressed lock file
 * - Translate in concurrent batches with retry and atomic failure
 * - Merge fresh translations over existing target files without touching
 *   up-to-date entries
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `resource_map`: canonical insertion-ordered key-value model
 * - `formats`: per-format codecs (properties, JSON, Android XML)
 * - `lockfile`: pair hashing and lock file persistence
 * - `diff_utils`: new-or-modified and keys-to-localize computation
 * - `translation`: batching, concurrency and prompts around a provider
 * - `providers`: client implementations for translation services:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::anthropic`: Anthropic API client
 *   - `providers::mock`: deterministic test double
 * - `processor`: per-language localization pipeline
 * - `app_controller`: per-run fan-out over target languages
 * - `app_config`: YAML configuration loading and validation
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod diff_utils;
pub mod errors;
pub mod file_utils;
pub mod formats;
pub mod language_utils;
pub mod lockfile;
pub mod processor;
pub mod providers;
pub mod resource_map;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::SyncConfig;
pub use app_controller::Controller;
pub use errors::{AppError, LocalizationError, ParseError, ProviderError};
pub use processor::SourceProcessor;
pub use resource_map::ResourceMap;
pub use translation::{LocalizationHints, Localizer};
