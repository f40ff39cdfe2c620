/*!
 * AI-powered translation of localization pairs.
 *
 * - `orchestrator`: batching, concurrency and retry around a provider
 * - `prompts`: system and user prompt construction
 */

pub mod orchestrator;
pub mod prompts;

pub use orchestrator::{DEFAULT_CHUNK_SIZE, LocalizationHints, Localizer, RetryPolicy};
