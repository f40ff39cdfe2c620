/*!
 * Error types for the l10nsync application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing a localization resource file
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed properties file content
    #[error("Malformed properties content: {0}")]
    Properties(String),

    /// Malformed JSON resource content
    #[error("Malformed JSON resource: {0}")]
    Json(String),

    /// Malformed Android strings XML content
    #[error("Malformed Android strings XML: {0}")]
    AndroidXml(String),

    /// I/O error while reading the resource
    #[error("Failed to read resource file: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a raw key collides with a structural separator token
#[derive(Error, Debug)]
pub enum FlattenError {
    /// A key to be flattened already contains the nesting separator
    #[error("Key '{key}' contains the nesting separator '{separator}'")]
    KeyContainsSeparator {
        /// The offending key
        key: String,
        /// The separator token in use
        separator: String,
    },
}

/// Errors that can occur when calling a translation provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error returned by the provider API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error sending the request (network failure, timeout)
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// The provider answered, but the answer is not a valid key-value object
    #[error("Invalid translation output: {0}")]
    InvalidOutput(String),
}

impl ProviderError {
    /// Whether the error is worth retrying with backoff.
    ///
    /// Request errors (bad request, auth, not-found, conflict, unprocessable)
    /// are permanent; every other API failure, timeouts and transport errors
    /// included, is transient. Invalid output is never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError { status_code, .. } => {
                !matches!(status_code, 400 | 401 | 403 | 404 | 409 | 422)
            }
            Self::RequestFailed(_) => true,
            Self::InvalidOutput(_) => false,
        }
    }
}

/// Aggregate failure of one target language's localization run
#[derive(Error, Debug)]
pub enum LocalizationError {
    /// A translation batch failed after exhausting its retries
    #[error("Translation batch failed: {0}")]
    Provider(#[from] ProviderError),

    /// A translation task could not be joined
    #[error("Translation task aborted: {0}")]
    TaskAborted(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The file extension does not map to a supported localization format
    #[error("Unsupported localization file format: '{0}'")]
    UnsupportedFormat(String),

    /// Error from parsing a resource file
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from flattening or unflattening structural keys
    #[error("Flatten error: {0}")]
    Flatten(#[from] FlattenError),

    /// A language code is not a well-formed two-letter ISO 639-1 code
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),

    /// Localization of one target language failed
    #[error("Localization failed: {0}")]
    Localization(#[from] LocalizationError),

    /// The configuration file could not be loaded or validated
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
