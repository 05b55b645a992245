//! Error types for the showcase core.
//!
//! [`ShowcaseError`] is the single error type returned by every fallible
//! operation in the crate, with [`Result`] as the matching alias. Most variants
//! are recovered locally by the caller (a missing preset is logged and ignored,
//! malformed persisted state falls back to defaults); the remaining ones
//! surface storage or configuration problems to the embedding application.

use thiserror::Error;

/// The main error type for showcase operations.
///
/// # Examples
///
/// ```
/// use showcase::ShowcaseError;
///
/// let err = ShowcaseError::PresetNotFound("neon".to_string());
/// assert_eq!(err.to_string(), "Theme preset not found: neon");
/// ```
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// A theme preset name is not defined for the current mode.
    ///
    /// Non-fatal: the theme store logs it and leaves its state untouched.
    #[error("Theme preset not found: {0}")]
    PresetNotFound(String),

    /// A persisted value could not be parsed.
    ///
    /// Recovered silently by substituting defaults; kept as a variant so the
    /// parse helpers can report what went wrong before the fallback kicks in.
    #[error("Malformed persisted state under `{key}`: {reason}")]
    MalformedPersistedState {
        /// Storage key holding the malformed value.
        key: String,
        /// Parser error message.
        reason: String,
    },

    /// Reading from or writing to the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or preset file is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A theme value is outside its accepted range or cannot be parsed.
    #[error("Invalid theme value: {0}")]
    InvalidValue(String),

    /// A component id does not exist in the catalog.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// A specialized `Result` type for showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
