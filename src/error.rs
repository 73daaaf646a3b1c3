//! Error types for table loading and string lookup.
//!
//! None of these are fatal to the host: the graceful lookup helpers log them
//! and render a placeholder instead.

use thiserror::Error;

/// Failure raised by a localization lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    /// No table is registered for the requested address.
    #[error("no localization table for `{address}`")]
    LocaleNotFound {
        /// Host-style address, e.g. `en-gb/extension/mas/dashboard`
        address: String,
    },

    /// The table has no entry for the key.
    #[error("unknown localization key `{key}` in `{address}`")]
    KeyNotFound { key: String, address: String },

    /// Arguments passed to a template do not match its placeholders.
    #[error("template `{key}` expects {expected} but was given {supplied}")]
    FormatArityMismatch {
        key: String,
        /// Placeholder signature of the template, e.g. `(%s, %d)`
        expected: String,
        /// Kinds of the supplied arguments, e.g. `(string)`
        supplied: String,
    },
}

impl LocalizationError {
    /// Short machine-readable name of the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LocalizationError::LocaleNotFound { .. } => "locale_not_found",
            LocalizationError::KeyNotFound { .. } => "key_not_found",
            LocalizationError::FormatArityMismatch { .. } => "format_arity_mismatch",
        }
    }
}
