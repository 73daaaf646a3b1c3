//! Locale type: a validated admin language code.
//!
//! Codes follow the host platform's language directory names (`en-gb`).
//! Lookups normalise case and accept `_` as separator, so `en_GB` and
//! `EN-GB` resolve to the same locale.

use crate::error::LocalizationError;
use crate::i18n::{LocaleConfig, TableRegistry, DASHBOARD_SCREEN, MAS_NAMESPACE};
use serde::Serialize;
use std::fmt;

/// A validated locale.
///
/// Only locales present and enabled in the registry can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    /// Normalised locale code (e.g., "en-gb")
    code: &'static str,
}

impl Locale {
    /// British English, the locale the dashboard is authored in.
    pub const EN_GB: Locale = Locale { code: "en-gb" };

    /// Normalise a raw locale code to the host's directory form.
    pub fn normalize(code: &str) -> String {
        code.trim().replace('_', "-").to_ascii_lowercase()
    }

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err(LocaleNotFound)` otherwise, addressed at the locale's MAS
    ///   dashboard table
    pub fn from_code(code: &str) -> Result<Locale, LocalizationError> {
        let normalized = Self::normalize(code);

        match TableRegistry::get().locale_config(&normalized) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            _ => Err(LocalizationError::LocaleNotFound {
                address: format!(
                    "{}/extension/{}/{}",
                    normalized, MAS_NAMESPACE, DASHBOARD_SCREEN
                ),
            }),
        }
    }

    /// The canonical locale, whose tables define the reference key set.
    pub fn canonical() -> Locale {
        let config = TableRegistry::get().canonical_locale();
        Locale { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered. A `Locale` is only built from
    /// registry entries, so this does not happen in practice.
    pub fn config(&self) -> &'static LocaleConfig {
        TableRegistry::get()
            .locale_config(self.code)
            .expect("Locale code should always be registered")
    }

    /// English name (e.g., "English (UK)").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name in the locale's own language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
