//! The localization table: an immutable key/value map for one address.

use crate::error::LocalizationError;
use crate::i18n::datetime::render_pattern;
use crate::i18n::template::{interpolate, FormatArg};
use crate::i18n::{
    Locale, LookupMetrics, MessageKey, TableAddress, TableRegistry, DASHBOARD_SCREEN,
    MAS_NAMESPACE,
};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Read-only string table for one `(namespace, screen, locale)` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    address: TableAddress,
    entries: HashMap<&'static str, &'static str>,
}

impl LocalizationTable {
    /// Load the MAS dashboard table for a locale from the global registry.
    ///
    /// The table is built on first use and shared afterwards.
    ///
    /// # Arguments
    /// * `locale_code` - Locale code (e.g., "en-gb"; `en_GB` also resolves)
    ///
    /// # Errors
    /// `LocaleNotFound` when no dashboard table exists for the locale.
    pub fn load(locale_code: &str) -> Result<&'static LocalizationTable, LocalizationError> {
        TableRegistry::get().load(MAS_NAMESPACE, DASHBOARD_SCREEN, locale_code)
    }

    /// Build a table from raw entries.
    ///
    /// Keys must be unique; on a duplicate the first value wins and a
    /// warning is logged. Use `TableValidator::validate_source` to catch
    /// duplicates as errors.
    pub fn from_entries<I>(address: TableAddress, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut map = HashMap::new();

        for (key, value) in entries {
            if map.contains_key(key) {
                warn!(%address, key, "Duplicate localization key, keeping first value");
                continue;
            }
            map.insert(key, value);
        }

        Self {
            address,
            entries: map,
        }
    }

    pub fn address(&self) -> TableAddress {
        self.address
    }

    pub fn locale(&self) -> Locale {
        self.address.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }

    /// Exact lookup.
    ///
    /// # Arguments
    /// * `key` - Message key (e.g., "text_revenue")
    ///
    /// # Returns
    /// The stored value, unformatted. Templates keep their placeholders.
    ///
    /// # Errors
    /// `KeyNotFound` when the key is absent.
    pub fn get(&self, key: &str) -> Result<&'static str, LocalizationError> {
        let metrics = LookupMetrics::global();
        metrics.record_lookup();

        match self.entries.get(key) {
            Some(value) => Ok(*value),
            None => {
                metrics.record_miss();
                Err(LocalizationError::KeyNotFound {
                    key: key.to_string(),
                    address: self.address.to_string(),
                })
            }
        }
    }

    /// Look up then substitute positional arguments.
    ///
    /// # Arguments
    /// * `key` - Message key of a template (e.g., "text_activity_campaign_sent")
    /// * `args` - One argument per placeholder, in order
    ///
    /// # Returns
    /// The rendered string. Arguments are inserted as given, without escaping.
    ///
    /// # Errors
    /// `KeyNotFound` when the key is absent, `FormatArityMismatch` when the
    /// arguments do not fit the template's placeholders.
    pub fn format(&self, key: &str, args: &[FormatArg]) -> Result<String, LocalizationError> {
        let template = self.get(key)?;

        interpolate(key, template, args).inspect_err(|_| {
            LookupMetrics::global().record_format_failure();
        })
    }

    /// Lookup that never fails: a missing key is logged and rendered as the
    /// key itself.
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(kind = err.kind(), "{}", err);
                key
            }
        }
    }

    /// Graceful form of [`format`](Self::format); failures render the key.
    pub fn format_or_key(&self, key: &str, args: &[FormatArg]) -> String {
        match self.format(key, args) {
            Ok(value) => value,
            Err(err) => {
                warn!(kind = err.kind(), "{}", err);
                key.to_string()
            }
        }
    }

    /// Typed lookup for a declared key.
    pub fn text(&self, key: MessageKey) -> &str {
        self.get_or_key(key.as_str())
    }

    /// Render a date using the pattern stored under `key` (e.g. `format_date`).
    ///
    /// # Arguments
    /// * `key` - Key of a date pattern (`format_date`, `format_datetime`, ...)
    /// * `value` - The local date and time to render
    ///
    /// # Errors
    /// `KeyNotFound` when the key is absent.
    pub fn format_date(
        &self,
        key: &str,
        value: &NaiveDateTime,
    ) -> Result<String, LocalizationError> {
        let pattern = self.get(key)?;
        Ok(render_pattern(pattern, value))
    }

    /// Serialize the table as a JSON object, keys sorted, for AJAX responses.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let ordered: BTreeMap<_, _> = self.entries.iter().collect();
        serde_json::to_string(&ordered)
    }
}
