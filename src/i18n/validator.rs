//! Table validation module.
//!
//! Audits a table against the declared key set: every known key present and
//! non-empty, templates carrying the placeholders their key declares, and no
//! duplicate entries in a raw source.

use crate::i18n::template::{placeholders, signature_string};
use crate::i18n::{KeyCategory, LocalizationTable, MessageKey, TableAddress};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Problems that would show up as broken text in the dashboard
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for localization tables.
pub struct TableValidator;

impl TableValidator {
    /// Validate a built table.
    ///
    /// Errors:
    /// - a declared key is missing
    /// - a value is empty
    /// - a template's placeholders differ from the key's declared signature
    /// - an `error_*` value duplicates a `text_success*` value
    ///
    /// Warnings:
    /// - a key is not declared
    /// - a value equals its own key
    pub fn validate(table: &LocalizationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let address = table.address();

        for key in MessageKey::ALL {
            if !table.contains(key.as_str()) {
                report
                    .errors
                    .push(format!("{}: missing key `{}`", address, key));
            }
        }

        for (key, value) in table.entries() {
            if value.is_empty() {
                report
                    .errors
                    .push(format!("{}: empty value for `{}`", address, key));
            }

            if value == key {
                report
                    .warnings
                    .push(format!("{}: value of `{}` is its own key", address, key));
            }

            match key.parse::<MessageKey>() {
                Ok(declared) => {
                    let found = placeholders(value);
                    if found.as_slice() != declared.signature() {
                        report.errors.push(format!(
                            "{}: placeholder mismatch for `{}`: declared {}, found {}",
                            address,
                            key,
                            signature_string(declared.signature()),
                            signature_string(&found)
                        ));
                    }
                }
                Err(()) => report
                    .warnings
                    .push(format!("{}: undeclared key `{}`", address, key)),
            }
        }

        report.merge(Self::check_category_collisions(table));
        report
    }

    /// Check raw source entries for duplicate keys.
    ///
    /// A built table silently keeps the first of a duplicate pair, so
    /// duplicates can only be seen before building.
    pub fn validate_entries(entries: &[(&str, &str)]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for (key, _) in entries {
            *counts.entry(*key).or_insert(0) += 1;
        }

        let mut duplicates: Vec<_> = counts.into_iter().filter(|(_, n)| *n > 1).collect();
        duplicates.sort_unstable();

        for (key, n) in duplicates {
            report
                .errors
                .push(format!("duplicate key `{}` ({} entries)", key, n));
        }

        report
    }

    /// Validate a raw table source: duplicate keys in the source plus every
    /// check of [`validate`](Self::validate) on the table built from it.
    ///
    /// # Arguments
    /// * `address` - Address the source is registered under
    /// * `source` - Entries in declaration order
    ///
    /// # Returns
    /// A report whose errors include source duplicates, which a built table
    /// no longer shows.
    pub fn validate_source(
        address: TableAddress,
        source: &[(MessageKey, &'static str)],
    ) -> ValidationReport {
        let raw: Vec<(&str, &str)> = source
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();

        let mut report = Self::validate_entries(&raw);
        report.errors = report
            .errors
            .into_iter()
            .map(|message| format!("{}: {}", address, message))
            .collect();

        let table = LocalizationTable::from_entries(
            address,
            source.iter().map(|(key, value)| (key.as_str(), *value)),
        );
        report.merge(Self::validate(&table));
        report
    }

    fn check_category_collisions(table: &LocalizationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let entries = table.entries();

        let successes: HashSet<&str> = entries
            .iter()
            .filter(|(key, _)| KeyCategory::of(key) == KeyCategory::Success)
            .map(|(_, value)| *value)
            .collect();

        for (key, value) in &entries {
            if KeyCategory::of(key) == KeyCategory::Error && successes.contains(value) {
                report.errors.push(format!(
                    "{}: `{}` reuses a success message",
                    table.address(),
                    key
                ));
            }
        }

        report
    }
}
