//! Table registry: single source of truth for locales and built-in tables.
//!
//! The registry is a `OnceLock` singleton. Each registered table carries its
//! own `OnceLock` cache, so a table is built at most once per process and
//! read without locking afterwards.

use crate::error::LocalizationError;
use crate::i18n::strings::EN_GB_DASHBOARD;
use crate::i18n::{Locale, LocalizationTable, LookupMetrics, MessageKey};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Namespace of the MAS extension in the host's language directory.
pub const MAS_NAMESPACE: &str = "mas";

/// Screen name of the dashboard language file.
pub const DASHBOARD_SCREEN: &str = "dashboard";

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Host language directory code (e.g., "en-gb")
    pub code: &'static str,

    /// English name of the locale
    pub name: &'static str,

    /// Native name of the locale
    pub native_name: &'static str,

    /// Whether this locale's tables define the reference key set (only one should be true)
    pub is_canonical: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Three-part address of a table: namespace, screen and locale.
///
/// Mirrors the host's language-file path, e.g.
/// `en-gb/extension/mas/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TableAddress {
    pub namespace: &'static str,
    pub screen: &'static str,
    pub locale: Locale,
}

impl TableAddress {
    pub fn new(namespace: &'static str, screen: &'static str, locale: Locale) -> Self {
        Self {
            namespace,
            screen,
            locale,
        }
    }

    /// Address of the MAS dashboard table for a locale.
    pub fn dashboard(locale: Locale) -> Self {
        Self::new(MAS_NAMESPACE, DASHBOARD_SCREEN, locale)
    }
}

impl fmt::Display for TableAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/extension/{}/{}",
            self.locale, self.namespace, self.screen
        )
    }
}

struct RegisteredTable {
    address: TableAddress,
    source: &'static [(MessageKey, &'static str)],
    cache: OnceLock<LocalizationTable>,
}

impl RegisteredTable {
    fn build(&self) -> LocalizationTable {
        LocalizationTable::from_entries(
            self.address,
            self.source.iter().map(|(key, value)| (key.as_str(), *value)),
        )
    }
}

/// Global table registry singleton.
pub struct TableRegistry {
    locales: Vec<LocaleConfig>,
    tables: Vec<RegisteredTable>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<TableRegistry> = OnceLock::new();

impl TableRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static TableRegistry {
        REGISTRY.get_or_init(|| TableRegistry {
            locales: default_locales(),
            tables: default_tables(),
        })
    }

    /// Load a table, building and caching it on first use.
    ///
    /// # Arguments
    /// * `namespace` - Extension namespace (e.g., "mas")
    /// * `screen` - Screen the language file belongs to (e.g., "dashboard")
    /// * `locale_code` - Locale code in any case, `-` or `_` separated
    ///
    /// # Returns
    /// The shared table for the address; every call returns the same instance.
    ///
    /// # Errors
    /// `LocaleNotFound` when no enabled table exists at the address.
    pub fn load(
        &self,
        namespace: &str,
        screen: &str,
        locale_code: &str,
    ) -> Result<&LocalizationTable, LocalizationError> {
        let entry = self.find(namespace, screen, locale_code)?;

        Ok(entry.cache.get_or_init(|| {
            let table = entry.build();
            info!(address = %entry.address, entries = table.len(), "Built localization table");
            LookupMetrics::global().record_table_built();
            table
        }))
    }

    /// Build a fresh, uncached copy of a table.
    ///
    /// # Arguments
    /// Same as [`load`](Self::load).
    ///
    /// # Errors
    /// `LocaleNotFound` when no enabled table exists at the address.
    pub fn build(
        &self,
        namespace: &str,
        screen: &str,
        locale_code: &str,
    ) -> Result<LocalizationTable, LocalizationError> {
        self.find(namespace, screen, locale_code)
            .map(RegisteredTable::build)
    }

    fn find(
        &self,
        namespace: &str,
        screen: &str,
        locale_code: &str,
    ) -> Result<&RegisteredTable, LocalizationError> {
        let locale = Locale::normalize(locale_code);

        let found = self
            .tables
            .iter()
            .filter(|table| self.is_enabled(table.address.locale.code()))
            .find(|table| {
                table.address.namespace == namespace
                    && table.address.screen == screen
                    && table.address.locale.code() == locale
            });

        match found {
            Some(table) => Ok(table),
            None => {
                debug!(namespace, screen, locale = %locale, "No localization table registered");
                Err(LocalizationError::LocaleNotFound {
                    address: format!("{}/extension/{}/{}", locale, namespace, screen),
                })
            }
        }
    }

    /// Addresses of all tables in enabled locales.
    pub fn addresses(&self) -> Vec<TableAddress> {
        self.tables
            .iter()
            .filter(|table| self.is_enabled(table.address.locale.code()))
            .map(|table| table.address)
            .collect()
    }

    /// Raw sources of all tables in enabled locales, before duplicate keys
    /// are collapsed by building.
    ///
    /// # Returns
    /// One `(address, entries)` pair per registered table, in registration
    /// order.
    pub fn sources(&self) -> Vec<(TableAddress, &'static [(MessageKey, &'static str)])> {
        self.tables
            .iter()
            .filter(|table| self.is_enabled(table.address.locale.code()))
            .map(|table| (table.address, table.source))
            .collect()
    }

    /// Get a locale configuration by its normalised code.
    ///
    /// # Arguments
    /// * `code` - Normalised locale code (e.g., "en-gb")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn locale_config(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the canonical locale configuration.
    ///
    /// # Panics
    /// Panics if there is not exactly one canonical locale (a configuration
    /// error in the built-in list).
    pub fn canonical_locale(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }

    /// Check if a locale code is registered and enabled.
    ///
    /// # Arguments
    /// * `code` - Normalised locale code to check
    ///
    /// # Returns
    /// `true` if the locale exists and is enabled, `false` otherwise.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.locale_config(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Built-in locales.
fn default_locales() -> Vec<LocaleConfig> {
    vec![LocaleConfig {
        code: "en-gb",
        name: "English (UK)",
        native_name: "English (UK)",
        is_canonical: true,
        enabled: true,
    }]
}

/// Built-in tables.
fn default_tables() -> Vec<RegisteredTable> {
    vec![RegisteredTable {
        address: TableAddress::dashboard(Locale::EN_GB),
        source: EN_GB_DASHBOARD,
        cache: OnceLock::new(),
    }]
}
