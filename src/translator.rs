//! Request-scoped lookup facade.
//!
//! A `Translator` pairs a loaded table with the configured missing-key and
//! escaping policies. It never fails after construction: lookup problems are
//! logged and rendered according to [`MissingKeyPolicy`].

use crate::config::{Config, MissingKeyPolicy};
use crate::error::LocalizationError;
use crate::i18n::{FormatArg, Locale, LocalizationTable, MessageKey};
use crate::messages::DashboardMessages;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

pub struct Translator<'t> {
    table: &'t LocalizationTable,
    policy: MissingKeyPolicy,
    escape_html: bool,
}

impl Translator<'static> {
    /// Translator for an incoming admin request.
    ///
    /// Uses the requested locale when it has a table, otherwise the
    /// configured default locale. The default is tried once.
    ///
    /// # Errors
    /// `LocaleNotFound` when neither locale has a dashboard table.
    pub fn for_request(
        config: &Config,
        requested: Option<&str>,
    ) -> Result<Self, LocalizationError> {
        let requested = requested.unwrap_or(config.default_locale.as_str());
        let is_default = Locale::normalize(requested) == Locale::normalize(&config.default_locale);

        let table = match LocalizationTable::load(requested) {
            Ok(table) => table,
            Err(err) if is_default => {
                warn!(requested, "{}, no default locale to fall back to", err);
                return Err(err);
            }
            Err(err) => {
                warn!(
                    requested,
                    default = %config.default_locale,
                    "{}, using default locale",
                    err
                );
                LocalizationTable::load(&config.default_locale)?
            }
        };

        debug!(address = %table.address(), "Translator ready");
        Ok(Self::new(table, config))
    }
}

impl<'t> Translator<'t> {
    pub fn new(table: &'t LocalizationTable, config: &Config) -> Self {
        Self {
            table,
            policy: config.missing_key_policy,
            escape_html: config.escape_html,
        }
    }

    pub fn table(&self) -> &'t LocalizationTable {
        self.table
    }

    pub fn locale(&self) -> Locale {
        self.table.locale()
    }

    /// Typed formatting helpers for every dashboard template.
    pub fn messages(&self) -> DashboardMessages<'_> {
        DashboardMessages::new(self)
    }

    pub fn text(&self, key: MessageKey) -> String {
        self.get(key.as_str())
    }

    pub fn get(&self, key: &str) -> String {
        match self.table.get(key) {
            Ok(value) => value.to_string(),
            Err(err) => self.fallback(key, err),
        }
    }

    /// Interpolate a template. String arguments are HTML-escaped first when
    /// escaping is enabled.
    pub fn format(&self, key: &str, args: &[FormatArg]) -> String {
        let result = if self.escape_html {
            let escaped: Vec<FormatArg> = args.iter().map(FormatArg::html_escaped).collect();
            self.table.format(key, &escaped)
        } else {
            self.table.format(key, args)
        };

        result.unwrap_or_else(|err| self.fallback(key, err))
    }

    /// Render a date with the pattern stored under a `format_*` key.
    pub fn date(&self, key: MessageKey, value: &NaiveDateTime) -> String {
        self.table
            .format_date(key.as_str(), value)
            .unwrap_or_else(|err| self.fallback(key.as_str(), err))
    }

    fn fallback(&self, key: &str, err: LocalizationError) -> String {
        warn!(kind = err.kind(), "{}", err);

        match self.policy {
            MissingKeyPolicy::RenderKey => key.to_string(),
            MissingKeyPolicy::Empty => String::new(),
        }
    }
}
