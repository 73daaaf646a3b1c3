//! Localization tables and lookup for the MAS marketing-automation dashboard.
//!
//! Tables are addressed the way the host admin panel addresses its language
//! files, by namespace, screen and locale, and are built once per process.

pub mod config;
pub mod error;
pub mod i18n;
pub mod messages;
pub mod translator;

pub use error::LocalizationError;
pub use i18n::{FormatArg, Locale, LocalizationTable, MessageKey};
pub use translator::Translator;
