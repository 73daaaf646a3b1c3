//! Localization tables for the MAS admin dashboard.
//!
//! All table data, key declarations and lookup infrastructure live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for locales and built-in tables
//! - `locale`: Validated locale codes (`en-gb`)
//! - `key`: Typed message keys and their placeholder signatures
//! - `strings`: The table data itself
//! - `table`: Lookup, interpolation and date rendering for one table
//! - `template`: `sprintf`-style interpolation
//! - `datetime`: Host `date()` pattern rendering
//! - `validator`: Table completeness and consistency checks
//! - `metrics`: Lookup observability
//!
//! # Example
//!
//! ```rust,ignore
//! use mas_dashboard_i18n::i18n::LocalizationTable;
//!
//! let table = LocalizationTable::load("en-gb")?;
//! let line = table.format("text_activity_campaign_sent", &[1500.into()])?;
//! assert_eq!(line, "Sent campaign to 1500 recipients");
//! ```

mod datetime;
mod key;
mod locale;
mod metrics;
mod registry;
mod strings;
mod table;
mod template;
mod validator;

pub use datetime::render_pattern;
pub use key::{KeyCategory, MessageKey};
pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{
    LocaleConfig, TableAddress, TableRegistry, DASHBOARD_SCREEN, MAS_NAMESPACE,
};
pub use strings::EN_GB_DASHBOARD;
pub use table::LocalizationTable;
pub use template::{escape_html, interpolate, placeholders, FormatArg, Placeholder};
pub use validator::{TableValidator, ValidationReport};
