//! Audit binary - validates the built-in localization tables
//!
//! Usage:
//!   cargo run --bin mas-i18n-audit                  # Validate every registered table
//!   cargo run --bin mas-i18n-audit -- --dump en-gb  # Print one dashboard table as JSON
//!
//! Optional environment variables:
//! - MAS_DEFAULT_LOCALE (defaults to en-gb)
//! - RUST_LOG (defaults to mas_dashboard_i18n=info)

use anyhow::{bail, Context, Result};
use mas_dashboard_i18n::config::Config;
use mas_dashboard_i18n::i18n::{LookupMetrics, TableRegistry, TableValidator, ValidationReport};
use mas_dashboard_i18n::LocalizationTable;
use serde::Serialize;
use tracing::{error, info, warn};

/// Validation result for one table
#[derive(Debug, Serialize)]
struct TableAudit {
    address: String,
    entries: usize,
    report: ValidationReport,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mas_dashboard_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    if let Some(position) = args.iter().position(|arg| arg == "--dump") {
        let locale = args
            .get(position + 1)
            .map(String::as_str)
            .unwrap_or(config.default_locale.as_str());
        return dump(locale);
    }

    audit()
}

/// Print one dashboard table as a JSON object
fn dump(locale: &str) -> Result<()> {
    let table = LocalizationTable::load(locale)
        .with_context(|| format!("Cannot dump locale '{}'", locale))?;

    info!(address = %table.address(), entries = table.len(), "Dumping table");
    println!("{}", table.to_json()?);
    Ok(())
}

/// Validate every registered table and print the findings as JSON
fn audit() -> Result<()> {
    let registry = TableRegistry::get();
    let mut audits = Vec::new();

    for (address, source) in registry.sources() {
        let table = registry
            .load(address.namespace, address.screen, address.locale.code())
            .with_context(|| format!("Failed to load {}", address))?;

        // Duplicates only exist in the raw source; the built table has dropped them
        let report = TableValidator::validate_source(address, source);
        for message in &report.errors {
            error!("{}", message);
        }
        for message in &report.warnings {
            warn!("{}", message);
        }

        audits.push(TableAudit {
            address: address.to_string(),
            entries: table.len(),
            report,
        });
    }

    println!("{}", serde_json::to_string_pretty(&audits)?);

    let metrics = LookupMetrics::global().report();
    info!(
        tables = metrics.tables_built,
        lookups = metrics.lookups,
        "Audit finished"
    );

    let failed = audits.iter().filter(|a| a.report.has_errors()).count();
    if failed > 0 {
        bail!("{} localization table(s) failed validation", failed);
    }

    Ok(())
}
