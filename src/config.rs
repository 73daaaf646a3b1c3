use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// What a lookup renders when a key is missing or a template fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Render the key itself, so the gap is visible in the admin panel
    #[default]
    RenderKey,
    /// Render nothing
    Empty,
}

impl FromStr for MissingKeyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "key" => Ok(MissingKeyPolicy::RenderKey),
            "empty" => Ok(MissingKeyPolicy::Empty),
            other => bail!("Unknown missing-key policy: '{}' (expected 'key' or 'empty')", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale used when the requested admin language has no table
    pub default_locale: String,

    pub missing_key_policy: MissingKeyPolicy,

    /// HTML-escape string arguments before interpolation
    pub escape_html: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: "en-gb".to_string(),
            missing_key_policy: MissingKeyPolicy::RenderKey,
            escape_html: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            default_locale: std::env::var("MAS_DEFAULT_LOCALE")
                .unwrap_or(defaults.default_locale),

            missing_key_policy: match std::env::var("MAS_MISSING_KEY_POLICY") {
                Ok(value) => value
                    .parse()
                    .context("MAS_MISSING_KEY_POLICY is invalid")?,
                Err(_) => defaults.missing_key_policy,
            },

            escape_html: match std::env::var("MAS_ESCAPE_HTML") {
                Ok(value) => parse_bool(&value).context("MAS_ESCAPE_HTML is invalid")?,
                Err(_) => defaults.escape_html,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Expected a boolean, got '{}'", other),
    }
}
