//! `sprintf`-style template interpolation.
//!
//! Supports the directives the host's language files use: `%s`, `%d`, `%f`
//! with an optional precision (`%.1f`) and the `%%` escape. A lone `%` that
//! does not start a directive is kept as literal text, as is a precision on
//! anything but `f` (`%.2d`).
//!
//! Fixed-point output rounds halves away from zero (`0.25` at `%.1f` is
//! `0.3`), matching the host's `sprintf`.

use crate::error::LocalizationError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Kind of a positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `%s`, accepts any argument
    Str,
    /// `%d`, accepts integers only
    Int,
    /// `%f` / `%.Nf`, accepts integers and floats
    Float,
}

impl Placeholder {
    pub fn directive(self) -> &'static str {
        match self {
            Placeholder::Str => "%s",
            Placeholder::Int => "%d",
            Placeholder::Float => "%f",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

/// A runtime argument for a template.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatArg {
    Str(String),
    Int(i64),
    Float(f64),
}

impl FormatArg {
    fn kind_name(&self) -> &'static str {
        match self {
            FormatArg::Str(_) => "string",
            FormatArg::Int(_) => "integer",
            FormatArg::Float(_) => "float",
        }
    }

    /// Copy of this argument with string content HTML-escaped.
    pub fn html_escaped(&self) -> FormatArg {
        match self {
            FormatArg::Str(s) => FormatArg::Str(escape_html(s)),
            other => other.clone(),
        }
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::Str(value.clone())
    }
}

impl From<i32> for FormatArg {
    fn from(value: i32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<i64> for FormatArg {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<u32> for FormatArg {
    fn from(value: u32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        // Saturate rather than wrap; counts this large never reach the UI
        FormatArg::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        FormatArg::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();

fn directive_regex() -> &'static Regex {
    DIRECTIVE_REGEX.get_or_init(|| {
        Regex::new(r"%(?:(%)|\.(\d+)(f)|([sdf]))").expect("directive pattern is valid")
    })
}

/// Conversion letter of a directive match; `None` for the `%%` escape.
fn conversion<'t>(cap: &regex::Captures<'t>) -> Option<&'t str> {
    cap.get(3).or_else(|| cap.get(4)).map(|m| m.as_str())
}

/// Largest magnitude at which an `f64` still carries a fractional digit.
const MAX_ROUNDABLE: f64 = 1e15;

/// Render `value` with `precision` decimals, rounding halves away from zero.
fn format_fixed(value: f64, precision: usize) -> String {
    if precision <= 15 {
        let factor = 10f64.powi(precision as i32);
        let scaled = value * factor;
        if scaled.is_finite() && scaled.abs() < MAX_ROUNDABLE {
            return format!("{:.*}", precision, scaled.round() / factor);
        }
    }
    format!("{:.*}", precision, value)
}

/// Placeholders of a template, in order. `%%` is not a placeholder.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    directive_regex()
        .captures_iter(template)
        .filter_map(|cap| conversion(&cap))
        .map(|c| match c {
            "d" => Placeholder::Int,
            "f" => Placeholder::Float,
            _ => Placeholder::Str,
        })
        .collect()
}

/// Render a placeholder list as `(%s, %d)`.
pub fn signature_string(signature: &[Placeholder]) -> String {
    let parts: Vec<&str> = signature.iter().map(|p| p.directive()).collect();
    format!("({})", parts.join(", "))
}

fn supplied_string(args: &[FormatArg]) -> String {
    let parts: Vec<&str> = args.iter().map(FormatArg::kind_name).collect();
    format!("({})", parts.join(", "))
}

/// Substitute `args` into `template`.
///
/// # Errors
/// `FormatArityMismatch` when the argument count differs from the placeholder
/// count, or when an argument cannot fill its placeholder (e.g. a string for
/// `%d`).
pub fn interpolate(
    key: &str,
    template: &str,
    args: &[FormatArg],
) -> Result<String, LocalizationError> {
    let expected = placeholders(template);
    let mismatch = || LocalizationError::FormatArityMismatch {
        key: key.to_string(),
        expected: signature_string(&expected),
        supplied: supplied_string(args),
    };

    if expected.len() != args.len() {
        return Err(mismatch());
    }

    let mut result = String::with_capacity(template.len() + 16);
    let mut last_end = 0;
    let mut next_arg = args.iter();

    for cap in directive_regex().captures_iter(template) {
        let Some(whole) = cap.get(0) else { continue };
        result.push_str(&template[last_end..whole.start()]);
        last_end = whole.end();

        let Some(kind) = conversion(&cap) else {
            result.push('%');
            continue;
        };

        let precision = cap.get(2).and_then(|m| m.as_str().parse::<usize>().ok());
        let Some(arg) = next_arg.next() else {
            return Err(mismatch());
        };

        match (kind, arg) {
            ("s", FormatArg::Str(s)) => result.push_str(s),
            ("s", FormatArg::Int(n)) => result.push_str(&n.to_string()),
            ("s", FormatArg::Float(v)) => result.push_str(&v.to_string()),
            ("d", FormatArg::Int(n)) => result.push_str(&n.to_string()),
            ("f", FormatArg::Int(n)) => {
                result.push_str(&format_fixed(*n as f64, precision.unwrap_or(6)))
            }
            ("f", FormatArg::Float(v)) => {
                result.push_str(&format_fixed(*v, precision.unwrap_or(6)))
            }
            _ => return Err(mismatch()),
        }
    }

    result.push_str(&template[last_end..]);
    Ok(result)
}

/// Escape text for insertion into an HTML view.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}
