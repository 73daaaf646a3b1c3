//! Rendering of the host's `date()`-style patterns (`d/m/Y H:i:s`).
//!
//! Directives outside the supported set are copied through unchanged, and a
//! backslash escapes the next character, as the host does.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Render `value` using a host date pattern.
pub fn render_pattern(pattern: &str, value: &NaiveDateTime) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    result.push(escaped);
                }
            }
            // Day
            'd' => result.push_str(&format!("{:02}", value.day())),
            'D' => result.push_str(&value.format("%a").to_string()),
            'j' => result.push_str(&value.day().to_string()),
            'l' => result.push_str(&value.format("%A").to_string()),
            'N' => result.push_str(&value.weekday().number_from_monday().to_string()),
            'S' => result.push_str(ordinal_suffix(value.day())),
            'w' => result.push_str(&value.weekday().num_days_from_sunday().to_string()),
            'z' => result.push_str(&value.ordinal0().to_string()),
            // Week
            'W' => result.push_str(&format!("{:02}", value.iso_week().week())),
            // Month
            'F' => result.push_str(&value.format("%B").to_string()),
            'm' => result.push_str(&format!("{:02}", value.month())),
            'M' => result.push_str(&value.format("%b").to_string()),
            'n' => result.push_str(&value.month().to_string()),
            // Year
            'Y' => result.push_str(&value.year().to_string()),
            'y' => result.push_str(&format!("{:02}", value.year().rem_euclid(100))),
            // Time
            'a' => result.push_str(if value.hour() < 12 { "am" } else { "pm" }),
            'A' => result.push_str(if value.hour() < 12 { "AM" } else { "PM" }),
            'g' => result.push_str(&value.hour12().1.to_string()),
            'G' => result.push_str(&value.hour().to_string()),
            'h' => result.push_str(&format!("{:02}", value.hour12().1)),
            'H' => result.push_str(&format!("{:02}", value.hour())),
            'i' => result.push_str(&format!("{:02}", value.minute())),
            's' => result.push_str(&format!("{:02}", value.second())),
            'U' => result.push_str(&value.and_utc().timestamp().to_string()),
            other => result.push(other),
        }
    }

    result
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(render_pattern("d/m/Y", &sample()), "05/03/2024");
    }

    #[test]
    fn test_datetime() {
        assert_eq!(render_pattern("d/m/Y H:i:s", &sample()), "05/03/2024 14:07:09");
    }

    #[test]
    fn test_long_date_with_suffix() {
        assert_eq!(render_pattern("l jS F Y", &sample()), "Tuesday 5th March 2024");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(render_pattern("g:i a", &sample()), "2:07 pm");
        assert_eq!(render_pattern("h A", &sample()), "02 PM");
    }

    #[test]
    fn test_short_names() {
        assert_eq!(render_pattern("D j M", &sample()), "Tue 5 Mar");
    }

    #[test]
    fn test_backslash_escapes_directive() {
        assert_eq!(render_pattern("\\d\\a\\y j", &sample()), "day 5");
    }

    #[test]
    fn test_unknown_directive_passes_through() {
        assert_eq!(render_pattern("Y-m-d T", &sample()), "2024-03-05 T");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(31), "st");
    }
}
