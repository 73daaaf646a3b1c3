//! Integration tests for the MAS dashboard localization tables
//!
//! These tests go through the public API only: registry loading, lookups,
//! interpolation, validation and the request-scoped translator.

use chrono::NaiveDate;
use mas_dashboard_i18n::config::{Config, MissingKeyPolicy};
use mas_dashboard_i18n::i18n::{
    KeyCategory, LookupMetrics, TableAddress, TableRegistry, TableValidator, EN_GB_DASHBOARD,
};
use mas_dashboard_i18n::{Locale, LocalizationError, LocalizationTable, MessageKey, Translator};
use proptest::prelude::*;

// ==================== Test Helpers ====================

fn en_gb() -> &'static LocalizationTable {
    LocalizationTable::load("en-gb").expect("en-gb dashboard table should load")
}

// ==================== Loading Tests ====================

#[test]
fn test_load_en_gb() {
    let table = en_gb();
    assert_eq!(table.locale(), Locale::EN_GB);
    assert_eq!(
        table.address().to_string(),
        "en-gb/extension/mas/dashboard"
    );
    assert_eq!(table.len(), MessageKey::ALL.len());
}

#[test]
fn test_load_unknown_locale_is_locale_not_found() {
    let err = LocalizationTable::load("pt-br").unwrap_err();
    assert!(matches!(err, LocalizationError::LocaleNotFound { .. }));
}

#[test]
fn test_load_twice_is_deterministic() {
    let registry = TableRegistry::get();
    let first = registry.build("mas", "dashboard", "en-gb").unwrap();
    let second = registry.build("mas", "dashboard", "en-gb").unwrap();

    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.entries(), second.entries());
    assert_eq!(first, second);
}

#[test]
fn test_cached_load_shares_one_table() {
    let first = en_gb();
    let second = en_gb();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_cached_table_is_built_once_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| en_gb() as *const LocalizationTable as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

// ==================== Lookup Tests ====================

#[test]
fn test_every_key_has_non_empty_value() {
    let table = en_gb();
    for key in table.keys() {
        let value = table.get(key).expect("listed key should resolve");
        assert!(!value.is_empty(), "{} is empty", key);
    }
}

#[test]
fn test_every_declared_key_resolves() {
    let table = en_gb();
    for key in MessageKey::ALL {
        assert!(table.get(key.as_str()).is_ok(), "{} is missing", key);
    }
}

#[test]
fn test_get_nonexistent_key() {
    let result = en_gb().get("nonexistent_key");
    assert_eq!(
        result,
        Err(LocalizationError::KeyNotFound {
            key: "nonexistent_key".to_string(),
            address: "en-gb/extension/mas/dashboard".to_string(),
        })
    );
}

#[test]
fn test_missing_key_counts_as_miss() {
    let metrics = LookupMetrics::global();
    let before = metrics.misses();
    let _ = en_gb().get("nonexistent_key");
    assert!(metrics.misses() > before);
}

#[test]
fn test_health_labels() {
    let table = en_gb();
    assert_eq!(table.text(MessageKey::TextHealthCore), "MAS Core");
    assert_eq!(table.text(MessageKey::TextHealthDatabase), "Database");
    assert_eq!(table.text(MessageKey::TextHealthAiGateway), "AI Gateway");
    assert_eq!(table.text(MessageKey::TextHealthQueue), "Message Queue");
}

// ==================== Format Tests ====================

#[test]
fn test_format_segment_created() {
    let out = en_gb()
        .format("text_activity_segment_created", &["VIP Customers".into()])
        .unwrap();
    assert_eq!(out, "Created segment \"VIP Customers\"");
}

#[test]
fn test_format_campaign_sent() {
    let out = en_gb()
        .format("text_activity_campaign_sent", &[1500.into()])
        .unwrap();
    assert_eq!(out, "Sent campaign to 1500 recipients");
}

#[test]
fn test_format_wrong_arity() {
    let err = en_gb()
        .format("text_activity_campaign_sent", &[1500.into(), 2.into()])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "template `text_activity_campaign_sent` expects (%d) but was given (integer, integer)"
    );
}

#[test]
fn test_format_date_patterns() {
    let table = en_gb();
    let value = NaiveDate::from_ymd_opt(2024, 11, 22)
        .unwrap()
        .and_hms_opt(16, 5, 30)
        .unwrap();

    assert_eq!(table.format_date("format_date", &value).unwrap(), "22/11/2024");
    assert_eq!(
        table.format_date("format_datetime", &value).unwrap(),
        "22/11/2024 16:05:30"
    );
    assert_eq!(
        table.format_date("format_date_long", &value).unwrap(),
        "Friday 22nd November 2024"
    );
    assert_eq!(table.format_date("format_time", &value).unwrap(), "16:05");
}

// ==================== Category Tests ====================

#[test]
fn test_errors_never_match_success_messages() {
    let table = en_gb();
    let entries = table.entries();

    let successes: Vec<&str> = entries
        .iter()
        .filter(|(key, _)| KeyCategory::of(key) == KeyCategory::Success)
        .map(|(_, value)| *value)
        .collect();

    for (key, value) in &entries {
        if KeyCategory::of(key) == KeyCategory::Error {
            assert!(!successes.contains(value), "{} collides with a success message", key);
        }
    }
}

// ==================== Validation Tests ====================

#[test]
fn test_builtin_tables_validate_clean() {
    let registry = TableRegistry::get();
    for address in registry.addresses() {
        let table = registry
            .load(address.namespace, address.screen, address.locale.code())
            .unwrap();
        let report = TableValidator::validate(table);
        assert!(report.is_clean(), "{}: {:?}", address, report);
    }
}

#[test]
fn test_builtin_sources_validate_clean() {
    for (address, source) in TableRegistry::get().sources() {
        let report = TableValidator::validate_source(address, source);
        assert!(report.is_clean(), "{}: {:?}", address, report);
    }
}

#[test]
fn test_duplicated_source_row_fails_source_validation() {
    let mut source = EN_GB_DASHBOARD.to_vec();
    source.push((MessageKey::TextRevenue, "Turnover"));

    let report = TableValidator::validate_source(TableAddress::dashboard(Locale::EN_GB), &source);
    assert!(report.has_errors());
    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("duplicate key `text_revenue`")));
}

#[test]
fn test_change_rounds_like_host_sprintf() {
    let out = en_gb()
        .format("text_change_up", &[0.25.into()])
        .unwrap();
    assert_eq!(out, "Up 0.3% on previous period");
}

#[test]
fn test_builtin_source_has_no_duplicates() {
    let raw: Vec<(&str, &str)> = EN_GB_DASHBOARD
        .iter()
        .map(|(key, value)| (key.as_str(), *value))
        .collect();
    assert!(TableValidator::validate_entries(&raw).is_clean());
}

#[test]
fn test_custom_table_with_gap_fails_validation() {
    let table = LocalizationTable::from_entries(
        TableAddress::dashboard(Locale::EN_GB),
        [("heading_title", "MAS Dashboard")],
    );
    let report = TableValidator::validate(&table);
    assert_eq!(report.errors.len(), MessageKey::ALL.len() - 1);
}

// ==================== Translator Tests ====================

#[test]
fn test_translator_end_to_end() {
    let translator = Translator::for_request(&Config::default(), Some("en_GB")).unwrap();
    let messages = translator.messages();

    assert_eq!(translator.text(MessageKey::HeadingTitle), "MAS Dashboard");
    assert_eq!(
        messages.segment_created("VIP Customers"),
        "Created segment \"VIP Customers\""
    );
    assert_eq!(messages.campaign_sent(1500), "Sent campaign to 1500 recipients");
}

#[test]
fn test_translator_missing_key_never_panics() {
    let config = Config {
        missing_key_policy: MissingKeyPolicy::RenderKey,
        ..Config::default()
    };
    let translator = Translator::for_request(&config, Some("en-gb")).unwrap();

    assert_eq!(translator.get("nonexistent_key"), "nonexistent_key");
    assert_eq!(
        translator.format("text_activity_campaign_sent", &["lots".into()]),
        "text_activity_campaign_sent"
    );
}

#[test]
fn test_json_export_is_an_object_of_all_keys() {
    let json = en_gb().to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let object = parsed.as_object().expect("table serializes as an object");

    assert_eq!(object.len(), MessageKey::ALL.len());
    assert_eq!(object["text_revenue"], "Revenue");
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_unknown_keys_never_panic(key in "[a-z_]{1,40}") {
        let table = en_gb();
        match table.get(&key) {
            Ok(value) => prop_assert!(!value.is_empty()),
            Err(err) => {
                let is_key_not_found = matches!(err, LocalizationError::KeyNotFound { .. });
                prop_assert!(is_key_not_found);
            }
        }
        prop_assert!(!table.get_or_key(&key).is_empty());
    }

    #[test]
    fn prop_campaign_sent_renders_any_count(count in 0u64..10_000_000) {
        let out = en_gb().format("text_activity_campaign_sent", &[count.into()]).unwrap();
        prop_assert_eq!(out, format!("Sent campaign to {} recipients", count));
    }
}
