use super::*;

#[test]
fn defaults_match_stock_behaviour() {
    let cfg = ChromeConfig::default();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.loading_message, "Loading...");
    assert_eq!(cfg.navigating_message, "Navigating...");
    assert_eq!(cfg.error_message, "An error occurred");
    assert_eq!(cfg.parsing_grace_ms, 500);
    assert_eq!(cfg.parsed_grace_ms, 300);
    assert_eq!(cfg.navigation_delay_ms, 300);
    assert_eq!(cfg.notice_duration_ms, 3000);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(ChromeConfig::from_json("{}").unwrap(), ChromeConfig::default());
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let cfg = ChromeConfig::from_json(r#"{"storage_key":"site_theme","navigation_delay_ms":0}"#).unwrap();
    assert_eq!(cfg.storage_key, "site_theme");
    assert_eq!(cfg.navigation_delay_ms, 0);
    assert_eq!(cfg.loading_message, "Loading...");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ChromeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ChromeConfig::from_json(r#"{"storage_kee":"x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_message_is_invalid() {
    let err = ChromeConfig::from_json(r#"{"loading_message":"  "}"#).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { field: "loading_message", reason: "must not be blank" });
    assert_eq!(err.to_string(), "invalid config field loading_message: must not be blank");
}

#[test]
fn from_json_or_default_tolerates_absence_and_garbage() {
    assert_eq!(ChromeConfig::from_json_or_default(None), ChromeConfig::default());
    assert_eq!(ChromeConfig::from_json_or_default(Some("   ")), ChromeConfig::default());
    assert_eq!(ChromeConfig::from_json_or_default(Some("[1,2")), ChromeConfig::default());
}

#[test]
fn from_json_or_default_uses_valid_config() {
    let cfg = ChromeConfig::from_json_or_default(Some(r#"{"notice_duration_ms":1200}"#));
    assert_eq!(cfg.notice_duration_ms, 1200);
}
