#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn os_preference_is_light_in_non_hydrate_tests() {
    assert!(!os_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(ThemeMode::Dark);
    apply(ThemeMode::Light);
}

#[test]
fn applied_mode_is_unknown_without_a_document() {
    apply(ThemeMode::Dark);
    assert!(applied_mode().is_none());
}
