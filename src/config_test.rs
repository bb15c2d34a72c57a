#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = PageConfig::default();
    assert_eq!(config.section_selector, "section");
    assert_eq!(config.card_selector, ".project-card");
    assert_eq!(config.nav_link_selector, ".nav-link");
    assert_eq!(config.theme_toggle_id, "theme-toggle");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.reveal_threshold, 0.15);
    assert_eq!(config.stagger_step_ms, 120);
    assert_eq!(config.scroll_margin_px, 100.0);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn empty_object_yields_defaults() {
    let Ok(config) = PageConfig::from_json("{}") else {
        panic!("empty object should parse");
    };
    assert_eq!(config, PageConfig::default());
}

#[test]
fn partial_object_overrides_only_given_keys() {
    let raw = r#"{ "storage_key": "folio-theme", "stagger_step_ms": 80, "log_level": "debug" }"#;
    let Ok(config) = PageConfig::from_json(raw) else {
        panic!("partial object should parse");
    };
    assert_eq!(config.storage_key, "folio-theme");
    assert_eq!(config.stagger_step_ms, 80);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.card_selector, ".project-card");
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    let Ok(config) = PageConfig::from_json(r#"{ "reveal_threshold": 3.5 }"#) else {
        panic!("threshold should parse");
    };
    assert_eq!(config.reveal_threshold, 1.0);
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(PageConfig::from_json("{ nope"), Err(PageError::Config(_))));
}

#[test]
fn wrong_type_is_a_config_error() {
    assert!(matches!(
        PageConfig::from_json(r#"{ "stagger_step_ms": "fast" }"#),
        Err(PageError::Config(_))
    ));
}

#[test]
fn log_level_maps_onto_log_crate() {
    assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    assert_eq!(log::Level::from(LogLevel::Trace), log::Level::Trace);
}
