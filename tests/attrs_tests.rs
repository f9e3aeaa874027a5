// Host-side tests for canvas data-attribute overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod attrs {
    include!("../src/attrs.rs");
}

use attrs::apply_overrides;
use badge_core::{BadgeConfig, SpinDirection, ViewDirection};
use constants::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn no_attributes_keeps_defaults() {
    let o = apply_overrides(BadgeConfig::default(), lookup(&[]));
    assert_eq!(o.model_url, DEFAULT_MODEL_URL);
    assert_eq!(o.config, BadgeConfig::default());
    assert!(o.warnings.is_empty());
}

#[test]
fn every_attribute_is_applied() {
    let o = apply_overrides(
        BadgeConfig::default(),
        lookup(&[
            (ATTR_MODEL, " assets/crest.glb "),
            (ATTR_SPIN, "ccw"),
            (ATTR_SPIN_PERIOD, "6.5"),
            (ATTR_VIEW, "oblique"),
            (ATTR_WOBBLE, "on"),
        ]),
    );
    assert!(o.warnings.is_empty(), "{:?}", o.warnings);
    assert_eq!(o.model_url, "assets/crest.glb");
    assert_eq!(o.config.motion.spin_direction, SpinDirection::CounterClockwise);
    assert_eq!(o.config.motion.spin_period_sec, 6.5);
    assert!(o.config.motion.wobble.is_some());
    assert_eq!(o.config.camera, BadgeConfig::showcase().camera);
    assert!(matches!(o.config.camera.hero_view, ViewDirection::Oblique(_)));
}

#[test]
fn flat_view_undoes_an_oblique_base() {
    let o = apply_overrides(BadgeConfig::showcase(), lookup(&[(ATTR_VIEW, "FLAT")]));
    assert_eq!(o.config.camera.hero_view, ViewDirection::Flat);
    assert_eq!(o.config.camera.badge_view, ViewDirection::Flat);
}

#[test]
fn bad_values_warn_and_are_skipped() {
    let o = apply_overrides(
        BadgeConfig::default(),
        lookup(&[
            (ATTR_SPIN, "sideways"),
            (ATTR_SPIN_PERIOD, "-3"),
            (ATTR_VIEW, "isometric"),
            (ATTR_WOBBLE, "maybe"),
            (ATTR_MODEL, "   "),
        ]),
    );
    assert_eq!(o.warnings.len(), 5);
    assert_eq!(o.config, BadgeConfig::default());
    assert_eq!(o.model_url, DEFAULT_MODEL_URL);
}

#[test]
fn spin_period_rejects_non_numbers_and_extremes() {
    for bad in ["abc", "0", "NaN", "inf", "601"] {
        let o = apply_overrides(BadgeConfig::default(), lookup(&[(ATTR_SPIN_PERIOD, bad)]));
        assert_eq!(o.warnings.len(), 1, "{bad}");
        assert_eq!(
            o.config.motion.spin_period_sec,
            BadgeConfig::default().motion.spin_period_sec
        );
    }
}

#[test]
fn invalid_base_falls_back_whole() {
    let mut base = BadgeConfig::default();
    base.layout.badge_px = -1.0;
    let o = apply_overrides(base.clone(), lookup(&[(ATTR_SPIN, "ccw")]));
    assert_eq!(o.config, base);
    assert!(o.warnings.iter().any(|w| w.contains("rejected")));
}
