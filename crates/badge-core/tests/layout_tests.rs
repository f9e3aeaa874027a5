// Box interpolation, easing and display policy.

use badge_core::easing::{ease_out_cubic, Easing};
use badge_core::layout::*;
use badge_core::{DisplayConfig, LayoutConfig};

fn desktop() -> Viewport {
    Viewport::new(1200.0, 800.0)
}

#[test]
fn ease_fixes_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn ease_is_monotonic_over_unit_interval() {
    let mut prev = ease_out_cubic(0.0);
    for i in 1..=1000 {
        let x = i as f64 / 1000.0;
        let y = ease_out_cubic(x);
        assert!(y >= prev, "ease decreased at x={x}: {prev} -> {y}");
        assert!((0.0..=1.0).contains(&y));
        prev = y;
    }
}

#[test]
fn ease_clamps_out_of_range_input() {
    assert_eq!(Easing::CubicOut.apply(-0.5), 0.0);
    assert_eq!(Easing::CubicOut.apply(1.5), 1.0);
    assert_eq!(Easing::CubicOut.apply(f64::NAN), 0.0);
}

#[test]
fn hero_box_is_centered_square() {
    let cfg = LayoutConfig::default();
    let hero = hero_box(desktop(), &cfg);
    assert_eq!(hero.size, 480.0);
    assert_eq!(hero.left, 360.0);
    assert_eq!(hero.top, 160.0);

    let portrait = hero_box(Viewport::new(375.0, 812.0), &cfg);
    assert_eq!(portrait.size, 225.0);
    assert_eq!(portrait.left, 75.0);
}

#[test]
fn badge_size_follows_breakpoint() {
    let cfg = LayoutConfig::default();
    assert_eq!(badge_box(Viewport::new(320.0, 640.0), &cfg).size, 148.0);
    assert_eq!(badge_box(desktop(), &cfg).size, 180.0);
    // The breakpoint itself uses the default size.
    assert_eq!(badge_size(Viewport::new(360.0, 640.0), &cfg), 180.0);
    let b = badge_box(desktop(), &cfg);
    assert_eq!((b.left, b.top), (20.0, 20.0));
}

#[test]
fn interpolate_returns_exact_endpoints() {
    let cfg = LayoutConfig::default();
    for vp in [desktop(), Viewport::new(320.0, 640.0), Viewport::new(1920.0, 1080.0)] {
        assert_eq!(interpolate(vp, 0.0, &cfg), hero_box(vp, &cfg));
        assert_eq!(interpolate(vp, 1.0, &cfg), badge_box(vp, &cfg));
    }
}

#[test]
fn interpolate_stays_between_hero_and_badge() {
    let cfg = LayoutConfig::default();
    let hero = hero_box(desktop(), &cfg);
    let badge = badge_box(desktop(), &cfg);
    for i in 1..100 {
        let b = interpolate(desktop(), i as f64 / 100.0, &cfg);
        assert!(b.left < hero.left && b.left > badge.left);
        assert!(b.top < hero.top && b.top > badge.top, "top {} at step {i}", b.top);
        assert!(b.size < hero.size && b.size > badge.size);
    }
}

#[test]
fn arc_bias_only_lifts_the_top() {
    let flat = LayoutConfig {
        arc_bias: 0.0,
        ..LayoutConfig::default()
    };
    let arced = LayoutConfig::default();
    let a = interpolate(desktop(), 0.5, &flat);
    let b = interpolate(desktop(), 0.5, &arced);
    assert_eq!(a.left, b.left);
    assert_eq!(a.size, b.size);
    // Travel is upward, so the arc pulls the top further toward the badge.
    assert!(b.top < a.top);
}

#[test]
fn output_px_rounds_and_never_hits_zero() {
    let b = ViewportBox {
        left: 0.0,
        top: 0.0,
        size: 179.6,
    };
    assert_eq!(b.output_px(), 180);
    let tiny = ViewportBox { size: 0.2, ..b };
    assert_eq!(tiny.output_px(), 1);
}

#[test]
fn pixel_ratio_is_capped_by_device_class() {
    let cfg = DisplayConfig::default();
    let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36";
    let desktop_ua = "Mozilla/5.0 (X11; Linux x86_64) Firefox/131.0";
    assert!(is_mobile_user_agent(android));
    assert!(is_mobile_user_agent("iPhone ... MOBILE/15E148"));
    assert!(!is_mobile_user_agent(desktop_ua));

    assert_eq!(pixel_ratio(3.0, android, &cfg), 1.5);
    assert_eq!(pixel_ratio(3.0, desktop_ua, &cfg), 1.75);
    assert_eq!(pixel_ratio(1.0, desktop_ua, &cfg), 1.0);
    assert_eq!(pixel_ratio(f64::NAN, desktop_ua, &cfg), 1.0);
}
