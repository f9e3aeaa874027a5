//! On-screen box for the canvas: hero, badge, and the glide between them.
//!
//! Both end boxes are recomputed from the live viewport every time they are
//! asked for, so a resize mid-intro simply bends the glide toward the new
//! targets.

use crate::config::{DisplayConfig, LayoutConfig};
use crate::easing::{clamp01, lerp};
use std::f64::consts::PI;

/// Window dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Square canvas box in CSS pixels, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBox {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl ViewportBox {
    /// Renderer output size for this box.
    #[inline]
    pub fn output_px(&self) -> u32 {
        self.size.round().max(1.0) as u32
    }
}

/// Large square centered in the viewport.
pub fn hero_box(viewport: Viewport, cfg: &LayoutConfig) -> ViewportBox {
    let size = (viewport.width.min(viewport.height) * cfg.hero_fraction)
        .round()
        .max(1.0);
    ViewportBox {
        left: ((viewport.width - size) / 2.0).round(),
        top: ((viewport.height - size) / 2.0).round(),
        size,
    }
}

#[inline]
pub fn badge_size(viewport: Viewport, cfg: &LayoutConfig) -> f64 {
    if viewport.width < cfg.breakpoint_px {
        cfg.badge_px_small
    } else {
        cfg.badge_px
    }
}

/// Small square pinned to the top-left corner.
pub fn badge_box(viewport: Viewport, cfg: &LayoutConfig) -> ViewportBox {
    ViewportBox {
        left: cfg.offset_px,
        top: cfg.offset_px,
        size: badge_size(viewport, cfg),
    }
}

/// Box at `progress` along the glide from hero to badge.
///
/// The endpoints are returned verbatim so that no rounding or arc residue
/// survives at 0 or 1.
pub fn interpolate(viewport: Viewport, progress: f64, cfg: &LayoutConfig) -> ViewportBox {
    let p = clamp01(progress);
    let hero = hero_box(viewport, cfg);
    let badge = badge_box(viewport, cfg);
    if p <= 0.0 {
        return hero;
    }
    if p >= 1.0 {
        return badge;
    }
    let e = cfg.easing.apply(p);
    let arc = cfg.arc_bias * (PI * e).sin();
    ViewportBox {
        left: lerp(hero.left, badge.left, e),
        top: lerp(hero.top, badge.top, e) + (badge.top - hero.top) * arc,
        size: lerp(hero.size, badge.size, e),
    }
}

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    ua.contains("mobi") || ua.contains("android")
}

/// Renderer pixel ratio: the device ratio, capped lower on phones.
pub fn pixel_ratio(device_pixel_ratio: f64, user_agent: &str, cfg: &DisplayConfig) -> f64 {
    let cap = if is_mobile_user_agent(user_agent) {
        cfg.dpr_cap_mobile
    } else {
        cfg.dpr_cap_desktop
    };
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(cap)
    } else {
        1.0_f64.min(cap)
    }
}
