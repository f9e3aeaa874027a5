//! Single configuration surface for the presentation.
//!
//! Every tunable the intro, the badge and the idle motion depend on lives
//! here, so variants of the widget differ only in the values they pass in.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::BadgeError;
use crate::framing::ViewDirection;
use crate::idle::SpinDirection;
use crate::phase::PhaseSchedule;
use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct BadgeConfig {
    pub layout: LayoutConfig,
    pub timeline: TimelineConfig,
    pub camera: CameraConfig,
    pub lights: LightConfig,
    pub motion: MotionConfig,
    pub display: DisplayConfig,
}

/// Hero and badge box geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub hero_fraction: f64,
    pub badge_px: f64,
    pub badge_px_small: f64,
    /// Viewports narrower than this use `badge_px_small`.
    pub breakpoint_px: f64,
    pub offset_px: f64,
    pub arc_bias: f64,
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    pub phases: PhaseSchedule,
    pub pop_decay_sec: f64,
    pub max_dt_sec: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_y_radians: f32,
    pub hero_padding: f32,
    pub badge_padding: f32,
    pub hero_view: ViewDirection,
    pub badge_view: ViewDirection,
    pub near_epsilon: f32,
    pub near_divisor: f32,
    pub far_min: f32,
    pub far_multiplier: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightConfig {
    pub key_intensity: f32,
    pub key_pop_boost: f32,
    pub rim_intensity: f32,
    pub rim_pop_boost: f32,
    pub exposure: f32,
    pub exposure_pop_boost: f32,
    pub ambient_intensity: f32,
    /// x radius, height and z radius of the key light's orbit.
    pub key_radii: Vec3,
    pub rim_position: Vec3,
    pub drift_amplitude: f32,
    pub drift_period_sec: f64,
    pub glint_start: f32,
    pub glint_sweep: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub spin_direction: SpinDirection,
    pub spin_period_sec: f64,
    pub intro_yaw: f32,
    pub intro_tilt: f32,
    pub intro_tilt_rate: f64,
    pub wobble: Option<WobbleConfig>,
}

/// Optional bob/tilt layered over the idle spin.
#[derive(Clone, Debug, PartialEq)]
pub struct WobbleConfig {
    pub period_sec: f64,
    pub bob: f32,
    pub tilt: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub dpr_cap_desktop: f64,
    pub dpr_cap_mobile: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hero_fraction: HERO_FRACTION,
            badge_px: BADGE_PX,
            badge_px_small: BADGE_PX_SMALL,
            breakpoint_px: SMALL_BREAKPOINT_PX,
            offset_px: CORNER_OFFSET_PX,
            arc_bias: ARC_BIAS,
            easing: Easing::CubicOut,
        }
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            phases: PhaseSchedule {
                pop_end: POP_END_SEC,
                travel_end: TRAVEL_END_SEC,
                settle_end: SETTLE_END_SEC,
            },
            pop_decay_sec: POP_DECAY_SEC,
            max_dt_sec: MAX_FRAME_DT_SEC,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_radians: FOV_DEG.to_radians(),
            hero_padding: HERO_PADDING,
            badge_padding: BADGE_PADDING,
            hero_view: ViewDirection::Flat,
            badge_view: ViewDirection::Flat,
            near_epsilon: NEAR_EPSILON,
            near_divisor: NEAR_DIVISOR,
            far_min: FAR_MIN,
            far_multiplier: FAR_DISTANCE_MULTIPLIER,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            key_intensity: KEY_INTENSITY,
            key_pop_boost: KEY_POP_BOOST,
            rim_intensity: RIM_INTENSITY,
            rim_pop_boost: RIM_POP_BOOST,
            exposure: EXPOSURE,
            exposure_pop_boost: EXPOSURE_POP_BOOST,
            ambient_intensity: AMBIENT_INTENSITY,
            key_radii: Vec3::from_array(KEY_RADII),
            rim_position: Vec3::from_array(RIM_POSITION),
            drift_amplitude: KEY_DRIFT_DEG.to_radians(),
            drift_period_sec: KEY_DRIFT_PERIOD_SEC,
            glint_start: GLINT_START_DEG.to_radians(),
            glint_sweep: GLINT_SWEEP_DEG.to_radians(),
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            spin_direction: SpinDirection::Clockwise,
            spin_period_sec: SPIN_PERIOD_SEC,
            intro_yaw: INTRO_YAW_DEG.to_radians(),
            intro_tilt: INTRO_TILT_DEG.to_radians(),
            intro_tilt_rate: INTRO_TILT_RATE,
            wobble: None,
        }
    }
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            period_sec: WOBBLE_PERIOD_SEC,
            bob: WOBBLE_BOB,
            tilt: WOBBLE_TILT_DEG.to_radians(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dpr_cap_desktop: DPR_CAP_DESKTOP,
            dpr_cap_mobile: DPR_CAP_MOBILE,
        }
    }
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            timeline: TimelineConfig::default(),
            camera: CameraConfig::default(),
            lights: LightConfig::default(),
            motion: MotionConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl MotionConfig {
    /// Unsigned idle spin rate.
    pub fn spin_rate(&self) -> f64 {
        TAU / self.spin_period_sec
    }
}

impl BadgeConfig {
    /// Three-quarter hero view with a slightly looser fit, for pages that
    /// show the emblem as a showcase piece rather than a flat badge.
    pub fn showcase() -> Self {
        let mut config = Self::default();
        let oblique = ViewDirection::Oblique(Vec3::from_array(OBLIQUE_DIRECTION));
        config.camera.hero_view = oblique;
        config.camera.badge_view = oblique;
        config.camera.hero_padding = SHOWCASE_PADDING;
        config.camera.badge_padding = SHOWCASE_PADDING;
        config.camera.near_epsilon = SHOWCASE_NEAR_EPSILON;
        config.camera.near_divisor = SHOWCASE_NEAR_DIVISOR;
        config
    }

    pub fn validate(&self) -> Result<(), BadgeError> {
        let l = &self.layout;
        if !(l.hero_fraction > 0.0 && l.hero_fraction <= 1.0) {
            return Err(BadgeError::config("layout.hero_fraction", "must be in (0, 1]"));
        }
        if !(l.badge_px > 0.0 && l.badge_px_small > 0.0) {
            return Err(BadgeError::config("layout.badge_px", "must be positive"));
        }
        if !(l.breakpoint_px >= 0.0 && l.offset_px >= 0.0) {
            return Err(BadgeError::config("layout.offset_px", "must not be negative"));
        }
        // Above 1/pi the lifted top would overshoot the badge.
        if !(0.0..=0.3).contains(&l.arc_bias) {
            return Err(BadgeError::config("layout.arc_bias", "must be in [0, 0.3]"));
        }

        let t = &self.timeline;
        t.phases.validate()?;
        if !(t.pop_decay_sec >= 0.0) {
            return Err(BadgeError::config("timeline.pop_decay_sec", "must not be negative"));
        }
        if !(t.max_dt_sec > 0.0) {
            return Err(BadgeError::config("timeline.max_dt_sec", "must be positive"));
        }

        let c = &self.camera;
        if !(c.fov_y_radians > 0.0 && c.fov_y_radians < std::f32::consts::PI) {
            return Err(BadgeError::config("camera.fov_y_radians", "must be in (0, pi)"));
        }
        if !(c.hero_padding > 0.0 && c.badge_padding > 0.0) {
            return Err(BadgeError::config("camera.padding", "must be positive"));
        }
        if !(c.near_epsilon > 0.0 && c.near_divisor > 0.0 && c.far_min > 0.0) {
            return Err(BadgeError::config("camera.near_far", "must be positive"));
        }
        c.hero_view.validate()?;
        c.badge_view.validate()?;

        if !(self.lights.drift_period_sec > 0.0) {
            return Err(BadgeError::config("lights.drift_period_sec", "must be positive"));
        }

        let m = &self.motion;
        if !(m.spin_period_sec > 0.0) {
            return Err(BadgeError::config("motion.spin_period_sec", "must be positive"));
        }
        if let Some(w) = &m.wobble {
            if !(w.period_sec > 0.0) {
                return Err(BadgeError::config("motion.wobble.period_sec", "must be positive"));
            }
        }

        let d = &self.display;
        if !(d.dpr_cap_desktop > 0.0 && d.dpr_cap_mobile > 0.0) {
            return Err(BadgeError::config("display.dpr_cap", "must be positive"));
        }
        Ok(())
    }
}
