//! Asset motion: the scripted intro pose and the accumulated idle spin.

use crate::config::MotionConfig;
use crate::error::BadgeError;
use crate::phase::PhaseSchedule;
use std::f64::consts::{PI, TAU};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinDirection {
    /// Negative yaw seen from above.
    #[default]
    Clockwise,
    CounterClockwise,
}

impl SpinDirection {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Clockwise => -1.0,
            SpinDirection::CounterClockwise => 1.0,
        }
    }
}

impl FromStr for SpinDirection {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(SpinDirection::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => {
                Ok(SpinDirection::CounterClockwise)
            }
            _ => Err(BadgeError::config(
                "motion.spin_direction",
                "expected `cw` or `ccw`",
            )),
        }
    }
}

/// Rotation (radians) and vertical offset applied to the asset's pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AssetTransform {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub bob: f32,
}

/// Pose during the intro: a quarter turn in the spin direction spread over
/// the whole intro, plus a faint tilt that is held once TRAVEL ends.
pub fn intro_transform(
    elapsed: f64,
    schedule: &PhaseSchedule,
    cfg: &MotionConfig,
) -> AssetTransform {
    let sign = cfg.spin_direction.sign() as f32;
    let yaw = sign * cfg.intro_yaw * schedule.intro_progress(elapsed) as f32;
    let t = elapsed.clamp(0.0, schedule.travel_end);
    let tilt = cfg.intro_tilt * (t * PI * cfg.intro_tilt_rate).sin() as f32;
    AssetTransform {
        yaw,
        pitch: tilt * 0.3,
        roll: tilt * 0.6,
        bob: 0.0,
    }
}

/// Steady-state motion. The spin angle is integrated tick by tick, so its
/// value depends on every dt that was fed in, not on absolute time.
#[derive(Clone, Debug, Default)]
pub struct IdleMotion {
    angle: f64,
    wobble_phase: f64,
}

impl IdleMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated spin since STEADY began. Never wrapped.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn wobble_phase(&self) -> f64 {
        self.wobble_phase
    }

    /// Advance by `dt` seconds. A paused step leaves both accumulators
    /// untouched.
    pub fn step(&mut self, dt: f64, paused: bool, cfg: &MotionConfig) {
        if paused || !(dt > 0.0) {
            return;
        }
        self.angle += cfg.spin_direction.sign() * cfg.spin_rate() * dt;
        if let Some(w) = &cfg.wobble {
            self.wobble_phase = (self.wobble_phase + dt * TAU / w.period_sec).rem_euclid(TAU);
        }
    }

    /// Pivot transform, continuing from where the intro's quarter turn ended.
    pub fn transform(&self, cfg: &MotionConfig) -> AssetTransform {
        let base = cfg.spin_direction.sign() * cfg.intro_yaw as f64;
        let yaw = (base + self.angle).rem_euclid(TAU) as f32;
        let (pitch, bob) = match &cfg.wobble {
            Some(w) => {
                let s = self.wobble_phase.sin() as f32;
                (w.tilt * s, w.bob * s)
            }
            None => (0.0, 0.0),
        };
        AssetTransform {
            yaw,
            pitch,
            roll: 0.0,
            bob,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
