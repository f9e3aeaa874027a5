//! Key/rim light choreography.
//!
//! Every value here is a pure function of elapsed time (and the phase sample
//! derived from it), so re-evaluating a timestamp always yields the same rig.

use crate::config::{LightConfig, TimelineConfig};
use crate::phase::{Phase, PhaseSample, PhaseSchedule};
use glam::Vec3;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightState {
    pub key_intensity: f32,
    pub key_position: Vec3,
    pub rim_intensity: f32,
    pub rim_position: Vec3,
    pub ambient_intensity: f32,
    pub exposure: f32,
}

/// 0 → 1 ramp across POP, linear fall back to 0 over `decay_sec`, then 0.
pub fn pop_envelope(elapsed: f64, schedule: &PhaseSchedule, decay_sec: f64) -> f64 {
    let pop_end = schedule.pop_end;
    if elapsed < 0.0 {
        0.0
    } else if elapsed < pop_end {
        elapsed / pop_end
    } else if decay_sec > 0.0 && elapsed < pop_end + decay_sec {
        1.0 - (elapsed - pop_end) / decay_sec
    } else {
        0.0
    }
}

/// Slow perpetual swing of the key light, in radians.
#[inline]
pub fn drift_angle(elapsed: f64, cfg: &LightConfig) -> f32 {
    cfg.drift_amplitude * (TAU * elapsed / cfg.drift_period_sec).sin() as f32
}

/// Angular offset of the SETTLE glint sweep; zero outside SETTLE.
#[inline]
pub fn glint_angle(sample: PhaseSample, cfg: &LightConfig) -> f32 {
    if sample.phase == Phase::Settle {
        cfg.glint_start + sample.progress as f32 * cfg.glint_sweep
    } else {
        0.0
    }
}

#[inline]
pub fn key_position(angle: f32, cfg: &LightConfig) -> Vec3 {
    let r = cfg.key_radii;
    Vec3::new(r.x * angle.cos(), r.y, r.z * angle.sin())
}

pub fn sample(
    elapsed: f64,
    phase: PhaseSample,
    cfg: &LightConfig,
    timeline: &TimelineConfig,
) -> LightState {
    let pop = pop_envelope(elapsed, &timeline.phases, timeline.pop_decay_sec) as f32;
    let angle = drift_angle(elapsed, cfg) + glint_angle(phase, cfg);
    LightState {
        key_intensity: cfg.key_intensity + pop * cfg.key_pop_boost,
        key_position: key_position(angle, cfg),
        rim_intensity: cfg.rim_intensity + pop * cfg.rim_pop_boost,
        rim_position: cfg.rim_position,
        ambient_intensity: cfg.ambient_intensity,
        exposure: cfg.exposure + pop * cfg.exposure_pop_boost,
    }
}
