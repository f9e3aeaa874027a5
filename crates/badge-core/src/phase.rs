//! Intro timeline: named phases and their local progress.

use crate::easing::clamp01;
use crate::error::BadgeError;
use std::fmt;

/// Ordered phases of the presentation. `Loading` precedes the first tick
/// after the asset is ready; `Steady` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Loading,
    Pop,
    Travel,
    Settle,
    Steady,
}

impl Phase {
    #[inline]
    pub fn is_intro(self) -> bool {
        matches!(self, Phase::Pop | Phase::Travel | Phase::Settle)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Loading => "loading",
            Phase::Pop => "pop",
            Phase::Travel => "travel",
            Phase::Settle => "settle",
            Phase::Steady => "steady",
        };
        f.write_str(name)
    }
}

/// Phase boundaries in seconds since the origin:
/// POP = \[0, pop_end), TRAVEL = \[pop_end, travel_end),
/// SETTLE = \[travel_end, settle_end), STEADY = \[settle_end, inf).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSchedule {
    pub pop_end: f64,
    pub travel_end: f64,
    pub settle_end: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    pub phase: Phase,
    /// Progress through `phase` in \[0, 1\]; always 1 once steady.
    pub progress: f64,
}

impl PhaseSchedule {
    pub fn validate(&self) -> Result<(), BadgeError> {
        if !(self.pop_end > 0.0) {
            return Err(BadgeError::config("timeline.pop_end", "must be positive"));
        }
        if !(self.travel_end > self.pop_end && self.settle_end > self.travel_end) {
            return Err(BadgeError::config(
                "timeline.phases",
                "boundaries must be strictly increasing",
            ));
        }
        if !self.settle_end.is_finite() {
            return Err(BadgeError::config("timeline.settle_end", "must be finite"));
        }
        Ok(())
    }

    /// The single phase active at `elapsed`. Negative time counts as POP.
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        if elapsed >= self.settle_end {
            Phase::Steady
        } else if elapsed >= self.travel_end {
            Phase::Settle
        } else if elapsed >= self.pop_end {
            Phase::Travel
        } else {
            Phase::Pop
        }
    }

    pub fn window(&self, phase: Phase) -> Option<(f64, f64)> {
        match phase {
            Phase::Pop => Some((0.0, self.pop_end)),
            Phase::Travel => Some((self.pop_end, self.travel_end)),
            Phase::Settle => Some((self.travel_end, self.settle_end)),
            Phase::Loading | Phase::Steady => None,
        }
    }

    pub fn progress_in(&self, phase: Phase, elapsed: f64) -> f64 {
        match self.window(phase) {
            Some((start, end)) => clamp01((elapsed - start) / (end - start)),
            None if phase == Phase::Steady => 1.0,
            None => 0.0,
        }
    }

    pub fn sample(&self, elapsed: f64) -> PhaseSample {
        let phase = self.phase_at(elapsed);
        PhaseSample {
            phase,
            progress: self.progress_in(phase, elapsed),
        }
    }

    /// Progress of the box glide: 0 through POP, 0..1 across TRAVEL, then 1.
    #[inline]
    pub fn travel_progress(&self, elapsed: f64) -> f64 {
        self.progress_in(Phase::Travel, elapsed)
    }

    /// Progress across the whole intro, 0 at the origin and 1 from STEADY on.
    #[inline]
    pub fn intro_progress(&self, elapsed: f64) -> f64 {
        clamp01(elapsed / self.settle_end)
    }
}

/// Latches the current phase so it never moves backwards, even if the host
/// clock does.
#[derive(Clone, Debug)]
pub struct PhaseScheduler {
    schedule: PhaseSchedule,
    current: Phase,
}

impl PhaseScheduler {
    pub fn new(schedule: PhaseSchedule) -> Self {
        Self {
            schedule,
            current: Phase::Loading,
        }
    }

    #[inline]
    pub fn current(&self) -> Phase {
        self.current
    }

    pub fn advance(&mut self, elapsed: f64) -> PhaseSample {
        let sample = self.schedule.sample(elapsed);
        if sample.phase >= self.current {
            self.current = sample.phase;
            return sample;
        }
        PhaseSample {
            phase: self.current,
            progress: self.schedule.progress_in(self.current, elapsed),
        }
    }

    pub fn reset(&mut self) {
        self.current = Phase::Loading;
    }
}
