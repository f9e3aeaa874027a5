//! Hover pause and resize handling.

use crate::config::BadgeConfig;
use crate::error::BadgeError;
use crate::framing::{self, BoundingVolume, Framing};
use crate::layout::{self, Viewport, ViewportBox};
use crate::phase::Phase;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

/// Pause flag driven by pointer enter/leave. No debouncing: the last event
/// wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverGate {
    paused: bool,
}

impl HoverGate {
    #[inline]
    pub fn handle(&mut self, event: HoverEvent) {
        self.paused = event == HoverEvent::Enter;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Badge geometry to apply after a viewport change.
///
/// Returns `Ok(None)` while the intro runs (it recomputes both boxes every
/// tick anyway) and before the asset is ready.
pub fn react_to_resize(
    phase: Phase,
    viewport: Viewport,
    volume: &BoundingVolume,
    config: &BadgeConfig,
) -> Result<Option<(ViewportBox, Framing)>, BadgeError> {
    if phase != Phase::Steady {
        return Ok(None);
    }
    let badge = layout::badge_box(viewport, &config.layout);
    let framing = framing::frame(
        volume,
        badge.size,
        config.camera.badge_padding,
        config.camera.badge_view.vector(),
        &config.camera,
    )?;
    Ok(Some((badge, framing)))
}
