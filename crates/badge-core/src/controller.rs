//! The presentation controller: one object holding every piece of mutable
//! animation state, driven by a per-frame `tick`.

use crate::clock::Clock;
use crate::config::{BadgeConfig, CameraConfig};
use crate::easing::lerp;
use crate::error::BadgeError;
use crate::framing::{self, BoundingVolume};
use crate::idle::{self, AssetTransform, IdleMotion};
use crate::interaction::{self, HoverEvent, HoverGate};
use crate::layout::{self, Viewport, ViewportBox};
use crate::lighting::{self, LightState};
use crate::phase::{Phase, PhaseScheduler};
use crate::stage::Stage;
use glam::Vec3;

/// Whether the asset is usable. Only `Ready` lets ticks through.
#[derive(Clone, Copy, Debug)]
enum AssetGate {
    Pending,
    Ready(BoundingVolume),
    Failed,
}

/// What one tick wrote to the stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub phase: Phase,
    pub elapsed: f64,
    pub dt: f64,
    pub layout: ViewportBox,
    pub lights: LightState,
    pub transform: AssetTransform,
}

pub struct PresentationController {
    config: BadgeConfig,
    gate: AssetGate,
    clock: Clock,
    scheduler: PhaseScheduler,
    idle: IdleMotion,
    hover: HoverGate,
    layout: Option<ViewportBox>,
}

impl PresentationController {
    pub fn new(config: BadgeConfig) -> Result<Self, BadgeError> {
        config.validate()?;
        Ok(Self {
            clock: Clock::new(config.timeline.max_dt_sec),
            scheduler: PhaseScheduler::new(config.timeline.phases),
            gate: AssetGate::Pending,
            idle: IdleMotion::new(),
            hover: HoverGate::default(),
            layout: None,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.scheduler.current()
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.gate, AssetGate::Ready(_))
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.gate, AssetGate::Failed)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.hover.is_paused()
    }

    /// Accumulated idle spin (radians) since STEADY began.
    #[inline]
    pub fn idle_angle(&self) -> f64 {
        self.idle.angle()
    }

    /// Last box written to the canvas.
    #[inline]
    pub fn layout(&self) -> Option<ViewportBox> {
        self.layout
    }

    pub fn volume(&self) -> Option<BoundingVolume> {
        match self.gate {
            AssetGate::Ready(volume) => Some(volume),
            _ => None,
        }
    }

    /// Hand over a loaded asset. Lays the canvas out as the hero box and
    /// frames the camera for it; the clock starts on the next tick.
    pub fn attach<S: Stage>(&mut self, volume: BoundingVolume, viewport: Viewport, stage: &mut S) {
        if self.is_failed() {
            log::warn!("[load] ignoring attach after a failed load");
            return;
        }
        self.reset_timeline();
        self.gate = AssetGate::Ready(volume);

        let hero = layout::hero_box(viewport, &self.config.layout);
        self.write_layout(hero, stage);
        let cam = &self.config.camera;
        apply_framing(
            &volume,
            hero.size,
            cam.hero_padding,
            cam.hero_view.vector(),
            cam,
            stage,
        );
        log::info!(
            "[load] attached: bounds {:?}..{:?}, hero box {}px",
            volume.min().to_array(),
            volume.max().to_array(),
            hero.size
        );
    }

    /// Drop the asset and all timeline state. Later ticks are no-ops until
    /// the next `attach`.
    pub fn detach(&mut self) {
        if self.is_failed() {
            return;
        }
        self.gate = AssetGate::Pending;
        self.reset_timeline();
    }

    /// Record a load failure. Reported once; the controller stays inert.
    pub fn fail_load(&mut self, error: BadgeError) {
        if self.is_failed() {
            return;
        }
        log::error!("[load] {}", error);
        self.gate = AssetGate::Failed;
        self.reset_timeline();
    }

    pub fn pointer(&mut self, event: HoverEvent) {
        self.hover.handle(event);
        log::debug!("[hover] {:?}", event);
    }

    /// React to a viewport change. Only STEADY has anything to redo; returns
    /// whether the badge was re-laid out.
    pub fn resize<S: Stage>(&mut self, viewport: Viewport, stage: &mut S) -> bool {
        match self.gate {
            AssetGate::Ready(volume) => self.reframe_badge(&volume, viewport, stage),
            _ => false,
        }
    }

    /// Advance one frame. `now_ms` is the host's frame timestamp.
    ///
    /// Geometry (box and camera) is always written before lights, the asset
    /// transform and the final `render`.
    pub fn tick<S: Stage>(
        &mut self,
        now_ms: f64,
        viewport: Viewport,
        stage: &mut S,
    ) -> Option<FrameReport> {
        let volume = match self.gate {
            AssetGate::Ready(volume) => volume,
            _ => return None,
        };
        let time = self.clock.tick(now_ms);
        let previous = self.scheduler.current();
        let sample = self.scheduler.advance(time.elapsed);
        if sample.phase != previous {
            log::info!(
                "[phase] {} -> {} at {:.2}s",
                previous,
                sample.phase,
                time.elapsed
            );
        }

        let transform = if sample.phase.is_intro() {
            self.step_intro(time.elapsed, viewport, &volume, stage);
            idle::intro_transform(
                time.elapsed,
                &self.config.timeline.phases,
                &self.config.motion,
            )
        } else {
            if previous != Phase::Steady {
                // Landing tick: lock the badge, spin starts next frame.
                self.reframe_badge(&volume, viewport, stage);
            } else {
                let target = layout::badge_size(viewport, &self.config.layout);
                let drifted = self
                    .layout
                    .map_or(true, |current| (current.size - target).abs() > 1.0);
                if drifted {
                    self.reframe_badge(&volume, viewport, stage);
                }
                self.idle
                    .step(time.dt, self.hover.is_paused(), &self.config.motion);
            }
            self.idle.transform(&self.config.motion)
        };

        let lights = lighting::sample(
            time.elapsed,
            sample,
            &self.config.lights,
            &self.config.timeline,
        );
        stage.apply_lights(&lights);
        stage.apply_asset_transform(&transform);
        stage.render();

        let layout = self
            .layout
            .unwrap_or_else(|| layout::badge_box(viewport, &self.config.layout));
        Some(FrameReport {
            phase: sample.phase,
            elapsed: time.elapsed,
            dt: time.dt,
            layout,
            lights,
            transform,
        })
    }

    fn step_intro<S: Stage>(
        &mut self,
        elapsed: f64,
        viewport: Viewport,
        volume: &BoundingVolume,
        stage: &mut S,
    ) {
        let progress = self.config.timeline.phases.travel_progress(elapsed);
        let current = layout::interpolate(viewport, progress, &self.config.layout);
        self.write_layout(current, stage);

        // Padding and view direction glide along with the box so the landing
        // tick does not snap the framing.
        let cam = &self.config.camera;
        let e = self.config.layout.easing.apply(progress);
        let padding = lerp(cam.hero_padding as f64, cam.badge_padding as f64, e) as f32;
        let direction: Vec3 = cam
            .hero_view
            .vector()
            .lerp(cam.badge_view.vector(), e as f32);
        apply_framing(volume, current.size, padding, direction, cam, stage);
    }

    fn reframe_badge<S: Stage>(
        &mut self,
        volume: &BoundingVolume,
        viewport: Viewport,
        stage: &mut S,
    ) -> bool {
        match interaction::react_to_resize(self.phase(), viewport, volume, &self.config) {
            Ok(Some((badge, framing))) => {
                self.write_layout(badge, stage);
                stage.set_output_size(framing.output_px);
                stage.apply_camera(&framing.pose);
                log::debug!("[resize] badge {}px", badge.size);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("[resize] keeping previous camera: {}", e);
                false
            }
        }
    }

    fn write_layout<S: Stage>(&mut self, layout: ViewportBox, stage: &mut S) {
        stage.set_canvas_box(layout);
        self.layout = Some(layout);
    }

    fn reset_timeline(&mut self) {
        self.clock.reset();
        self.scheduler.reset();
        self.idle.reset();
        self.layout = None;
    }
}

fn apply_framing<S: Stage>(
    volume: &BoundingVolume,
    size: f64,
    padding: f32,
    direction: Vec3,
    cfg: &CameraConfig,
    stage: &mut S,
) {
    match framing::frame(volume, size, padding, direction, cfg) {
        Ok(framing) => {
            stage.set_output_size(framing.output_px);
            stage.apply_camera(&framing.pose);
        }
        Err(e) => log::warn!("[frame] keeping previous camera: {}", e),
    }
}
