/// Page wiring constants for the web front-end.
///
/// Tuning values for the presentation itself live in `badge_core::constants`;
/// this file only names the DOM and host hooks the widget looks for.
// Canvas the widget drives
pub const CANVAS_ID: &str = "badge-canvas";

// Global the page installs with the renderer/loader bindings
pub const HOST_GLOBAL: &str = "badgeHost";

// Asset loaded when the canvas carries no `data-model`
pub const DEFAULT_MODEL_URL: &str = "assets/emblem.glb";

// Canvas data attributes that override the default configuration
pub const ATTR_MODEL: &str = "data-model";
pub const ATTR_SPIN: &str = "data-spin"; // cw | ccw
pub const ATTR_SPIN_PERIOD: &str = "data-spin-period"; // seconds per turn
pub const ATTR_VIEW: &str = "data-view"; // flat | oblique
pub const ATTR_WOBBLE: &str = "data-wobble"; // on | off

// Longest spin period an override may ask for (seconds)
pub const MAX_SPIN_PERIOD_SEC: f64 = 600.0;
