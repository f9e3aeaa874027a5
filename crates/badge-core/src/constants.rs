// Default tuning for the hero-to-badge presentation.
// `BadgeConfig::default()` is assembled from these values.

// Layout (CSS pixels)
pub const HERO_FRACTION: f64 = 0.6; // hero side as a fraction of min(viewport w, h)
pub const BADGE_PX: f64 = 180.0;
pub const BADGE_PX_SMALL: f64 = 148.0; // used below SMALL_BREAKPOINT_PX
pub const SMALL_BREAKPOINT_PX: f64 = 360.0;
pub const CORNER_OFFSET_PX: f64 = 20.0;
pub const ARC_BIAS: f64 = 0.012; // peak lift as a fraction of the vertical travel

// Timeline (seconds since the asset became ready)
pub const POP_END_SEC: f64 = 0.30;
pub const TRAVEL_END_SEC: f64 = 1.60;
pub const SETTLE_END_SEC: f64 = 2.00;
pub const POP_DECAY_SEC: f64 = 0.12; // light spike falls back to baseline over this window
pub const MAX_FRAME_DT_SEC: f64 = 0.033;

// Camera
pub const FOV_DEG: f32 = 45.0;
pub const HERO_PADDING: f32 = 1.20; // tighter at start for presence
pub const BADGE_PADDING: f32 = 1.28; // extra headroom avoids cropping while spinning
pub const NEAR_EPSILON: f32 = 0.005;
pub const NEAR_DIVISOR: f32 = 2000.0;
pub const FAR_MIN: f32 = 50.0;
pub const FAR_DISTANCE_MULTIPLIER: f32 = 10.0;
pub const OBLIQUE_DIRECTION: [f32; 3] = [0.7, 0.6, 0.9];

// Lights
pub const KEY_INTENSITY: f32 = 1.9;
pub const KEY_POP_BOOST: f32 = 1.0; // peaks at ~2.9 at the end of POP
pub const RIM_INTENSITY: f32 = 1.2; // strong rim for chrome edges
pub const RIM_POP_BOOST: f32 = 0.6;
pub const EXPOSURE: f32 = 1.0;
pub const EXPOSURE_POP_BOOST: f32 = 0.12;
pub const AMBIENT_INTENSITY: f32 = 0.65;
pub const KEY_RADII: [f32; 3] = [2.6, 3.2, 2.1]; // x radius, height, z radius
pub const RIM_POSITION: [f32; 3] = [-2.0, 2.4, -2.0];
pub const KEY_DRIFT_DEG: f32 = 10.0;
pub const KEY_DRIFT_PERIOD_SEC: f64 = 8.0;
pub const GLINT_START_DEG: f32 = -12.0;
pub const GLINT_SWEEP_DEG: f32 = 32.0;

// Motion
pub const SPIN_PERIOD_SEC: f64 = 10.0; // one full turn
pub const INTRO_YAW_DEG: f32 = 90.0; // quarter turn across the intro
pub const INTRO_TILT_DEG: f32 = 1.0;
pub const INTRO_TILT_RATE: f64 = 0.8; // in multiples of pi rad/s
pub const WOBBLE_PERIOD_SEC: f64 = 4.0;
pub const WOBBLE_BOB: f32 = 0.03; // world units
pub const WOBBLE_TILT_DEG: f32 = 2.0;

// Renderer pixel-ratio caps
pub const DPR_CAP_DESKTOP: f64 = 1.75;
pub const DPR_CAP_MOBILE: f64 = 1.5;

// Showcase preset (oblique hero view)
pub const SHOWCASE_PADDING: f32 = 1.25;
pub const SHOWCASE_NEAR_EPSILON: f32 = 0.01;
pub const SHOWCASE_NEAR_DIVISOR: f32 = 1000.0;
