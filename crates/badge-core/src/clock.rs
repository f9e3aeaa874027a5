/// Time values handed to the rest of the controller for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the origin.
    pub elapsed: f64,
    /// Seconds since the previous tick, clamped to `[0, max_dt]`.
    pub dt: f64,
}

/// Maps host timestamps (milliseconds, as passed to `requestAnimationFrame`)
/// onto a single origin.
///
/// The origin is taken from the first tick; later ticks only move the
/// previous-timestamp marker used for the dt clamp.
#[derive(Clone, Debug)]
pub struct Clock {
    origin_ms: Option<f64>,
    last_ms: Option<f64>,
    max_dt: f64,
}

impl Clock {
    pub fn new(max_dt: f64) -> Self {
        Self {
            origin_ms: None,
            last_ms: None,
            max_dt,
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.origin_ms.is_some()
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        let last = self.last_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = (now_ms - last) / 1000.0;
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        let elapsed = ((now_ms - origin) / 1000.0).max(0.0);
        FrameTime { elapsed, dt }
    }

    pub fn reset(&mut self) {
        self.origin_ms = None;
        self.last_ms = None;
    }
}
