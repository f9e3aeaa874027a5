/// Progress curves applied to the hero-to-badge travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// `1 - (1 - x)^3`: fast start, soft landing.
    #[default]
    CubicOut,
}

impl Easing {
    /// Map `x` (clamped to \[0, 1\]) through the curve. Both curves fix 0 and 1.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        let x = clamp01(x);
        match self {
            Easing::Linear => x,
            Easing::CubicOut => ease_out_cubic(x),
        }
    }
}

#[inline]
pub fn ease_out_cubic(x: f64) -> f64 {
    let inv = 1.0 - clamp01(x);
    1.0 - inv * inv * inv
}

/// Clamp to \[0, 1\]; NaN maps to 0.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
