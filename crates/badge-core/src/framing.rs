//! Fit-to-box camera framing against the asset's bounding volume.

use crate::config::CameraConfig;
use crate::error::BadgeError;
use glam::{Mat4, Vec2, Vec3};

// Relative slack added to the exact-fit distance so corners land strictly
// inside the frustum rather than on its edge.
const FIT_EPSILON: f32 = 1e-4;

/// Axis-aligned bounds of the loaded asset. Fixed for the lifetime of a load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingVolume {
    min: Vec3,
    max: Vec3,
}

impl BoundingVolume {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, BadgeError> {
        if !min.is_finite() || !max.is_finite() || min.cmpgt(max).any() {
            return Err(BadgeError::InvalidVolume);
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest extent along any axis.
    #[inline]
    pub fn max_dim(&self) -> f32 {
        self.size().max_element()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// The same box moved so its center sits at the origin, matching an
    /// asset that was re-centered under a spin pivot.
    pub fn recentered(&self) -> Self {
        let c = self.center();
        Self {
            min: self.min - c,
            max: self.max - c,
        }
    }
}

/// Direction from the volume's center toward the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewDirection {
    /// Straight-on from +Z.
    Flat,
    /// Any fixed direction; normalized on use.
    Oblique(Vec3),
}

impl ViewDirection {
    pub fn vector(&self) -> Vec3 {
        match self {
            ViewDirection::Flat => Vec3::Z,
            ViewDirection::Oblique(v) => {
                let n = v.normalize_or_zero();
                if n == Vec3::ZERO {
                    Vec3::Z
                } else {
                    n
                }
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), BadgeError> {
        match self {
            ViewDirection::Oblique(v) if !v.is_finite() || v.length_squared() < 1e-12 => Err(
                BadgeError::config("camera.view", "direction must be finite and non-zero"),
            ),
            _ => Ok(()),
        }
    }
}

/// Perspective camera state written to the renderer. Always derived, never
/// edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraPose {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    pub pose: CameraPose,
    pub distance: f32,
    /// Square renderer output size to request, in pixels.
    pub output_px: u32,
}

/// Distance at which a cube of side `max_dim` fills the vertical field of
/// view, scaled by `padding`.
#[inline]
pub fn fit_distance(max_dim: f32, fov_y_radians: f32, padding: f32) -> f32 {
    (max_dim / (2.0 * (fov_y_radians * 0.5).tan())) * padding
}

/// Frame `volume` for a square of `target_px` pixels, looking at its center
/// from `direction`.
///
/// The distance is the padded fit distance unless that would let a corner of
/// the box leave the square frustum, in which case the smallest distance that
/// keeps every corner inside is used instead.
pub fn frame(
    volume: &BoundingVolume,
    target_px: f64,
    padding: f32,
    direction: Vec3,
    cfg: &CameraConfig,
) -> Result<Framing, BadgeError> {
    let max_dim = volume.max_dim();
    if !(max_dim > 0.0) {
        return Err(BadgeError::DegenerateVolume);
    }
    let dir = ViewDirection::Oblique(direction).vector();
    let up = up_for(dir);
    let tan_half = (cfg.fov_y_radians * 0.5).tan();
    let near = cfg.near_epsilon.max(max_dim / cfg.near_divisor);

    let padded = fit_distance(max_dim, cfg.fov_y_radians, padding);
    let exact = containment_distance(volume, dir, up, tan_half, near) * (1.0 + FIT_EPSILON);
    let distance = padded.max(exact);
    let far = cfg.far_min.max(distance * cfg.far_multiplier);

    let center = volume.center();
    Ok(Framing {
        pose: CameraPose {
            position: center + dir * distance,
            target: center,
            up,
            aspect: 1.0,
            fov_y_radians: cfg.fov_y_radians,
            near,
            far,
        },
        distance,
        output_px: target_px.round().max(1.0) as u32,
    })
}

/// Largest projected width or height of the volume's box, in output pixels.
pub fn projected_extent_px(volume: &BoundingVolume, framing: &Framing) -> f32 {
    let vp = framing.pose.view_projection();
    let (mut lo, mut hi) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
    for corner in volume.corners() {
        let clip = vp * corner.extend(1.0);
        let ndc = (clip.truncate() / clip.w).truncate();
        lo = lo.min(ndc);
        hi = hi.max(ndc);
    }
    let span = hi - lo;
    span.max_element() * 0.5 * framing.output_px as f32
}

/// Whether every corner of the volume lies in front of the camera and inside
/// the square frame.
pub fn contains(volume: &BoundingVolume, framing: &Framing) -> bool {
    let vp = framing.pose.view_projection();
    volume.corners().iter().all(|corner| {
        let clip = vp * corner.extend(1.0);
        if clip.w <= 0.0 {
            return false;
        }
        let ndc = (clip.truncate() / clip.w).truncate();
        ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0
    })
}

fn up_for(dir: Vec3) -> Vec3 {
    if dir.dot(Vec3::Y).abs() > 0.999 {
        Vec3::Z
    } else {
        Vec3::Y
    }
}

// Smallest camera distance at which each corner satisfies
// |lateral| <= tan_half * depth and depth >= near.
fn containment_distance(
    volume: &BoundingVolume,
    dir: Vec3,
    up: Vec3,
    tan_half: f32,
    near: f32,
) -> f32 {
    let forward = -dir;
    let right = forward.cross(up).normalize();
    let cam_up = right.cross(forward);
    let center = volume.center();
    volume
        .corners()
        .iter()
        .map(|corner| {
            let o = *corner - center;
            let toward = o.dot(dir);
            let lateral = o.dot(right).abs().max(o.dot(cam_up).abs());
            (toward + lateral / tan_half).max(toward + near)
        })
        .fold(0.0_f32, f32::max)
}
