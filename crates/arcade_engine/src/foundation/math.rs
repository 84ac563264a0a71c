//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation and the rendering
//! interface. Screen space is y-down; rotations are radians measured
//! clockwise from "up".

pub use nalgebra::{Matrix3, Point2, Rotation2, Vector2};

/// 2D vector type used for positions, sizes and per-tick velocities
pub type Vec2 = Vector2<f64>;

/// 3x3 matrix type for homogeneous 2D transforms
pub type Mat3 = Matrix3<f64>;

/// Magnitudes at or below this are treated as zero by [`normalize`]
pub const NORMALIZE_EPSILON: f64 = 1e-12;

/// Unit vector pointing the same way as `v`
///
/// Returns `None` for a zero (or vanishingly small) vector, where the
/// direction is undefined.
pub fn normalize(v: Vec2) -> Option<Vec2> {
    v.try_normalize(NORMALIZE_EPSILON)
}

/// Unit vector pointing from `from` towards `to`, `None` if the points coincide
pub fn direction(from: Vec2, to: Vec2) -> Option<Vec2> {
    normalize(to - from)
}

/// Screen-space unit vector for a rotation (0 = up, increasing clockwise)
pub fn heading(rotation: f64) -> Vec2 {
    Vec2::new(rotation.sin(), -rotation.cos())
}

/// Affine 2D transform stored as a homogeneous 3x3 matrix
///
/// Builder calls compose in application order: each call applies *after*
/// everything added so far, so `identity().translate(..).rotate(..)`
/// translates first and rotates second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    matrix: Mat3,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Mat3::identity(),
        }
    }

    /// Append a translation
    #[must_use]
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        self.matrix = Mat3::new_translation(&Vec2::new(dx, dy)) * self.matrix;
        self
    }

    /// Append a rotation about the origin
    #[must_use]
    pub fn rotate(mut self, theta: f64) -> Self {
        self.matrix = Rotation2::new(theta).to_homogeneous() * self.matrix;
        self
    }

    /// Rotate an image of size `2 * pivot` about its own center, then move
    /// its top-left corner to `position`
    pub fn rotated_about(pivot: Vec2, theta: f64, position: Vec2) -> Self {
        Self::identity()
            .translate(-pivot.x, -pivot.y)
            .rotate(theta)
            .translate(pivot.x, pivot.y)
            .translate(position.x, position.y)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        let p = self.matrix.transform_point(&Point2::new(point.x, point.y));
        Vec2::new(p.x, p.y)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }
}
