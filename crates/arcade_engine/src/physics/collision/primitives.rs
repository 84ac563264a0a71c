//! Primitive collision shapes and intersection tests
//!
//! Boxes live in screen space (y-down) and are anchored at their top-left
//! corner.

use crate::foundation::math::Vec2;

/// Axis-aligned bounding box in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width, never negative
    pub width: f64,
    /// Height, never negative
    pub height: f64,
}

impl Aabb {
    /// Create a box from its top-left corner and size
    ///
    /// Negative sizes are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a box from a top-left position and a size vector
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Right edge
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this box overlaps another
    ///
    /// Uses closed intervals on both axes, so boxes that only share an edge
    /// or a corner count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }

    /// Check if this box lies entirely outside `bounds` (not even touching)
    pub fn is_outside(&self, bounds: &Aabb) -> bool {
        !self.intersects(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Corner contact only
        let c = Aabb::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_gap_does_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(11.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        let below = Aabb::new(0.0, 10.5, 10.0, 10.0);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let boxes = [
            Aabb::new(0.0, 0.0, 10.0, 10.0),
            Aabb::new(5.0, 5.0, 1.0, 1.0),
            Aabb::new(-20.0, 3.0, 25.0, 2.0),
            Aabb::new(10.0, 10.0, 0.0, 0.0),
            Aabb::new(100.0, -50.0, 4.0, 400.0),
            Aabb::new(9.999, 0.0, 3.0, 3.0),
        ];

        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.intersects(b), b.intersects(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_derived_edges() {
        let b = Aabb::from_position_size(Vec2::new(2.0, 3.0), Vec2::new(10.0, 20.0));
        assert!((b.max_x() - 12.0).abs() < f64::EPSILON);
        assert!((b.max_y() - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_size_clamped() {
        let b = Aabb::new(0.0, 0.0, -5.0, 3.0);
        assert!(b.width.abs() < f64::EPSILON);
        assert!((b.height - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_outside() {
        let screen = Aabb::new(0.0, 0.0, 800.0, 600.0);
        assert!(Aabb::new(-20.0, 100.0, 9.0, 54.0).is_outside(&screen));
        assert!(!Aabb::new(-5.0, 100.0, 9.0, 54.0).is_outside(&screen));
    }
}
