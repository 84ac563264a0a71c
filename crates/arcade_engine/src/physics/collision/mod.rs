//! Collision detection primitives
//!
//! The arcade simulation only needs screen-space axis-aligned boxes:
//! entity colliders are built from a position and sprite size each tick
//! and tested pairwise.
//!
//! # Key Types
//!
//! - [`Aabb`] - Axis-aligned rectangle with closed-interval intersection

pub mod primitives;

// Re-export commonly used types
pub use primitives::Aabb;
