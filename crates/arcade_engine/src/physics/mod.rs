//! Physics module for collision detection
//!
//! Provides the box collider used for all entity intersection tests.

pub mod collision;

pub use collision::Aabb;
