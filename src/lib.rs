//! Collision detection and movement resolution for 2D games.
//!
//! Rectangles, circles and line segments live in a [`World`]. They can be
//! grouped into spaces, which are shapes too and nest. A moving shape is
//! resolved against a space by shortening its displacement step by step until
//! it no longer overlaps anything, see [`Space::resolve`].
pub mod collision_system;
pub mod geo;
pub mod utils;

pub use collision_system::{Collision, ResolveConfig, ShapeEntry, ShapeId, Space, SpaceError, Tags, World};
pub use geo::{Circle, Geo, LineSegment, Rect};

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
