use super::world::ShapeId;
use crate::utils::*;
use serde::{Deserialize, Serialize};

/// Outcome of moving `shape_a` by a displacement.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Collision {
    /// the moving shape
    pub shape_a: ShapeId,
    /// the shape that blocked the movement
    pub shape_b: Option<ShapeId>,
    /// the displacement that can actually be applied
    pub resolve_x: Float,
    pub resolve_y: Float,
    /// the resolved displacement diverged abnormally from the requested one,
    /// usually because the shapes already overlapped before moving
    pub teleporting: bool,
}

impl Collision {
    /// nothing in the way, the full displacement can be applied
    pub fn free(shape_a: ShapeId, dx: Float, dy: Float) -> Collision {
        Collision {
            shape_a,
            shape_b: None,
            resolve_x: dx,
            resolve_y: dy,
            teleporting: false,
        }
    }

    /// an overlap of `shape_a` and `shape_b` at rest
    pub fn overlap(shape_a: ShapeId, shape_b: ShapeId) -> Collision {
        Collision {
            shape_a,
            shape_b: Some(shape_b),
            resolve_x: 0.0,
            resolve_y: 0.0,
            teleporting: false,
        }
    }

    pub fn colliding(&self) -> bool {
        self.shape_b.is_some()
    }

    pub fn resolve(&self) -> V2 {
        V2::new(self.resolve_x, self.resolve_y)
    }
}
