use super::collision::Collision;
use super::config::ResolveConfig;
use super::world::ShapeId;
use crate::utils::*;
use tracing::{debug, trace};

/// Finds how far `shape_a` can move along (dx, dy) before it runs into `shape_b`.
///
/// `would_collide(x, y)` answers wether `shape_a` displaced by (x, y) overlaps
/// `shape_b`. Starting at the full displacement, the dominant axis is shortened
/// by `config.step` per iteration and the other axis proportionally, so the
/// direction of travel is kept. The walk stops at the first free displacement
/// or at (0, 0). The result never exceeds the requested displacement on
/// either axis.
pub fn sweep<F>(
    shape_a: ShapeId,
    shape_b: ShapeId,
    dx: Float,
    dy: Float,
    config: &ResolveConfig,
    mut would_collide: F,
) -> Collision
where
    F: FnMut(Float, Float) -> bool,
{
    let mut out = Collision::free(shape_a, dx, dy);

    if dx == 0.0 && dy == 0.0 {
        return out;
    }

    if !dx.is_finite() || !dy.is_finite() {
        debug!(?shape_a, dx, dy, "refusing to resolve a non-finite displacement");
        out.resolve_x = 0.0;
        out.resolve_y = 0.0;
        out.teleporting = true;
        return out;
    }

    let prime_x = dx.abs() >= dy.abs();
    let major = if prime_x { dx.abs() } else { dy.abs() };

    let mut steps_taken: u64 = 0;
    loop {
        let remaining = (major - steps_taken as Float * config.step).max(0.0);
        let scale = remaining / major;
        let (x, y) = if prime_x {
            (sign(dx) * remaining, dy * scale)
        } else {
            (dx * scale, sign(dy) * remaining)
        };
        out.resolve_x = x;
        out.resolve_y = y;

        if !would_collide(x, y) {
            break;
        }

        out.shape_b = Some(shape_b);

        if remaining == 0.0 {
            // overlapping before moving at all
            out.teleporting = true;
            break;
        }
        steps_taken += 1;
    }

    if (dx - out.resolve_x).abs() > (dx * config.teleport_threshold).abs()
        || (dy - out.resolve_y).abs() > (dy * config.teleport_threshold).abs()
    {
        out.teleporting = true;
    }

    if out.teleporting {
        debug!(?shape_a, ?shape_b, dx, dy, "resolution flagged as teleporting");
    }
    trace!(
        ?shape_a,
        ?shape_b,
        dx,
        dy,
        resolve_x = out.resolve_x,
        resolve_y = out.resolve_y,
        colliding = out.colliding(),
        "swept"
    );

    out
}
