extern crate nalgebra as na;
use na::{Point2, Vector2};

pub type Float = f64;
pub type P2 = Point2<Float>;
pub type V2 = Vector2<Float>;
pub const EPSILON: Float = 0.000_001;

pub fn between(num: Float, a: Float, b: Float) -> bool {
    (num >= a) && (num <= b)
}

/// strictly inside the open interval (a, b)
pub fn strictly_between(num: Float, a: Float, b: Float) -> bool {
    (num > a) && (num < b)
}

/// z-component of the 3d cross product of two planar vectors
pub fn cross(a: &V2, b: &V2) -> Float {
    a.x * b.y - a.y * b.x
}

/// Euclidean distance from one pair of x and y values to another.
pub fn distance(x: Float, y: Float, x2: Float, y2: Float) -> Float {
    let dx = x - x2;
    let dy = y - y2;
    Float::sqrt((dx * dx + dy * dy).abs())
}

/// +1, -1 or 0, unlike `Float::signum` which maps 0.0 to 1.0
pub fn sign(num: Float) -> Float {
    if num > 0.0 {
        1.0
    } else if num < 0.0 {
        -1.0
    } else {
        0.0
    }
}
