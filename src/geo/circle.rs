use super::*;
use serde::{Deserialize, Serialize};

/// Circle positioned by its center.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Circle {
    pub origin: P2,
    pub radius: Float,
}

impl Circle {
    pub fn new(x: Float, y: Float, radius: Float) -> Circle {
        Circle {
            origin: P2::new(x, y),
            radius: radius.abs(),
        }
    }
}

impl Intersect<Circle> for Circle {
    /// distance between the centers
    type Intersection = Float;

    fn intersect(&self, other: &Circle) -> Option<Float> {
        let dist = (self.origin - other.origin).norm();
        if dist < (self.radius + other.radius) {
            Some(dist)
        } else {
            None
        }
    }
}

impl Intersect<LineSegment> for Circle {
    /// the point of the segment closest to the center
    type Intersection = P2;

    fn intersect(&self, ls: &LineSegment) -> Option<P2> {
        let closest = ls.closest_point_to(&self.origin);
        if (self.origin - closest).norm_squared() < self.radius.powi(2) {
            Some(closest)
        } else {
            None
        }
    }
}

impl Intersect<Rect> for Circle {
    type Intersection = P2;

    fn intersect(&self, rect: &Rect) -> Option<P2> {
        rect.intersect(self)
    }
}

impl HasOrigin for Circle {
    fn get_origin(&self) -> P2 {
        self.origin
    }
    fn set_origin(&mut self, origin: P2) {
        self.origin = origin;
    }
}

impl Translate for Circle {
    fn translate(&mut self, offset: &V2) {
        self.origin += *offset;
    }
}

impl Contains for Circle {
    fn contains(&self, p: &P2) -> bool {
        (self.origin - p).norm() < self.radius
    }
}

impl ClosestPoint for Circle {
    /// closest point on the circumference
    fn closest_point_to(&self, p: &P2) -> P2 {
        let co = p - self.origin;
        let len = co.norm();
        if len == 0.0 {
            return self.origin + V2::new(self.radius, 0.0);
        }
        self.origin + co * (self.radius / len)
    }
}

impl Distance for Circle {
    fn distance(&self, p: &P2) -> Float {
        (self.origin - p).norm() - self.radius
    }
}

impl Distribution<Circle> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Circle {
        Circle {
            origin: rng.gen(),
            radius: rng.gen(),
        }
    }
}
