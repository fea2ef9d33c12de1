use super::*;
use serde::{Deserialize, Serialize};

/// A line segment from `a` to `b`. The segment is positioned by `a`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LineSegment {
    a: P2,
    b: P2,
}

impl LineSegment {
    pub fn new(x: Float, y: Float, x2: Float, y2: Float) -> LineSegment {
        LineSegment {
            a: P2::new(x, y),
            b: P2::new(x2, y2),
        }
    }

    pub fn from_ab(a: P2, b: P2) -> LineSegment {
        LineSegment { a, b }
    }

    pub fn get_a(&self) -> P2 {
        self.a
    }

    pub fn set_a(&mut self, a: P2) {
        self.a = a;
    }

    pub fn get_b(&self) -> P2 {
        self.b
    }

    pub fn set_b(&mut self, b: P2) {
        self.b = b;
    }

    pub fn shift(&mut self, v: V2) {
        self.a += v;
        self.b += v;
    }

    /// b - a, not normalized
    pub fn direction(&self) -> V2 {
        self.b - self.a
    }

    pub fn length(&self) -> Float {
        self.direction().norm()
    }

    pub fn length_sq(&self) -> Float {
        self.direction().norm_squared()
    }

    /// a zero length segment behaves like a point
    pub fn is_degenerate(&self) -> bool {
        self.length_sq() == 0.0
    }

    pub fn eval_at_r(&self, r: Float) -> P2 {
        self.a + r * self.direction()
    }
}

impl HasOrigin for LineSegment {
    fn get_origin(&self) -> P2 {
        self.a
    }
    fn set_origin(&mut self, origin: P2) {
        let dir = self.direction();
        self.a = origin;
        self.b = origin + dir;
    }
}

impl Translate for LineSegment {
    fn translate(&mut self, offset: &V2) {
        self.shift(*offset);
    }
}

impl Intersect<LineSegment> for LineSegment {
    type Intersection = P2;

    fn intersect(&self, other: &LineSegment) -> Option<P2> {
        let d1 = self.direction();
        let d2 = other.direction();
        let denom = cross(&d1, &d2);
        let ac = other.a - self.a;
        // parallel, collinear or degenerate
        if denom.abs() <= EPSILON * d1.norm() * d2.norm() {
            return self.collinear_overlap(other, &ac);
        }
        let r = cross(&ac, &d2) / denom;
        let s = cross(&ac, &d1) / denom;
        if strictly_between(r, 0.0, 1.0) && strictly_between(s, 0.0, 1.0) {
            Some(self.eval_at_r(r))
        } else {
            None
        }
    }
}

impl LineSegment {
    /// midpoint of the stretch two collinear segments share, if it has a
    /// positive length
    fn collinear_overlap(&self, other: &LineSegment, ac: &V2) -> Option<P2> {
        let d1 = self.direction();
        let d2 = other.direction();
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        let tolerance = EPSILON * ac.norm();
        if cross(ac, &d1).abs() > tolerance * d1.norm()
            || cross(ac, &d2).abs() > tolerance * d2.norm()
        {
            return None;
        }
        let len_sq = self.length_sq();
        let r0 = ac.dot(&d1) / len_sq;
        let r1 = (other.b - self.a).dot(&d1) / len_sq;
        let lo = r0.min(r1).max(0.0);
        let hi = r0.max(r1).min(1.0);
        if hi > lo {
            Some(self.eval_at_r((lo + hi) * 0.5))
        } else {
            None
        }
    }
}

impl Intersect<Circle> for LineSegment {
    type Intersection = P2;

    fn intersect(&self, circle: &Circle) -> Option<P2> {
        circle.intersect(self)
    }
}

impl Intersect<Rect> for LineSegment {
    type Intersection = LineSegment;

    fn intersect(&self, rect: &Rect) -> Option<LineSegment> {
        rect.intersect(self)
    }
}

impl ClosestPoint for LineSegment {
    fn closest_point_to(&self, p: &P2) -> P2 {
        let len_sq = self.length_sq();
        if len_sq == 0.0 {
            return self.a;
        }
        let r = (p - self.a).dot(&self.direction()) / len_sq;
        self.eval_at_r(r.clamp(0.0, 1.0))
    }
}

impl Distance for LineSegment {
    fn distance(&self, p: &P2) -> Float {
        (p - self.closest_point_to(p)).norm()
    }
}

impl Distribution<LineSegment> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LineSegment {
        let a = rng.gen();
        let b = rng.gen();
        LineSegment::from_ab(a, b)
    }
}
