use super::*;
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle. `origin` is the top left corner, y grows downwards.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub origin: P2,
    pub width: Float,
    pub height: Float,
}

pub type RectPoints = [P2; 4];

pub type RectLineSegments = [LineSegment; 4];

impl Rect {
    pub fn new(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect {
            origin: P2::new(x, y),
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn left(&self) -> Float {
        self.origin.x
    }

    pub fn right(&self) -> Float {
        self.origin.x + self.width
    }

    pub fn top(&self) -> Float {
        self.origin.y
    }

    pub fn bottom(&self) -> Float {
        self.origin.y + self.height
    }

    pub fn center(&self) -> P2 {
        P2::new(
            self.origin.x + self.width * 0.5,
            self.origin.y + self.height * 0.5,
        )
    }

    /// clockwise, starting at the top left corner
    pub fn points(&self) -> RectPoints {
        [
            P2::new(self.left(), self.top()),
            P2::new(self.right(), self.top()),
            P2::new(self.right(), self.bottom()),
            P2::new(self.left(), self.bottom()),
        ]
    }

    pub fn line_segments(&self) -> RectLineSegments {
        let [a, b, c, d] = self.points();
        [
            LineSegment::from_ab(a, b),
            LineSegment::from_ab(b, c),
            LineSegment::from_ab(c, d),
            LineSegment::from_ab(d, a),
        ]
    }

    /// clamps p into the closed rectangle
    fn clamp(&self, p: &P2) -> P2 {
        P2::new(
            p.x.max(self.left()).min(self.right()),
            p.y.max(self.top()).min(self.bottom()),
        )
    }
}

impl Intersect<Rect> for Rect {
    /// the overlapping region
    type Intersection = Rect;

    fn intersect(&self, other: &Rect) -> Option<Rect> {
        if self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
        {
            let left = self.left().max(other.left());
            let top = self.top().max(other.top());
            Some(Rect::new(
                left,
                top,
                self.right().min(other.right()) - left,
                self.bottom().min(other.bottom()) - top,
            ))
        } else {
            None
        }
    }
}

impl Intersect<Circle> for Rect {
    /// the point of the rectangle closest to the circle's center
    type Intersection = P2;

    fn intersect(&self, circle: &Circle) -> Option<P2> {
        if self.contains(&circle.origin) {
            return Some(circle.origin);
        }
        let closest = self.clamp(&circle.origin);
        if (circle.origin - closest).norm_squared() < circle.radius.powi(2) {
            Some(closest)
        } else {
            None
        }
    }
}

impl Intersect<LineSegment> for Rect {
    /// the part of the segment that lies inside the rectangle
    type Intersection = LineSegment;

    fn intersect(&self, ls: &LineSegment) -> Option<LineSegment> {
        // Liang-Barsky clipping against the closed rectangle
        let a = ls.get_a();
        let d = ls.direction();
        let mut r0: Float = 0.0;
        let mut r1: Float = 1.0;
        let boundaries = [
            (-d.x, a.x - self.left()),
            (d.x, self.right() - a.x),
            (-d.y, a.y - self.top()),
            (d.y, self.bottom() - a.y),
        ];
        for &(p, q) in boundaries.iter() {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    r0 = r0.max(r);
                } else {
                    r1 = r1.min(r);
                }
                if r0 > r1 {
                    return None;
                }
            }
        }
        let clipped = LineSegment::from_ab(ls.eval_at_r(r0), ls.eval_at_r(r1));
        // a segment running along an edge is clipped but only touches
        if self.contains(&clipped.eval_at_r(0.5)) {
            Some(clipped)
        } else {
            None
        }
    }
}

impl HasOrigin for Rect {
    fn get_origin(&self) -> P2 {
        self.origin
    }
    fn set_origin(&mut self, origin: P2) {
        self.origin = origin;
    }
}

impl Translate for Rect {
    fn translate(&mut self, offset: &V2) {
        self.origin += *offset;
    }
}

impl Contains for Rect {
    fn contains(&self, p: &P2) -> bool {
        strictly_between(p.x, self.left(), self.right())
            && strictly_between(p.y, self.top(), self.bottom())
    }
}

impl ClosestPoint for Rect {
    /// closest point on the border
    fn closest_point_to(&self, p: &P2) -> P2 {
        let segments = self.line_segments();
        let mut ret = segments[0].closest_point_to(p);
        for candidate in segments[1..].iter().map(|ls| ls.closest_point_to(p)) {
            if (p - candidate).norm() < (p - ret).norm() {
                ret = candidate;
            }
        }
        ret
    }
}

impl Distance for Rect {
    fn distance(&self, p: &P2) -> Float {
        let border_dist = (p - self.closest_point_to(p)).norm();
        if self.contains(p) {
            -border_dist
        } else {
            border_dist
        }
    }
}

impl Distribution<Rect> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rect {
        Rect {
            origin: rng.gen(),
            width: rng.gen(),
            height: rng.gen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert!(b.does_collide(&a));
    }

    #[test]
    fn adjacent_rects_only_touch() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.does_collide(&right));
        assert!(!a.does_collide(&below));
    }

    #[test]
    fn zero_sized_rects_behave_like_points() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inside = Rect::new(5.0, 5.0, 0.0, 0.0);
        let on_edge = Rect::new(10.0, 5.0, 0.0, 0.0);
        assert!(a.does_collide(&inside));
        assert!(inside.does_collide(&a));
        assert!(!a.does_collide(&on_edge));
        assert!(!inside.does_collide(&inside));
    }

    #[test]
    fn negative_sizes_are_made_positive() {
        let r = Rect::new(1.0, 2.0, -3.0, -4.0);
        assert_eq!(r.width, 3.0);
        assert_eq!(r.height, 4.0);
        assert_eq!(r.center(), P2::new(2.5, 4.0));
    }

    #[test]
    fn rect_circle() {
        let r = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(r.does_collide(&Circle::new(7.0, 2.0, 2.5)));
        assert!(!r.does_collide(&Circle::new(7.0, 2.0, 2.0)));
        // corner distance is 5 * sqrt(2)
        assert!(!r.does_collide(&Circle::new(10.0, 10.0, 5.0)));
        assert!(r.does_collide(&Circle::new(8.0, 8.0, 5.0)));
        // circle completely inside
        assert_eq!(r.intersect(&Circle::new(2.0, 2.0, 0.5)), Some(P2::new(2.0, 2.0)));
    }

    #[test]
    fn rect_segment_clipping() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let through = LineSegment::new(-5.0, 5.0, 15.0, 5.0);
        let clipped = r.intersect(&through).unwrap();
        assert!((clipped.get_a() - P2::new(0.0, 5.0)).norm() < EPSILON);
        assert!((clipped.get_b() - P2::new(10.0, 5.0)).norm() < EPSILON);

        let inside = LineSegment::new(2.0, 2.0, 3.0, 3.0);
        assert!(r.does_collide(&inside));

        let diagonal_through_corners = LineSegment::new(-1.0, -1.0, 11.0, 11.0);
        assert!(r.does_collide(&diagonal_through_corners));
    }

    #[test]
    fn rect_segment_touching() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let along_edge = LineSegment::new(0.0, 0.0, 10.0, 0.0);
        let ending_on_edge = LineSegment::new(10.0, 5.0, 20.0, 5.0);
        let outside = LineSegment::new(11.0, 0.0, 11.0, 10.0);
        let point_inside = LineSegment::new(5.0, 5.0, 5.0, 5.0);
        let point_on_edge = LineSegment::new(10.0, 5.0, 10.0, 5.0);
        assert!(!r.does_collide(&along_edge));
        assert!(!r.does_collide(&ending_on_edge));
        assert!(!r.does_collide(&outside));
        assert!(r.does_collide(&point_inside));
        assert!(!r.does_collide(&point_on_edge));
    }

    #[test]
    fn signed_distance() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!((r.distance(&P2::new(13.0, 14.0)) - 5.0).abs() < EPSILON);
        assert!((r.distance(&P2::new(2.0, 5.0)) + 2.0).abs() < EPSILON);
    }
}
