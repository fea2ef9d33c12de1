use super::*;

pub trait HasOrigin {
    fn get_origin(&self) -> P2;
    fn set_origin(&mut self, origin: P2);
}

impl HasOrigin for P2 {
    fn get_origin(&self) -> P2 {
        *self
    }
    fn set_origin(&mut self, origin: P2) {
        self.x = origin.x;
        self.y = origin.y;
    }
}

/// rigid translation, geometry other than the position is left untouched
pub trait Translate
where
    Self: Sized + Clone,
{
    fn translate(&mut self, offset: &V2);
    fn translated(&self, offset: &V2) -> Self {
        let mut ret = self.clone();
        ret.translate(offset);
        ret
    }
}

impl Translate for P2 {
    fn translate(&mut self, offset: &V2) {
        *self += *offset;
    }
}

/// wether a shape contains a point, points on the boundary are not contained
pub trait Contains {
    fn contains(&self, p: &P2) -> bool;
}

/// trait for distances between Points and other primitives,
/// negative if the point lies inside the primitive
pub trait Distance {
    fn distance(&self, p: &P2) -> Float;
}

/// trait to calculate the closest point of an object to a given point
pub trait ClosestPoint {
    fn closest_point_to(&self, p: &P2) -> P2;
}

impl ClosestPoint for P2 {
    fn closest_point_to(&self, _p: &P2) -> P2 {
        *self
    }
}

/// Overlap tests between two primitives.
///
/// Shapes that merely touch do not intersect.
pub trait Intersect<T> {
    type Intersection;

    fn intersect(&self, other: &T) -> Option<Self::Intersection>;

    fn does_collide(&self, other: &T) -> bool {
        self.intersect(other).is_some()
    }
}
