pub mod circle;
pub mod line_segment;
pub mod rect;
pub mod traits;

pub use crate::collision_system::space::Space;
pub use crate::utils::*;
pub use circle::*;
pub use line_segment::*;
pub use rand::distributions::{Distribution, Standard};
pub use rand::Rng;
pub use rect::*;
pub use traits::*;
use serde::*;

/// Every kind of shape that can take part in a collision query.
///
/// The kind of a shape never changes after creation. A `GeoSpace` is a group
/// of other shapes; it has no geometry of its own and is expanded into its
/// members by [`crate::collision_system::world::World`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Geo {
    GeoRect(Rect),
    GeoCircle(Circle),
    GeoLineSegment(LineSegment),
    GeoSpace(Space),
}

impl Geo {
    /// Pairwise overlap test between two primitives. Symmetric.
    pub fn does_collide(&self, other: &Geo) -> bool {
        match (self, other) {
            (Geo::GeoRect(r1), Geo::GeoRect(r2)) => r1.does_collide(r2),
            (Geo::GeoRect(r), Geo::GeoCircle(c)) => r.does_collide(c),
            (Geo::GeoRect(r), Geo::GeoLineSegment(ls)) => r.does_collide(ls),
            (Geo::GeoCircle(c), Geo::GeoRect(r)) => c.does_collide(r),
            (Geo::GeoCircle(c1), Geo::GeoCircle(c2)) => c1.does_collide(c2),
            (Geo::GeoCircle(c), Geo::GeoLineSegment(ls)) => c.does_collide(ls),
            (Geo::GeoLineSegment(ls), Geo::GeoRect(r)) => ls.does_collide(r),
            (Geo::GeoLineSegment(ls), Geo::GeoCircle(c)) => ls.does_collide(c),
            (Geo::GeoLineSegment(ls1), Geo::GeoLineSegment(ls2)) => ls1.does_collide(ls2),
            (Geo::GeoSpace(_), _) | (_, Geo::GeoSpace(_)) => false,
        }
    }

    pub fn is_space(&self) -> bool {
        matches!(self, Geo::GeoSpace(_))
    }

    pub fn as_space(&self) -> Option<&Space> {
        match self {
            Geo::GeoSpace(space) => Some(space),
            _ => None,
        }
    }

    /// position of a primitive, `None` for a space
    pub fn get_origin(&self) -> Option<P2> {
        match self {
            Geo::GeoRect(rect) => Some(rect.get_origin()),
            Geo::GeoCircle(circle) => Some(circle.get_origin()),
            Geo::GeoLineSegment(ls) => Some(ls.get_origin()),
            Geo::GeoSpace(_) => None,
        }
    }
}

impl Translate for Geo {
    /// a space is left as is, its members move on their own
    fn translate(&mut self, offset: &V2) {
        match self {
            Geo::GeoRect(rect) => rect.translate(offset),
            Geo::GeoCircle(circle) => circle.translate(offset),
            Geo::GeoLineSegment(ls) => ls.translate(offset),
            Geo::GeoSpace(_) => {}
        }
    }
}

impl Distribution<Geo> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Geo {
        match rng.next_u32() % 3 {
            0 => Geo::GeoRect(rng.gen()),
            1 => Geo::GeoCircle(rng.gen()),
            _ => Geo::GeoLineSegment(rng.gen()),
        }
    }
}

impl From<Rect> for Geo {
    fn from(rect: Rect) -> Self {
        Geo::GeoRect(rect)
    }
}
impl From<Circle> for Geo {
    fn from(circle: Circle) -> Self {
        Geo::GeoCircle(circle)
    }
}
impl From<LineSegment> for Geo {
    fn from(ls: LineSegment) -> Self {
        Geo::GeoLineSegment(ls)
    }
}
impl From<Space> for Geo {
    fn from(space: Space) -> Self {
        Geo::GeoSpace(space)
    }
}
