use super::collision::Collision;
use super::world::{ShapeEntry, ShapeId, World};
use crate::utils::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An ordered collection of shape references.
///
/// A space never owns its shapes: the same shape may be part of any number of
/// spaces, and removing it from one does not destroy it. Every shape is held
/// at most once; adding a member a second time does nothing. Membership is by
/// identity, two geometrically equal shapes are still different members.
///
/// A space stored in a [`World`] is itself a shape and can be nested in other
/// spaces; its member list is then only changed through the world, which
/// rejects cycles. Spaces returned by queries such as
/// [`Space::filter_by_tags`] are detached and may be edited freely.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Space {
    shapes: Vec<ShapeId>,
}

impl Space {
    pub fn new() -> Space {
        Space::default()
    }

    pub fn add(&mut self, shapes: &[ShapeId]) {
        for shape in shapes {
            if !self.contains(*shape) {
                self.shapes.push(*shape);
            }
        }
    }

    /// non-members are ignored
    pub fn remove(&mut self, shapes: &[ShapeId]) {
        self.shapes.retain(|member| !shapes.contains(member));
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn contains(&self, shape: ShapeId) -> bool {
        self.shapes.contains(&shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ShapeId> {
        self.shapes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.shapes.iter().copied()
    }

    /// members that are neither `shape` nor part of it
    fn others<'a, D>(
        &'a self,
        world: &'a World<D>,
        shape: ShapeId,
    ) -> impl Iterator<Item = ShapeId> + 'a {
        self.iter().filter(move |member| !world.reaches(shape, *member))
    }

    /// wether `shape` overlaps any member other than itself or its own parts
    pub fn is_colliding<D>(&self, world: &World<D>, shape: ShapeId) -> bool {
        self.others(world, shape)
            .any(|member| world.is_colliding(shape, member))
    }

    /// wether `shape` moved by (dx, dy) would overlap any member other than itself
    pub fn would_be_colliding<D>(
        &self,
        world: &World<D>,
        shape: ShapeId,
        dx: Float,
        dy: Float,
    ) -> bool {
        self.others(world, shape)
            .any(|member| world.would_be_colliding(shape, member, dx, dy))
    }

    /// every member currently overlapping `target`
    pub fn get_colliding_shapes<D>(&self, world: &World<D>, target: ShapeId) -> Space {
        self.filter(world, |member, _| {
            !world.reaches(target, member) && world.is_colliding(target, member)
        })
    }

    /// one entry per member currently overlapping `target`, in member order
    pub fn collisions<D>(&self, world: &World<D>, target: ShapeId) -> Vec<Collision> {
        self.others(world, target)
            .filter(|member| world.is_colliding(target, *member))
            .map(|member| Collision::overlap(target, member))
            .collect()
    }

    /// Moves `mover` by (dx, dy) against every member of the space. Members
    /// that are `mover` or one of its parts are skipped.
    ///
    /// Members are visited in order and each one that is hit further shortens
    /// the displacement. Passes repeat until no member blocks the resolved
    /// displacement, so the result is free of all members unless the mover
    /// already overlapped one of them. The returned collision names the last
    /// member that shortened the movement.
    #[instrument(level = "trace", skip(self, world))]
    pub fn resolve<D>(&self, world: &World<D>, mover: ShapeId, dx: Float, dy: Float) -> Collision {
        let mut res = Collision::free(mover, dx, dy);
        loop {
            let mut clamped = false;
            for member in self.others(world, mover) {
                if world.would_be_colliding(mover, member, res.resolve_x, res.resolve_y) {
                    let teleporting = res.teleporting;
                    res = world.resolve(mover, member, res.resolve_x, res.resolve_y);
                    res.teleporting |= teleporting;
                    clamped = true;
                }
            }
            if !clamped || (res.resolve_x == 0.0 && res.resolve_y == 0.0) {
                break;
            }
        }
        res
    }

    /// members carrying any of `tags`
    pub fn filter_by_tags<D>(&self, world: &World<D>, tags: &[&str]) -> Space {
        self.filter(world, |member, _| world.has_tags(member, tags))
    }

    /// members carrying none of `tags`
    pub fn filter_out_by_tags<D>(&self, world: &World<D>, tags: &[&str]) -> Space {
        self.filter(world, |member, _| !world.has_tags(member, tags))
    }

    /// Members for which `predicate` holds, as a new detached space.
    /// Members that no longer exist in `world` are dropped.
    pub fn filter<D, F>(&self, world: &World<D>, mut predicate: F) -> Space
    where
        F: FnMut(ShapeId, &ShapeEntry<D>) -> bool,
    {
        Space {
            shapes: self
                .iter()
                .filter(|member| match world.get(*member) {
                    Some(entry) => predicate(*member, entry),
                    None => false,
                })
                .collect(),
        }
    }

    /// wether any member carries any of `tags`
    pub fn contains_tags<D>(&self, world: &World<D>, tags: &[&str]) -> bool {
        self.iter().any(|member| world.has_tags(member, tags))
    }
}

impl<'a> From<&'a [ShapeId]> for Space {
    fn from(shapes: &'a [ShapeId]) -> Self {
        let mut ret = Space::new();
        ret.add(shapes);
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::*;

    fn tagged(world: &mut World, geo: Geo, tags: &[&str]) -> ShapeId {
        let id = world.spawn(geo);
        world.add_tags(id, tags);
        id
    }

    #[test]
    fn detached_space_ignores_duplicates() {
        let mut world: World = World::new();
        let a = world.spawn(Rect::new(0.0, 0.0, 1.0, 1.0));
        let b = world.spawn(Rect::new(0.0, 0.0, 1.0, 1.0));
        let mut space = Space::new();
        space.add(&[a, b, a]);
        assert_eq!(space.len(), 2);
        assert_eq!(space.get(0), Some(a));
        assert_eq!(space.get(1), Some(b));
        assert_eq!(space.get(2), None);
        space.remove(&[a]);
        space.remove(&[a]);
        assert_eq!(space.iter().collect::<Vec<_>>(), vec![b]);
        space.clear();
        assert!(space.is_empty());
    }

    #[test]
    fn filter_by_tags_counts() {
        let mut world: World = World::new();
        let shapes = [
            tagged(&mut world, Rect::new(0.0, 0.0, 10.0, 10.0).into(), &["player"]),
            tagged(&mut world, Rect::new(0.0, 10.0, 10000.0, 10.0).into(), &["ground"]),
            tagged(&mut world, LineSegment::new(100.0, 0.0, 100.0, 10.0).into(), &["ground"]),
            tagged(&mut world, Circle::new(1000.0, 0.0, 5.0).into(), &["token"]),
        ];
        let space = Space::from(&shapes[..]);
        assert_eq!(space.filter_by_tags(&world, &["player"]).len(), 1);
        assert_eq!(space.filter_by_tags(&world, &["ground"]).len(), 2);
        assert_eq!(space.filter_by_tags(&world, &["token"]).len(), 1);
        assert_eq!(space.filter_by_tags(&world, &["token", "player"]).len(), 2);
        assert_eq!(space.filter_by_tags(&world, &["wall"]).len(), 0);
        assert_eq!(space.filter_out_by_tags(&world, &["ground"]).len(), 2);
        assert!(space.contains_tags(&world, &["token"]));
        assert!(!space.contains_tags(&world, &["wall"]));
    }

    #[test]
    fn filtered_space_shares_shapes_but_not_membership() {
        let mut world: World = World::new();
        let a = tagged(&mut world, Rect::new(0.0, 0.0, 10.0, 10.0).into(), &["solid"]);
        let b = tagged(&mut world, Rect::new(20.0, 0.0, 10.0, 10.0).into(), &["solid"]);
        let space = Space::from(&[a, b][..]);
        let mut solids = space.filter_by_tags(&world, &["solid"]);
        solids.remove(&[a]);
        assert!(space.contains(a));
        assert!(!solids.contains(a));

        world.set_xy(b, 5.0, 0.0);
        assert!(solids.is_colliding(&world, a));
        assert!(space.is_colliding(&world, a));
    }

    #[test]
    fn colliding_shapes_and_collisions() {
        let mut world: World = World::new();
        let b = world.spawn(Rect::new(11.0, 0.0, 10.0, 10.0));
        let c = world.spawn(Rect::new(0.0, 11.0, 10.0, 10.0));
        let space = Space::from(&[b, c][..]);
        let target = world.spawn(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(space.get_colliding_shapes(&world, target).len(), 0);
        world.set_xy(target, 2.0, 2.0);
        assert_eq!(space.get_colliding_shapes(&world, target).len(), 2);
        assert_eq!(space.collisions(&world, target).len(), 2);
    }

    #[test]
    fn identical_shapes_count_separately() {
        let mut world: World = World::new();
        let a = world.spawn(Rect::new(0.0, 11.0, 10.0, 10.0));
        let b = world.spawn(Rect::new(0.0, 11.0, 10.0, 10.0));
        let c = world.spawn(Rect::new(0.0, 11.0, 10.0, 10.0));
        let space = Space::from(&[a, b, c][..]);
        let collisions = space.collisions(&world, a);
        assert_eq!(collisions.len(), 2);
        assert_eq!(collisions[0].shape_b, Some(b));
        assert_eq!(collisions[1].shape_b, Some(c));
        assert!(collisions.iter().all(|col| col.shape_a == a));
        assert!(space.contains(b));
        let lookalike = world.spawn(Rect::new(0.0, 11.0, 10.0, 10.0));
        assert!(!space.contains(lookalike));
    }

    #[test]
    fn resolve_reports_the_blocking_member() {
        let mut world: World = World::new();
        let player = world.spawn(Rect::new(0.0, 0.0, 10.0, 10.0));
        let wall = world.spawn(Rect::new(20.0, 0.0, 10.0, 10.0));
        let floor = world.spawn(Rect::new(0.0, 20.0, 100.0, 10.0));
        let space = Space::from(&[player, wall, floor][..]);

        let res = space.resolve(&world, player, 15.0, 0.0);
        assert!(res.colliding());
        assert_eq!(res.shape_b, Some(wall));
        assert_eq!(res.resolve_x, 10.0);

        let res = space.resolve(&world, player, 0.0, 15.0);
        assert_eq!(res.shape_b, Some(floor));
        assert_eq!(res.resolve_y, 10.0);

        let res = space.resolve(&world, player, -15.0, 0.0);
        assert!(!res.colliding());
        assert_eq!(res.resolve_x, -15.0);
    }

    #[test]
    fn parts_of_the_mover_are_not_obstacles() {
        let mut world: World = World::new();
        let body = world.spawn(Rect::new(0.0, 0.0, 10.0, 10.0));
        let arm = world.spawn(Rect::new(5.0, 0.0, 10.0, 5.0));
        let player = world.spawn_space();
        world.add(player, &[body, arm]);
        let wall = world.spawn(Rect::new(30.0, 0.0, 10.0, 10.0));
        let space = Space::from(&[body, wall][..]);

        // the arm overlaps the body, which still counts between two shapes
        assert!(world.is_colliding(player, body));
        assert!(!space.is_colliding(&world, player));
        assert!(space.collisions(&world, player).is_empty());

        let res = space.resolve(&world, player, 2.0, 0.0);
        assert!(!res.colliding());
        assert_eq!(res.resolve_x, 2.0);

        let res = space.resolve(&world, player, 20.0, 0.0);
        assert_eq!(res.shape_b, Some(wall));
        assert_eq!(res.resolve_x, 15.0);
    }

    #[test]
    fn resolve_rechecks_members_visited_earlier() {
        let mut world: World = World::new();
        let player = world.spawn(Rect::new(0.0, 0.0, 2.0, 2.0));
        // the full move passes the post, the wall pushes the mover back onto it
        let post = world.spawn(Rect::new(7.5, 0.0, 1.0, 2.0));
        let wall = world.spawn(Rect::new(10.0, -5.0, 10.0, 10.0));
        let space = Space::from(&[player, post, wall][..]);

        let res = space.resolve(&world, player, 9.0, 0.0);
        assert!(res.colliding());
        assert_eq!(res.shape_b, Some(post));
        assert_eq!(res.resolve_x, 5.0);
        assert!(!space.resolve(&world, player, res.resolve_x, res.resolve_y).colliding());
    }
}
