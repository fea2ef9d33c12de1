use super::collision::Collision;
use super::config::ResolveConfig;
use super::error::SpaceError;
use super::resolve::sweep;
use super::space::Space;
use super::tags::Tags;
use crate::geo::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Handle of a shape stored in a [`World`]. Identity, not geometry, decides
/// wether two handles refer to the same shape.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn from_index(index: usize) -> ShapeId {
        ShapeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A shape together with its tags and the caller's data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeEntry<D> {
    geo: Geo,
    tags: Tags,
    data: Option<D>,
}

impl<D> ShapeEntry<D> {
    pub fn geo(&self) -> &Geo {
        &self.geo
    }

    /// always empty for a space, its tags are the tags of its members
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }
}

/// Arena holding every shape, spaces included.
///
/// Shapes are referred to by [`ShapeId`]. Spaces hold ids rather than shapes,
/// so one shape can be grouped in many spaces and a change to it is seen by
/// all of them. `D` is whatever the caller wants to get back from a shape
/// returned by a query, typically the id of a game object.
///
/// Queries treat ids that no longer exist as empty shapes. Mutating or
/// inspecting an unknown id directly is a usage error and panics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World<D = ()> {
    entries: Vec<Option<ShapeEntry<D>>>,
    config: ResolveConfig,
}

impl<D> Default for World<D> {
    fn default() -> Self {
        World {
            entries: Vec::new(),
            config: ResolveConfig::default(),
        }
    }
}

impl<D> World<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolveConfig) -> Result<Self, SpaceError> {
        config.validate()?;
        Ok(World {
            entries: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// # Panics
    /// where [`World::try_spawn`] would return an error
    pub fn spawn<G: Into<Geo>>(&mut self, geo: G) -> ShapeId {
        match self.try_spawn(geo) {
            Ok(id) => id,
            Err(err) => panic!("{}", err),
        }
    }

    /// Stores a new shape. A populated space is stored empty first and its
    /// members are added through [`World::try_add`], so they must exist.
    pub fn try_spawn<G: Into<Geo>>(&mut self, geo: G) -> Result<ShapeId, SpaceError> {
        let (geo, members) = match geo.into() {
            Geo::GeoSpace(space) => (
                Geo::GeoSpace(Space::new()),
                space.iter().collect::<Vec<_>>(),
            ),
            geo => (geo, Vec::new()),
        };
        let id = ShapeId(self.entries.len());
        self.entries.push(Some(ShapeEntry {
            geo,
            tags: Tags::new(),
            data: None,
        }));
        if !members.is_empty() {
            if let Err(err) = self.try_add(id, &members) {
                self.entries.pop();
                return Err(err);
            }
        }
        debug!(?id, "spawned shape");
        Ok(id)
    }

    /// a new, empty space that can be nested in other spaces
    pub fn spawn_space(&mut self) -> ShapeId {
        self.spawn(Space::new())
    }

    /// Removes a shape from the world and from every space holding it.
    /// Ids are never reused.
    pub fn despawn(&mut self, id: ShapeId) -> Option<ShapeEntry<D>> {
        let entry = self.entries.get_mut(id.0)?.take()?;
        for other in self.entries.iter_mut().flatten() {
            if let Geo::GeoSpace(space) = &mut other.geo {
                space.remove(&[id]);
            }
        }
        debug!(?id, "despawned shape");
        Some(entry)
    }

    /// number of live shapes
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn exists(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeEntry<D>> {
        self.entries.get(id.0).and_then(Option::as_ref)
    }

    /// # Panics
    /// if `id` does not exist
    pub fn shape(&self, id: ShapeId) -> &ShapeEntry<D> {
        match self.get(id) {
            Some(entry) => entry,
            None => panic!("{}", SpaceError::UnknownShape { id }),
        }
    }

    fn assert_exists(&self, id: ShapeId) {
        if !self.exists(id) {
            panic!("{}", SpaceError::UnknownShape { id });
        }
    }

    fn entry_mut(&mut self, id: ShapeId) -> &mut ShapeEntry<D> {
        match self.entries.get_mut(id.0).and_then(Option::as_mut) {
            Some(entry) => entry,
            None => panic!("{}", SpaceError::UnknownShape { id }),
        }
    }

    /// # Panics
    /// if `id` does not exist or is not a space
    pub fn space(&self, id: ShapeId) -> &Space {
        match self.shape(id).geo.as_space() {
            Some(space) => space,
            None => panic!("{}", SpaceError::NotASpace { id }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ShapeEntry<D>)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(ix, entry)| entry.as_ref().map(|entry| (ShapeId(ix), entry)))
    }

    pub fn rect_mut(&mut self, id: ShapeId) -> Option<&mut Rect> {
        match &mut self.entries.get_mut(id.0)?.as_mut()?.geo {
            Geo::GeoRect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn circle_mut(&mut self, id: ShapeId) -> Option<&mut Circle> {
        match &mut self.entries.get_mut(id.0)?.as_mut()?.geo {
            Geo::GeoCircle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn line_segment_mut(&mut self, id: ShapeId) -> Option<&mut LineSegment> {
        match &mut self.entries.get_mut(id.0)?.as_mut()?.geo {
            Geo::GeoLineSegment(ls) => Some(ls),
            _ => None,
        }
    }

    /// Adds `shapes` to `space`. Shapes already in the space are skipped.
    ///
    /// Nothing is added if any of the shapes is unknown, or is `space` itself,
    /// or is a space that already contains `space` at any depth.
    pub fn try_add(&mut self, space: ShapeId, shapes: &[ShapeId]) -> Result<(), SpaceError> {
        match self.get(space) {
            None => return Err(SpaceError::UnknownShape { id: space }),
            Some(entry) if !entry.geo.is_space() => {
                return Err(SpaceError::NotASpace { id: space })
            }
            Some(_) => {}
        }
        for &shape in shapes {
            if !self.exists(shape) {
                return Err(SpaceError::UnknownShape { id: shape });
            }
            if self.reaches(shape, space) {
                return Err(SpaceError::SelfContainment { space });
            }
        }
        if let Geo::GeoSpace(members) = &mut self.entry_mut(space).geo {
            members.add(shapes);
        }
        debug!(?space, ?shapes, "added to space");
        Ok(())
    }

    /// # Panics
    /// where [`World::try_add`] would return an error, most notably when a
    /// space is added to itself
    pub fn add(&mut self, space: ShapeId, shapes: &[ShapeId]) {
        if let Err(err) = self.try_add(space, shapes) {
            panic!("{}", err);
        }
    }

    /// # Panics
    /// if `space` is not a space
    pub fn remove(&mut self, space: ShapeId, shapes: &[ShapeId]) {
        self.space_members_mut(space).remove(shapes);
        debug!(?space, ?shapes, "removed from space");
    }

    /// # Panics
    /// if `space` is not a space
    pub fn clear(&mut self, space: ShapeId) {
        self.space_members_mut(space).clear();
        debug!(?space, "cleared space");
    }

    fn space_members_mut(&mut self, id: ShapeId) -> &mut Space {
        match &mut self.entry_mut(id).geo {
            Geo::GeoSpace(space) => space,
            _ => panic!("{}", SpaceError::NotASpace { id }),
        }
    }

    /// wether `to` is `from` or nested in it at any depth
    pub(crate) fn reaches(&self, from: ShapeId, to: ShapeId) -> bool {
        let mut visited = BTreeSet::new();
        self.reaches_from(from, to, &mut visited)
    }

    fn reaches_from(&self, from: ShapeId, to: ShapeId, visited: &mut BTreeSet<ShapeId>) -> bool {
        if from == to {
            return true;
        }
        if !visited.insert(from) {
            return false;
        }
        match self.get(from).and_then(|entry| entry.geo.as_space()) {
            Some(space) => space
                .iter()
                .any(|member| self.reaches_from(member, to, visited)),
            None => false,
        }
    }

    /// the primitives making up `id`, each once, in member order
    fn leaves(&self, id: ShapeId) -> Vec<ShapeId> {
        let mut visited = BTreeSet::new();
        let mut out = Vec::new();
        self.collect_leaves(id, &mut visited, &mut out);
        out
    }

    fn collect_leaves(&self, id: ShapeId, visited: &mut BTreeSet<ShapeId>, out: &mut Vec<ShapeId>) {
        if !visited.insert(id) {
            return;
        }
        match self.get(id).map(ShapeEntry::geo) {
            Some(Geo::GeoSpace(space)) => {
                for member in space.iter() {
                    self.collect_leaves(member, visited, out);
                }
            }
            Some(_) => out.push(id),
            None => {}
        }
    }

    /// Position of a shape. For a space this is the position of its first
    /// primitive, or the origin if it holds none.
    ///
    /// # Panics
    /// if `id` does not exist
    pub fn position(&self, id: ShapeId) -> P2 {
        match self.shape(id).geo.get_origin() {
            Some(origin) => origin,
            None => self
                .leaves(id)
                .first()
                .and_then(|leaf| self.shape(*leaf).geo.get_origin())
                .unwrap_or_else(P2::origin),
        }
    }

    /// moves a shape, or every shape in a space, so that `position` becomes (x, y)
    pub fn set_xy(&mut self, id: ShapeId, x: Float, y: Float) {
        let offset = P2::new(x, y) - self.position(id);
        self.move_by(id, offset.x, offset.y);
    }

    /// # Panics
    /// if `id` does not exist
    pub fn move_by(&mut self, id: ShapeId, dx: Float, dy: Float) {
        self.assert_exists(id);
        let offset = V2::new(dx, dy);
        for leaf in self.leaves(id) {
            self.entry_mut(leaf).geo.translate(&offset);
        }
    }

    /// tags a shape, or every shape currently in a space
    ///
    /// # Panics
    /// if `id` does not exist
    pub fn add_tags(&mut self, id: ShapeId, tags: &[&str]) {
        self.assert_exists(id);
        for leaf in self.leaves(id) {
            self.entry_mut(leaf).tags.add(tags);
        }
    }

    /// # Panics
    /// if `id` does not exist
    pub fn remove_tags(&mut self, id: ShapeId, tags: &[&str]) {
        self.assert_exists(id);
        for leaf in self.leaves(id) {
            self.entry_mut(leaf).tags.remove(tags);
        }
    }

    /// wether the shape, or any shape in a space, carries any of `tags`
    pub fn has_tags(&self, id: ShapeId, tags: &[&str]) -> bool {
        self.leaves(id).iter().any(|leaf| match self.get(*leaf) {
            Some(entry) => entry.tags.has(tags),
            None => false,
        })
    }

    /// attaches `data` to a shape and returns what was attached before
    ///
    /// # Panics
    /// if `id` does not exist
    pub fn set_data(&mut self, id: ShapeId, data: D) -> Option<D> {
        self.entry_mut(id).data.replace(data)
    }

    pub fn data(&self, id: ShapeId) -> Option<&D> {
        self.get(id).and_then(ShapeEntry::data)
    }

    pub fn data_mut(&mut self, id: ShapeId) -> Option<&mut D> {
        self.entries
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .and_then(|entry| entry.data.as_mut())
    }

    pub fn take_data(&mut self, id: ShapeId) -> Option<D> {
        self.entries
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .and_then(|entry| entry.data.take())
    }

    /// Wether `a` and `b` overlap. Either side may be a space, in which case
    /// any of its members counts. A shape never collides with itself.
    pub fn is_colliding(&self, a: ShapeId, b: ShapeId) -> bool {
        self.collides(a, &V2::zeros(), b)
    }

    /// wether `a` would overlap `b` after moving by (dx, dy), `a` is not moved
    pub fn would_be_colliding(&self, a: ShapeId, b: ShapeId, dx: Float, dy: Float) -> bool {
        self.collides(a, &V2::new(dx, dy), b)
    }

    /// compares the primitives of both sides pairwise, a primitive reached
    /// from both sides is skipped
    fn collides(&self, a: ShapeId, offset: &V2, b: ShapeId) -> bool {
        if a == b {
            return false;
        }
        let leaves_b = self.leaves(b);
        if leaves_b.is_empty() {
            return false;
        }
        self.leaves(a).into_iter().any(|leaf_a| {
            let moved = match self.get(leaf_a) {
                Some(entry) => entry.geo.translated(offset),
                None => return false,
            };
            leaves_b.iter().any(|&leaf_b| {
                leaf_b != leaf_a
                    && self
                        .get(leaf_b)
                        .map_or(false, |entry| moved.does_collide(&entry.geo))
            })
        })
    }

    /// Moves `mover` by (dx, dy) against `other`, which may be a space.
    ///
    /// See [`sweep`] for how the displacement is shortened.
    #[instrument(level = "trace", skip(self))]
    pub fn resolve(&self, mover: ShapeId, other: ShapeId, dx: Float, dy: Float) -> Collision {
        sweep(mover, other, dx, dy, &self.config, |x, y| {
            self.would_be_colliding(mover, other, x, y)
        })
    }
}
