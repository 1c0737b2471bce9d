//! SpatialIndex - owning handle over an [`Octree`] with a fixed world volume.
//!
//! The index validates insert positions against the world box, then hands
//! them to the tree. Lookups return [`CellRef`], a borrowed view of one cell
//! that carries the tree along so neighbor queries can be chained.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use glam::DVec3;

use crate::error::{IndexError, Result};
use crate::octree::{
  Bounds, CellId, Direction, Edge, Face, IndexConfig, IndexStats, Item, Octant, Octree,
  OutOfBoundsPolicy, TreeDump, Vertex,
};

/// Point-bucket spatial index over `[0,width] x [0,breadth] x [0,height]`.
///
/// Stores payload handles of type `T` (typically a reference, id or `Rc`);
/// the index never inspects them. Cells only ever split, so every
/// [`CellId`] handed out stays valid for the lifetime of the index.
#[derive(Clone, Debug)]
pub struct SpatialIndex<T> {
  tree: Octree<T>,
  bounds: Bounds,
}

impl<T> SpatialIndex<T> {
  /// Index over the box from the origin to `(width, breadth, height)` with
  /// the default [`IndexConfig`].
  pub fn new(width: f64, breadth: f64, height: f64) -> Result<Self> {
    Self::with_config(DVec3::new(width, breadth, height), IndexConfig::default())
  }

  /// Index over the box from the origin to `extents`.
  pub fn with_config(extents: DVec3, config: IndexConfig) -> Result<Self> {
    if !extents.is_finite() || extents.min_element() <= 0.0 {
      return Err(IndexError::InvalidExtents(extents));
    }
    config.validate()?;

    let bounds = Bounds::from_extents(extents);
    Ok(Self {
      tree: Octree::new(bounds, config),
      bounds,
    })
  }

  /// Store `payload` at `(x, y, z)`. Returns the leaf that holds it.
  ///
  /// Positions outside the world box are rejected or clamped according to
  /// [`IndexConfig::out_of_bounds`]; non-finite positions are always
  /// rejected.
  #[inline]
  pub fn insert(&mut self, payload: T, x: f64, y: f64, z: f64) -> Result<CellId> {
    self.insert_at(payload, DVec3::new(x, y, z))
  }

  /// [`insert`](Self::insert) taking the position as a vector.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "index::insert"))]
  pub fn insert_at(&mut self, payload: T, position: DVec3) -> Result<CellId> {
    if !position.is_finite() {
      return Err(IndexError::NonFinitePosition(position));
    }

    let position = if self.bounds.contains_point(position) {
      position
    } else {
      match self.tree.config().out_of_bounds {
        OutOfBoundsPolicy::Reject => {
          return Err(IndexError::OutOfBounds {
            position,
            min: self.bounds.min,
            max: self.bounds.max,
          });
        }
        OutOfBoundsPolicy::Clamp => self.bounds.clamp_point(position),
      }
    };

    Ok(self.tree.insert(Item { position, payload }))
  }

  /// Leaf that currently owns `(x, y, z)`.
  #[inline]
  pub fn find_node(&self, x: f64, y: f64, z: f64) -> CellRef<'_, T> {
    self.find_node_at(DVec3::new(x, y, z))
  }

  /// Leaf that currently owns `point`.
  ///
  /// Never fails. Points outside the world box are not clamped; they follow
  /// the same per-axis center comparisons and end up in a boundary leaf.
  pub fn find_node_at(&self, point: DVec3) -> CellRef<'_, T> {
    CellRef::new(&self.tree, self.tree.find_leaf(point))
  }

  #[inline]
  pub fn root(&self) -> CellRef<'_, T> {
    CellRef::new(&self.tree, CellId::ROOT)
  }

  /// View of cell `id`, `None` if this index never issued it.
  pub fn cell(&self, id: CellId) -> Option<CellRef<'_, T>> {
    self.tree.get(id).map(|_| CellRef::new(&self.tree, id))
  }

  /// Number of stored items.
  #[inline]
  pub fn len(&self) -> usize {
    self.tree.stats().items
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// World box, closed on both ends.
  #[inline]
  pub fn bounds(&self) -> Bounds {
    self.bounds
  }

  #[inline]
  pub fn config(&self) -> &IndexConfig {
    self.tree.config()
  }

  #[inline]
  pub fn stats(&self) -> IndexStats {
    self.tree.stats()
  }

  /// Underlying arena tree.
  #[inline]
  pub fn tree(&self) -> &Octree<T> {
    &self.tree
  }

  /// Every current leaf in allocation order.
  pub fn leaves(&self) -> impl Iterator<Item = CellRef<'_, T>> + '_ {
    self
      .tree
      .leaves()
      .map(move |(id, _)| CellRef::new(&self.tree, id))
  }

  /// Every stored item, grouped by leaf.
  pub fn items(&self) -> impl Iterator<Item = &Item<T>> + '_ {
    self.tree.leaves().flat_map(|(_, cell)| cell.items())
  }

  /// Depth-indented listing of the tree. Debug output, not a stable format.
  #[inline]
  pub fn dump(&self) -> TreeDump<'_, T> {
    self.tree.dump()
  }
}

/// Borrowed view of one cell of a [`SpatialIndex`].
///
/// Two refs are equal when they point at the same cell of the same tree.
pub struct CellRef<'a, T> {
  tree: &'a Octree<T>,
  id: CellId,
}

impl<'a, T> CellRef<'a, T> {
  #[inline]
  fn new(tree: &'a Octree<T>, id: CellId) -> Self {
    Self { tree, id }
  }

  #[inline]
  fn at(&self, id: CellId) -> Self {
    Self::new(self.tree, id)
  }

  #[inline]
  pub fn id(&self) -> CellId {
    self.id
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    self.tree.cell(self.id).center()
  }

  /// Full edge lengths of the cell.
  #[inline]
  pub fn extents(&self) -> DVec3 {
    self.tree.cell(self.id).extents()
  }

  #[inline]
  pub fn bounds(&self) -> Bounds {
    self.tree.cell(self.id).bounds()
  }

  /// 0 for the root.
  #[inline]
  pub fn depth(&self) -> u32 {
    self.tree.cell(self.id).depth()
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.tree.cell(self.id).is_leaf()
  }

  /// Bucket contents; empty for internal cells.
  #[inline]
  pub fn items(&self) -> &'a [Item<T>] {
    self.tree.cell(self.id).items()
  }

  /// Position among the parent's children, `None` for the root.
  pub fn octant(&self) -> Result<Option<Octant>> {
    self.tree.octant_of(self.id)
  }

  pub fn parent(&self) -> Option<Self> {
    self.tree.cell(self.id).parent().map(|id| self.at(id))
  }

  /// Child in `octant`, `None` for leaves.
  pub fn child(&self, octant: Octant) -> Option<Self> {
    self.tree.cell(self.id).child(octant).map(|id| self.at(id))
  }

  /// The eight children in octant order, `None` for leaves.
  pub fn children(&self) -> Option<[Self; 8]> {
    self
      .tree
      .cell(self.id)
      .children()
      .map(|&children| children.map(|id| self.at(id)))
  }

  /// Smallest cell at least as large as this one touching it across
  /// `direction`. `Ok(None)` at the world boundary and for the root.
  pub fn find_gteq_neighbor(&self, direction: Direction) -> Result<Option<Self>> {
    Ok(self.tree.gteq_neighbor(self.id, direction)?.map(|id| self.at(id)))
  }

  #[inline]
  pub fn find_gteq_neighbor_face(&self, face: Face) -> Result<Option<Self>> {
    self.find_gteq_neighbor(Direction::Face(face))
  }

  #[inline]
  pub fn find_gteq_neighbor_edge(&self, edge: Edge) -> Result<Option<Self>> {
    self.find_gteq_neighbor(Direction::Edge(edge))
  }

  #[inline]
  pub fn find_gteq_neighbor_vertex(&self, vertex: Vertex) -> Result<Option<Self>> {
    self.find_gteq_neighbor(Direction::Vertex(vertex))
  }

  /// Distinct gteq neighbors over all 26 directions.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "index::find_neighbors"))]
  pub fn find_neighbors(&self) -> Result<HashSet<Self>> {
    Ok(
      self
        .tree
        .neighbors(self.id)?
        .into_iter()
        .map(|id| self.at(id))
        .collect(),
    )
  }
}

impl<T> Clone for CellRef<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for CellRef<'_, T> {}

impl<T> PartialEq for CellRef<'_, T> {
  fn eq(&self, other: &Self) -> bool {
    ptr::eq(self.tree, other.tree) && self.id == other.id
  }
}

impl<T> Eq for CellRef<'_, T> {}

impl<T> Hash for CellRef<'_, T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl<T> fmt::Debug for CellRef<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CellRef")
      .field("id", &self.id)
      .field("depth", &self.depth())
      .field("center", &self.center())
      .field("leaf", &self.is_leaf())
      .finish()
  }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
