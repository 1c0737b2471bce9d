//! Cell - one node of the octree, stored in the tree's arena.
//!
//! A cell is either a leaf holding a bucket of items or an internal cell
//! holding the ids of its eight children; [`CellKind`] makes the two states
//! mutually exclusive. The only transition is leaf -> internal.

use std::fmt;

use glam::DVec3;

use super::{Bounds, Octant};

/// Index of a cell in its tree's arena.
///
/// Ids are handed out in allocation order and stay valid for the lifetime of
/// the tree, since cells are never removed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
  /// The root is always the first cell allocated.
  pub const ROOT: Self = Self(0);

  #[inline]
  pub(crate) const fn from_index(index: usize) -> Self {
    Self(index)
  }

  /// Position in the arena.
  #[inline]
  pub const fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for CellId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// A stored payload handle with the position it was inserted at.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T> {
  pub position: DVec3,
  pub payload: T,
}

/// Leaf bucket or child ids, never both.
#[derive(Clone, Debug)]
pub enum CellKind<T> {
  /// Append-only bucket of items.
  Leaf(Vec<Item<T>>),
  /// Children in [`Octant`] slot order.
  Internal([CellId; 8]),
}

/// Octree cell.
#[derive(Clone, Debug)]
pub struct Cell<T> {
  center: DVec3,
  extents: DVec3,
  depth: u32,
  parent: Option<CellId>,
  pub(crate) kind: CellKind<T>,
}

impl<T> Cell<T> {
  /// Empty leaf with room for `capacity` items.
  pub(crate) fn new(
    parent: Option<CellId>,
    center: DVec3,
    extents: DVec3,
    depth: u32,
    capacity: usize,
  ) -> Self {
    Self {
      center,
      extents,
      depth,
      parent,
      kind: CellKind::Leaf(Vec::with_capacity(capacity)),
    }
  }

  #[inline]
  pub fn center(&self) -> DVec3 {
    self.center
  }

  /// Full width, breadth and height of the region.
  #[inline]
  pub fn extents(&self) -> DVec3 {
    self.extents
  }

  #[inline]
  pub fn bounds(&self) -> Bounds {
    Bounds::from_center_extents(self.center, self.extents)
  }

  /// Root = 0.
  #[inline]
  pub fn depth(&self) -> u32 {
    self.depth
  }

  #[inline]
  pub fn parent(&self) -> Option<CellId> {
    self.parent
  }

  #[inline]
  pub fn kind(&self) -> &CellKind<T> {
    &self.kind
  }

  #[inline]
  pub fn is_leaf(&self) -> bool {
    matches!(self.kind, CellKind::Leaf(_))
  }

  /// Bucket contents; empty for internal cells.
  pub fn items(&self) -> &[Item<T>] {
    match &self.kind {
      CellKind::Leaf(items) => items,
      CellKind::Internal(_) => &[],
    }
  }

  /// Child ids in octant order, `None` for leaves.
  #[inline]
  pub fn children(&self) -> Option<&[CellId; 8]> {
    match &self.kind {
      CellKind::Leaf(_) => None,
      CellKind::Internal(children) => Some(children),
    }
  }

  #[inline]
  pub fn child(&self, octant: Octant) -> Option<CellId> {
    self.children().map(|children| children[octant.index()])
  }

  /// Child whose half-space contains `point`.
  #[inline]
  pub fn octant_for(&self, point: DVec3) -> Octant {
    Octant::containing(self.center, point)
  }

  /// Center a child in `octant` gets: a quarter of this cell's extents away
  /// on every axis.
  #[inline]
  pub fn child_center(&self, octant: Octant) -> DVec3 {
    self.center + octant.sign() * self.extents * 0.25
  }
}

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;
