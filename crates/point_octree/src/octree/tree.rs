//! Octree - arena of cells with point routing and split-on-overflow.
//!
//! Cells live in a single `Vec` and refer to each other by [`CellId`]. A
//! parent owns its children only in the sense that their ids sit in its
//! [`CellKind::Internal`] slots; the child's parent link is a plain id used
//! for upward traversal. Dropping the tree drops every cell together, and
//! with them the stored payload handles (never the objects those handles
//! point to).

use glam::DVec3;

use super::{Bounds, Cell, CellId, CellKind, IndexConfig, IndexStats, Item, Octant};
use crate::error::{IndexError, Result};

/// Point-bucket octree.
///
/// Methods taking a [`CellId`] panic if the id was not issued by this tree.
#[derive(Clone, Debug)]
pub struct Octree<T> {
  pub(super) cells: Vec<Cell<T>>,
  config: IndexConfig,
  stats: IndexStats,
}

impl<T> Octree<T> {
  /// Tree with a single empty root leaf covering `bounds`.
  pub fn new(bounds: Bounds, config: IndexConfig) -> Self {
    let root = Cell::new(
      None,
      bounds.center(),
      bounds.size(),
      0,
      config.bucket_capacity(),
    );
    Self {
      cells: vec![root],
      config,
      stats: IndexStats::root_only(),
    }
  }

  #[inline]
  pub fn root(&self) -> CellId {
    CellId::ROOT
  }

  /// Cell by id, `None` for ids this tree never issued.
  #[inline]
  pub fn get(&self, id: CellId) -> Option<&Cell<T>> {
    self.cells.get(id.index())
  }

  #[inline]
  pub(crate) fn cell(&self, id: CellId) -> &Cell<T> {
    &self.cells[id.index()]
  }

  /// Number of allocated cells, root included.
  #[inline]
  pub fn cell_count(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn config(&self) -> &IndexConfig {
    &self.config
  }

  #[inline]
  pub fn stats(&self) -> IndexStats {
    self.stats
  }

  /// All cells in allocation order (parents before children).
  pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> + '_ {
    self
      .cells
      .iter()
      .enumerate()
      .map(|(i, cell)| (CellId::from_index(i), cell))
  }

  /// All current leaves in allocation order.
  pub fn leaves(&self) -> impl Iterator<Item = (CellId, &Cell<T>)> + '_ {
    self.cells().filter(|(_, cell)| cell.is_leaf())
  }

  /// Leaf that currently owns `point`.
  ///
  /// Never fails: points outside the world volume are routed by the same
  /// center comparisons and land in a boundary leaf.
  #[inline]
  pub fn find_leaf(&self, point: DVec3) -> CellId {
    self.find_leaf_from(CellId::ROOT, point)
  }

  /// Leaf under `start` that owns `point`; `start` itself if it is a leaf.
  pub fn find_leaf_from(&self, start: CellId, point: DVec3) -> CellId {
    let mut id = start;
    loop {
      let cell = self.cell(id);
      match &cell.kind {
        CellKind::Leaf(_) => return id,
        CellKind::Internal(children) => id = children[cell.octant_for(point).index()],
      }
    }
  }

  /// Octant of `id` among its parent's children, `None` for the root.
  ///
  /// Resolved by looking `id` up in the parent's child slots, so a corrupted
  /// parent link is reported as [`IndexError::Inconsistent`].
  pub fn octant_of(&self, id: CellId) -> Result<Option<Octant>> {
    let Some(parent) = self.cell(id).parent() else {
      return Ok(None);
    };
    self
      .cell(parent)
      .children()
      .and_then(|children| children.iter().position(|child| *child == id))
      .and_then(Octant::from_index)
      .map(Some)
      .ok_or(IndexError::Inconsistent { cell: id })
  }

  /// Store `item` in the leaf owning its position, splitting on overflow.
  ///
  /// Returns the leaf holding the item once all splits have settled.
  pub(crate) fn insert(&mut self, item: Item<T>) -> CellId {
    let position = item.position;
    let leaf = self.find_leaf(position);
    self.stats.items += 1;
    self.add(leaf, item);
    self.find_leaf_from(leaf, position)
  }

  /// Append to the bucket of leaf `id` and split once the bucket is full.
  fn add(&mut self, id: CellId, item: Item<T>) {
    let cell = &mut self.cells[id.index()];
    let depth = cell.depth();
    let len = match &mut cell.kind {
      CellKind::Leaf(items) => {
        items.push(item);
        items.len()
      }
      // Only reached through find_leaf, which always stops at a leaf.
      CellKind::Internal(_) => return,
    };

    if self.config.should_split(len, depth) {
      self.split(id);
    } else if len >= self.config.split_threshold {
      self.stats.overfull_inserts += 1;
      #[cfg(feature = "tracing")]
      tracing::warn!(cell = %id, depth, len, "leaf at max depth exceeds split threshold");
    }
  }

  /// Turn leaf `id` into an internal cell and push its items down.
  ///
  /// No-op for internal cells. Runs under a single `&mut self`, so no caller
  /// can observe the cell between losing its bucket and gaining children.
  /// A child that receives the whole bucket splits again recursively.
  pub(crate) fn split(&mut self, id: CellId) {
    let cell = &mut self.cells[id.index()];
    let items = match &mut cell.kind {
      CellKind::Internal(_) => return,
      CellKind::Leaf(items) => std::mem::take(items),
    };
    let depth = cell.depth();
    let child_extents = cell.extents() * 0.5;
    let centers = Octant::ALL.map(|octant| cell.child_center(octant));

    let first = self.cells.len();
    let children: [CellId; 8] = std::array::from_fn(|i| CellId::from_index(first + i));
    for center in centers {
      self.cells.push(Cell::new(
        Some(id),
        center,
        child_extents,
        depth + 1,
        self.config.bucket_capacity(),
      ));
    }
    self.cells[id.index()].kind = CellKind::Internal(children);
    self.stats.record_split(depth);

    #[cfg(feature = "tracing")]
    tracing::debug!(cell = %id, depth, items = items.len(), "split cell");

    for item in items {
      let leaf = self.find_leaf_from(id, item.position);
      self.add(leaf, item);
    }
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
