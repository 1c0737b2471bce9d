//! Table-driven neighbor finding (Samet 1989).
//!
//! A query walks from the cell toward the root until the direction no longer
//! leaves the current subtree, then steps back down one level on the far
//! side. No coordinates are compared: every decision comes from the
//! [`tables`](super::tables) indexed by direction and octant label.
//!
//! # Algorithm
//!
//! For a cell `c` of octant `o` with parent `p`, searching direction `d`:
//!
//! 1. `c` is the root: no neighbor.
//! 2. Pick the ancestor candidate `q`:
//!    - `ADJACENT[d][o]`: `q = neighbor(p, d)`
//!    - edge `d` with `COMMON_FACE[d][o] = f`: `q = neighbor(p, f)`
//!    - vertex `d` with `COMMON_EDGE[d][o] = e`: `q = neighbor(p, e)`
//!    - vertex `d` with `COMMON_FACE[d][o] = f`: `q = neighbor(p, f)`
//!    - otherwise the neighbor is a sibling: `q = p`
//! 3. If `q` is internal, return its child `REFLECT[d][o]`; else return `q`.
//!
//! The result is the smallest existing cell at least as large as `c` that
//! touches it across `d`. Finer cells on the far side are not visited.

use std::collections::HashSet;

use super::tables::{adjacent, common_edge, common_face, reflect};
use super::{CellId, Direction, Edge, Face, Octant, Octree, Vertex};
use crate::constants::DIRECTION_COUNT;
use crate::error::{IndexError, Result};

/// Where the ancestor candidate for a neighbor query comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Ascent {
  /// Ask the parent for its neighbor in this (possibly reduced) direction.
  Parent(Direction),
  /// The neighbor is a sibling inside the same parent.
  Sibling,
}

/// Decide how a query in `direction` from a child of `octant` climbs.
pub(crate) fn ascent(direction: Direction, octant: Octant) -> Ascent {
  if adjacent(direction, octant) {
    return Ascent::Parent(direction);
  }
  let reduced = match direction {
    Direction::Face(_) => None,
    Direction::Edge(_) => common_face(direction, octant).map(Direction::Face),
    Direction::Vertex(vertex) => common_edge(vertex, octant)
      .map(Direction::Edge)
      .or_else(|| common_face(direction, octant).map(Direction::Face)),
  };
  reduced.map_or(Ascent::Sibling, Ascent::Parent)
}

impl<T> Octree<T> {
  /// Smallest cell at least as large as `id` touching it across `direction`.
  ///
  /// `Ok(None)` at the boundary of the world volume. Works for internal
  /// cells as well as leaves.
  pub fn gteq_neighbor(&self, id: CellId, direction: Direction) -> Result<Option<CellId>> {
    let Some(parent) = self.cell(id).parent() else {
      return Ok(None);
    };
    let octant = self
      .octant_of(id)?
      .ok_or(IndexError::Inconsistent { cell: id })?;

    let candidate = match ascent(direction, octant) {
      Ascent::Parent(reduced) => self.gteq_neighbor(parent, reduced)?,
      Ascent::Sibling => Some(parent),
    };

    Ok(candidate.map(|q| {
      self
        .cell(q)
        .child(reflect(direction, octant))
        .unwrap_or(q)
    }))
  }

  /// Face neighbor of equal or larger size.
  #[inline]
  pub fn gteq_neighbor_face(&self, id: CellId, face: Face) -> Result<Option<CellId>> {
    self.gteq_neighbor(id, Direction::Face(face))
  }

  /// Edge neighbor of equal or larger size.
  #[inline]
  pub fn gteq_neighbor_edge(&self, id: CellId, edge: Edge) -> Result<Option<CellId>> {
    self.gteq_neighbor(id, Direction::Edge(edge))
  }

  /// Vertex neighbor of equal or larger size.
  #[inline]
  pub fn gteq_neighbor_vertex(&self, id: CellId, vertex: Vertex) -> Result<Option<CellId>> {
    self.gteq_neighbor(id, Direction::Vertex(vertex))
  }

  /// Distinct gteq neighbors over all 26 directions.
  ///
  /// A large neighbor touching several sides appears once.
  pub fn neighbors(&self, id: CellId) -> Result<HashSet<CellId>> {
    let mut found = HashSet::with_capacity(DIRECTION_COUNT);
    for direction in Direction::ALL {
      if let Some(neighbor) = self.gteq_neighbor(id, direction)? {
        found.insert(neighbor);
      }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(cell = %id, distinct = found.len(), "collected neighbors");

    Ok(found)
  }
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
