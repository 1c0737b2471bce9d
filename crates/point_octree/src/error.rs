//! Error taxonomy for index construction, insertion and neighbor queries.

use glam::DVec3;
use thiserror::Error;

use crate::octree::CellId;

/// Errors reported by [`SpatialIndex`](crate::SpatialIndex) and
/// [`Octree`](crate::Octree).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndexError {
  /// Insertion outside the world volume under
  /// [`OutOfBoundsPolicy::Reject`](crate::OutOfBoundsPolicy::Reject).
  #[error("position {position} lies outside the index volume {min}..{max}")]
  OutOfBounds {
    position: DVec3,
    min: DVec3,
    max: DVec3,
  },

  /// A coordinate is NaN or infinite. Never routed, regardless of policy.
  #[error("position {0} has a non-finite coordinate")]
  NonFinitePosition(DVec3),

  /// World extents must be finite and strictly positive on every axis.
  #[error("world extents {0} must be finite and strictly positive")]
  InvalidExtents(DVec3),

  /// Configuration rejected by [`IndexConfig::validate`](crate::IndexConfig::validate).
  #[error("invalid index configuration: {0}")]
  InvalidConfig(&'static str),

  /// A cell's parent does not list it among its eight children.
  ///
  /// Cannot happen for trees built through the public API; reported instead
  /// of guessing an octant.
  #[error("cell {cell} is not registered among its parent's children")]
  Inconsistent { cell: CellId },
}

/// Result alias used throughout the crate.
pub type Result<T, E = IndexError> = std::result::Result<T, E>;
