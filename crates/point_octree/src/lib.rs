//! point_octree - point-bucket octree with table-driven neighbor finding
//!
//! This crate provides a three-dimensional spatial index that stores
//! point-tagged payload handles in leaf buckets and subdivides a leaf into
//! eight children once its bucket fills up. On top of the tree it answers
//! "which leaf owns point P" and "which existing cell of equal or larger size
//! touches this cell across a given face, edge or vertex".
//!
//! # Features
//!
//! - **Monotonic refinement**: leaves split on overflow, cells never merge
//! - **Arena storage**: cells live in one `Vec`, parent links are plain
//!   indices, dropping the index releases every cell at once
//! - **Samet neighbor finding**: face, edge and vertex neighbors are located
//!   purely through octant-label tables (adjacency, reflection, common face,
//!   common edge) without comparing coordinates again
//!
//! # Example
//!
//! ```
//! use point_octree::{Face, SpatialIndex};
//!
//! let mut index = SpatialIndex::new(10.0, 10.0, 10.0)?;
//! for i in 0..40u32 {
//!   let t = f64::from(i) / 4.0;
//!   index.insert(i, t, 9.9 - t, t)?;
//! }
//!
//! let cell = index.find_node(1.0, 8.0, 1.0);
//! assert!(cell.is_leaf());
//! if let Some(right) = cell.find_gteq_neighbor_face(Face::Right)? {
//!   assert!(right.depth() <= cell.depth());
//! }
//! # Ok::<(), point_octree::IndexError>(())
//! ```

pub mod constants;
pub mod error;

pub use constants::{
  DEFAULT_MAX_DEPTH, DIRECTION_COUNT, MAX_DEPTH_LIMIT, OCTANT_COUNT, SPLIT_THRESHOLD,
};
pub use error::{IndexError, Result};

// Octree cells, direction algebra and neighbor tables
pub mod octree;
pub use octree::{
  Bounds, Cell, CellId, CellKind, Direction, DirectionClass, Edge, Face, IndexConfig, IndexStats,
  Item, Octant, Octree, OutOfBoundsPolicy, TreeDump, Vertex,
};

// Top-level handle: world volume, insertion and point lookup
pub mod index;
pub use index::{CellRef, SpatialIndex};
