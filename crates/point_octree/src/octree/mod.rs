//! Octree module: arena cells, octant/direction algebra and neighbor tables.
//!
//! The tree is explicit: every cell lives in [`Octree`]'s arena and is either
//! a leaf with a bucket of items or an internal cell with exactly eight
//! children. Cells never merge, so ids stay valid as the tree grows.
//!
//! # Octant Convention
//!
//! ```text
//! bit 2 (4) = x   L(0) / R(1)   width
//! bit 1 (2) = z   D(0) / U(1)   height
//! bit 0 (1) = y   B(0) / F(1)   breadth
//!
//! LDB=0 LDF=1 LUB=2 LUF=3 RDB=4 RDF=5 RUB=6 RUF=7
//! ```
//!
//! A point exactly on a splitting plane goes to the Right/Up/Front side.
//!
//! # Module Structure
//!
//! - [`octant`]: `Octant` - child position within a parent
//! - [`direction`]: `Face`, `Edge`, `Vertex`, `Direction` - 26 neighbor
//!   directions
//! - [`tables`]: adjacency, reflection and reduction tables
//! - [`cell`]: `Cell`, `CellId`, `Item` - arena nodes
//! - [`tree`]: `Octree` - insertion, splitting and point lookup
//! - [`neighbors`]: gteq neighbor queries on `Octree`
//! - [`config`], [`stats`], [`bounds`], [`dump`]: supporting types

pub mod bounds;
pub mod cell;
pub mod config;
pub mod direction;
pub mod dump;
pub mod neighbors;
pub mod octant;
pub mod stats;
pub mod tables;
pub mod tree;

// Re-exports
pub use bounds::Bounds;
pub use cell::{Cell, CellId, CellKind, Item};
pub use config::{IndexConfig, OutOfBoundsPolicy};
pub use direction::{Direction, DirectionClass, Edge, Face, Vertex};
pub use dump::TreeDump;
pub use octant::Octant;
pub use stats::IndexStats;
pub use tree::Octree;
