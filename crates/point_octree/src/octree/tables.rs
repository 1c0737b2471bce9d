//! Precomputed octant/direction tables for neighbor finding.
//!
//! After H. Samet, "Neighbor Finding in Images Represented by Octrees",
//! CVGIP 46 (1989) 367-386. Rows follow [`Direction::index`] order, columns
//! follow [`Octant::index`] order.
//!
//! | table         | question answered for a child of octant `o`                 |
//! |---------------|-------------------------------------------------------------|
//! | `ADJACENT`    | does `d` leave the parent through its own `d` side?         |
//! | `REFLECT`     | which octant of the neighbor's parent lies across `d`?      |
//! | `COMMON_FACE` | edge/vertex `d` only leaves the parent through this face    |
//! | `COMMON_EDGE` | vertex `d` only leaves the parent through this edge         |
//!
//! `None` in the reduction tables means no reduction applies: the neighbor is
//! either found through the parent's own `d` neighbor (`ADJACENT`) or is a
//! sibling inside the same parent.

use super::direction::{Direction, Edge, Face, Vertex};
use super::octant::Octant::{self, *};
use crate::constants::{DIRECTION_COUNT, EDGE_COUNT, OCTANT_COUNT, VERTEX_COUNT};

/// `ADJACENT[d][o]`: octant `o` touches the `d` side of its parent.
#[rustfmt::skip]
pub const ADJACENT: [[bool; OCTANT_COUNT]; DIRECTION_COUNT] = {
  const T: bool = true;
  const X: bool = false;
  [
    //LDB LDF LUB LUF RDB RDF RUB RUF
    [T,  T,  T,  T,  X,  X,  X,  X], // L
    [X,  X,  X,  X,  T,  T,  T,  T], // R
    [T,  T,  X,  X,  T,  T,  X,  X], // D
    [X,  X,  T,  T,  X,  X,  T,  T], // U
    [T,  X,  T,  X,  T,  X,  T,  X], // B
    [X,  T,  X,  T,  X,  T,  X,  T], // F
    [T,  T,  X,  X,  X,  X,  X,  X], // LD
    [X,  X,  T,  T,  X,  X,  X,  X], // LU
    [T,  X,  T,  X,  X,  X,  X,  X], // LB
    [X,  T,  X,  T,  X,  X,  X,  X], // LF
    [X,  X,  X,  X,  T,  T,  X,  X], // RD
    [X,  X,  X,  X,  X,  X,  T,  T], // RU
    [X,  X,  X,  X,  T,  X,  T,  X], // RB
    [X,  X,  X,  X,  X,  T,  X,  T], // RF
    [T,  X,  X,  X,  T,  X,  X,  X], // DB
    [X,  T,  X,  X,  X,  T,  X,  X], // DF
    [X,  X,  T,  X,  X,  X,  T,  X], // UB
    [X,  X,  X,  T,  X,  X,  X,  T], // UF
    [T,  X,  X,  X,  X,  X,  X,  X], // LDB
    [X,  T,  X,  X,  X,  X,  X,  X], // LDF
    [X,  X,  T,  X,  X,  X,  X,  X], // LUB
    [X,  X,  X,  T,  X,  X,  X,  X], // LUF
    [X,  X,  X,  X,  T,  X,  X,  X], // RDB
    [X,  X,  X,  X,  X,  T,  X,  X], // RDF
    [X,  X,  X,  X,  X,  X,  T,  X], // RUB
    [X,  X,  X,  X,  X,  X,  X,  T], // RUF
  ]
};

/// `REFLECT[d][o]`: mirror image of `o` across the axes `d` crosses.
#[rustfmt::skip]
pub const REFLECT: [[Octant; OCTANT_COUNT]; DIRECTION_COUNT] = [
  [Rdb, Rdf, Rub, Ruf, Ldb, Ldf, Lub, Luf], // L
  [Rdb, Rdf, Rub, Ruf, Ldb, Ldf, Lub, Luf], // R
  [Lub, Luf, Ldb, Ldf, Rub, Ruf, Rdb, Rdf], // D
  [Lub, Luf, Ldb, Ldf, Rub, Ruf, Rdb, Rdf], // U
  [Ldf, Ldb, Luf, Lub, Rdf, Rdb, Ruf, Rub], // B
  [Ldf, Ldb, Luf, Lub, Rdf, Rdb, Ruf, Rub], // F
  [Rub, Ruf, Rdb, Rdf, Lub, Luf, Ldb, Ldf], // LD
  [Rub, Ruf, Rdb, Rdf, Lub, Luf, Ldb, Ldf], // LU
  [Rdf, Rdb, Ruf, Rub, Ldf, Ldb, Luf, Lub], // LB
  [Rdf, Rdb, Ruf, Rub, Ldf, Ldb, Luf, Lub], // LF
  [Rub, Ruf, Rdb, Rdf, Lub, Luf, Ldb, Ldf], // RD
  [Rub, Ruf, Rdb, Rdf, Lub, Luf, Ldb, Ldf], // RU
  [Rdf, Rdb, Ruf, Rub, Ldf, Ldb, Luf, Lub], // RB
  [Rdf, Rdb, Ruf, Rub, Ldf, Ldb, Luf, Lub], // RF
  [Luf, Lub, Ldf, Ldb, Ruf, Rub, Rdf, Rdb], // DB
  [Luf, Lub, Ldf, Ldb, Ruf, Rub, Rdf, Rdb], // DF
  [Luf, Lub, Ldf, Ldb, Ruf, Rub, Rdf, Rdb], // UB
  [Luf, Lub, Ldf, Ldb, Ruf, Rub, Rdf, Rdb], // UF
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // LDB
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // LDF
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // LUB
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // LUF
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // RDB
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // RDF
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // RUB
  [Ruf, Rub, Rdf, Rdb, Luf, Lub, Ldf, Ldb], // RUF
];

/// `COMMON_FACE[d - 6][o]` for edge and vertex directions: the only face of
/// the parent that `d` crosses when starting from octant `o`.
#[rustfmt::skip]
pub const COMMON_FACE: [[Option<Face>; OCTANT_COUNT]; EDGE_COUNT + VERTEX_COUNT] = {
  const N: Option<Face> = None;
  const L: Option<Face> = Some(Face::Left);
  const R: Option<Face> = Some(Face::Right);
  const D: Option<Face> = Some(Face::Down);
  const U: Option<Face> = Some(Face::Up);
  const B: Option<Face> = Some(Face::Back);
  const F: Option<Face> = Some(Face::Front);
  [
    //LDB LDF LUB LUF RDB RDF RUB RUF
    [N,  N,  L,  L,  D,  D,  N,  N], // LD
    [L,  L,  N,  N,  N,  N,  U,  U], // LU
    [N,  L,  N,  L,  B,  N,  B,  N], // LB
    [L,  N,  L,  N,  N,  F,  N,  F], // LF
    [D,  D,  N,  N,  N,  N,  R,  R], // RD
    [N,  N,  U,  U,  R,  R,  N,  N], // RU
    [B,  N,  B,  N,  N,  R,  N,  R], // RB
    [N,  F,  N,  F,  R,  N,  R,  N], // RF
    [N,  D,  B,  N,  N,  D,  B,  N], // DB
    [D,  N,  N,  F,  D,  N,  N,  F], // DF
    [B,  N,  N,  U,  B,  N,  N,  U], // UB
    [N,  F,  U,  N,  N,  F,  U,  N], // UF
    [N,  N,  N,  L,  N,  D,  B,  N], // LDB
    [N,  N,  L,  N,  D,  N,  N,  F], // LDF
    [N,  L,  N,  N,  B,  N,  N,  U], // LUB
    [L,  N,  N,  N,  N,  F,  U,  N], // LUF
    [N,  D,  B,  N,  N,  N,  N,  R], // RDB
    [D,  N,  N,  F,  N,  N,  R,  N], // RDF
    [B,  N,  N,  U,  N,  R,  N,  N], // RUB
    [N,  F,  U,  N,  R,  N,  N,  N], // RUF
  ]
};

/// `COMMON_EDGE[v][o]`: the only edge of the parent that vertex direction
/// `v` crosses when starting from octant `o`.
#[rustfmt::skip]
pub const COMMON_EDGE: [[Option<Edge>; OCTANT_COUNT]; VERTEX_COUNT] = {
  const N: Option<Edge> = None;
  const LD: Option<Edge> = Some(Edge::LeftDown);
  const LU: Option<Edge> = Some(Edge::LeftUp);
  const LB: Option<Edge> = Some(Edge::LeftBack);
  const LF: Option<Edge> = Some(Edge::LeftFront);
  const RD: Option<Edge> = Some(Edge::RightDown);
  const RU: Option<Edge> = Some(Edge::RightUp);
  const RB: Option<Edge> = Some(Edge::RightBack);
  const RF: Option<Edge> = Some(Edge::RightFront);
  const DB: Option<Edge> = Some(Edge::DownBack);
  const DF: Option<Edge> = Some(Edge::DownFront);
  const UB: Option<Edge> = Some(Edge::UpBack);
  const UF: Option<Edge> = Some(Edge::UpFront);
  [
    //LDB LDF LUB LUF RDB RDF RUB RUF
    [N,  LD, LB, N,  DB, N,  N,  N ], // LDB
    [LD, N,  N,  LF, N,  DF, N,  N ], // LDF
    [LB, N,  N,  LU, N,  N,  UB, N ], // LUB
    [N,  LF, LU, N,  N,  N,  N,  UF], // LUF
    [DB, N,  N,  N,  N,  RD, RB, N ], // RDB
    [N,  DF, N,  N,  RD, N,  N,  RF], // RDF
    [N,  N,  UB, N,  RB, N,  N,  RU], // RUB
    [N,  N,  N,  UF, N,  RF, RU, N ], // RUF
  ]
};

/// Whether octant `octant` lies on the `direction` side of its parent.
#[inline]
pub fn adjacent(direction: Direction, octant: Octant) -> bool {
  ADJACENT[direction.index()][octant.index()]
}

/// Octant across `direction` from `octant`, one level down on the far side.
#[inline]
pub fn reflect(direction: Direction, octant: Octant) -> Octant {
  REFLECT[direction.index()][octant.index()]
}

/// Face reduction for edge and vertex directions. Always `None` for faces.
#[inline]
pub fn common_face(direction: Direction, octant: Octant) -> Option<Face> {
  match direction {
    Direction::Face(_) => None,
    Direction::Edge(edge) => COMMON_FACE[edge.index()][octant.index()],
    Direction::Vertex(vertex) => COMMON_FACE[EDGE_COUNT + vertex.index()][octant.index()],
  }
}

/// Edge reduction for vertex directions.
#[inline]
pub fn common_edge(vertex: Vertex, octant: Octant) -> Option<Edge> {
  COMMON_EDGE[vertex.index()][octant.index()]
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
