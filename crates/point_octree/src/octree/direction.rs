//! Neighbor directions: 6 faces, 12 edges and 8 vertices.
//!
//! Each class has its own enum so a face query can only be asked with a face
//! direction. [`Direction`] wraps all three and enumerates the 26 directions
//! in table order:
//!
//! ```text
//! faces     0..6    L  R  D  U  B  F
//! edges     6..18   LD LU LB LF RD RU RB RF DB DF UB UF
//! vertices 18..26   LDB LDF LUB LUF RDB RDF RUB RUF
//! ```
//!
//! A direction is described by the octant bits it touches (`axis_mask`) and
//! the side it points to on those axes (`side_bits`, set = Right/Up/Front).

use std::fmt;

use glam::DVec3;

use super::octant::{X_BIT, Y_BIT, Z_BIT};
use crate::constants::{DIRECTION_COUNT, EDGE_COUNT, FACE_COUNT};

/// Class of a direction, by how many axes it crosses.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DirectionClass {
  Face,
  Edge,
  Vertex,
}

/// Single-axis direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Face {
  Left,
  Right,
  Down,
  Up,
  Back,
  Front,
}

impl Face {
  pub const ALL: [Self; 6] = [
    Self::Left,
    Self::Right,
    Self::Down,
    Self::Up,
    Self::Back,
    Self::Front,
  ];

  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Octant bit of the axis this face crosses.
  pub const fn axis_mask(self) -> u8 {
    match self {
      Self::Left | Self::Right => X_BIT,
      Self::Down | Self::Up => Z_BIT,
      Self::Back | Self::Front => Y_BIT,
    }
  }

  /// `axis_mask` if the face points to the positive side, else 0.
  pub const fn side_bits(self) -> u8 {
    match self {
      Self::Right | Self::Up | Self::Front => self.axis_mask(),
      Self::Left | Self::Down | Self::Back => 0,
    }
  }

  /// The face on the other side of the same axis.
  pub const fn opposite(self) -> Self {
    match self {
      Self::Left => Self::Right,
      Self::Right => Self::Left,
      Self::Down => Self::Up,
      Self::Up => Self::Down,
      Self::Back => Self::Front,
      Self::Front => Self::Back,
    }
  }

  /// Unit step in world axes (x = L/R, y = B/F, z = D/U).
  pub fn step(self) -> DVec3 {
    match self {
      Self::Left => DVec3::NEG_X,
      Self::Right => DVec3::X,
      Self::Back => DVec3::NEG_Y,
      Self::Front => DVec3::Y,
      Self::Down => DVec3::NEG_Z,
      Self::Up => DVec3::Z,
    }
  }

  pub const fn label(self) -> &'static str {
    match self {
      Self::Left => "L",
      Self::Right => "R",
      Self::Down => "D",
      Self::Up => "U",
      Self::Back => "B",
      Self::Front => "F",
    }
  }
}

/// Two-axis direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Edge {
  LeftDown,
  LeftUp,
  LeftBack,
  LeftFront,
  RightDown,
  RightUp,
  RightBack,
  RightFront,
  DownBack,
  DownFront,
  UpBack,
  UpFront,
}

impl Edge {
  pub const ALL: [Self; 12] = [
    Self::LeftDown,
    Self::LeftUp,
    Self::LeftBack,
    Self::LeftFront,
    Self::RightDown,
    Self::RightUp,
    Self::RightBack,
    Self::RightFront,
    Self::DownBack,
    Self::DownFront,
    Self::UpBack,
    Self::UpFront,
  ];

  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// The two faces this edge combines.
  pub const fn faces(self) -> [Face; 2] {
    match self {
      Self::LeftDown => [Face::Left, Face::Down],
      Self::LeftUp => [Face::Left, Face::Up],
      Self::LeftBack => [Face::Left, Face::Back],
      Self::LeftFront => [Face::Left, Face::Front],
      Self::RightDown => [Face::Right, Face::Down],
      Self::RightUp => [Face::Right, Face::Up],
      Self::RightBack => [Face::Right, Face::Back],
      Self::RightFront => [Face::Right, Face::Front],
      Self::DownBack => [Face::Down, Face::Back],
      Self::DownFront => [Face::Down, Face::Front],
      Self::UpBack => [Face::Up, Face::Back],
      Self::UpFront => [Face::Up, Face::Front],
    }
  }

  /// Edge spanned by two faces on different axes, in either order.
  pub fn from_faces(a: Face, b: Face) -> Option<Self> {
    Self::ALL.into_iter().find(|edge| {
      let [p, q] = edge.faces();
      (p == a && q == b) || (p == b && q == a)
    })
  }
}

/// Three-axis direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Vertex {
  LeftDownBack,
  LeftDownFront,
  LeftUpBack,
  LeftUpFront,
  RightDownBack,
  RightDownFront,
  RightUpBack,
  RightUpFront,
}

impl Vertex {
  pub const ALL: [Self; 8] = [
    Self::LeftDownBack,
    Self::LeftDownFront,
    Self::LeftUpBack,
    Self::LeftUpFront,
    Self::RightDownBack,
    Self::RightDownFront,
    Self::RightUpBack,
    Self::RightUpFront,
  ];

  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// The three faces this vertex combines, ordered x, z, y.
  pub const fn faces(self) -> [Face; 3] {
    let x = if self.index() & 0b100 != 0 { Face::Right } else { Face::Left };
    let z = if self.index() & 0b010 != 0 { Face::Up } else { Face::Down };
    let y = if self.index() & 0b001 != 0 { Face::Front } else { Face::Back };
    [x, z, y]
  }
}

/// Any of the 26 neighbor directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
  Face(Face),
  Edge(Edge),
  Vertex(Vertex),
}

impl Direction {
  /// All 26 directions in table order.
  pub const ALL: [Self; DIRECTION_COUNT] = {
    let mut all = [Self::Face(Face::Left); DIRECTION_COUNT];
    let mut i = 0;
    while i < FACE_COUNT {
      all[i] = Self::Face(Face::ALL[i]);
      i += 1;
    }
    let mut i = 0;
    while i < EDGE_COUNT {
      all[FACE_COUNT + i] = Self::Edge(Edge::ALL[i]);
      i += 1;
    }
    let mut i = 0;
    while i < Vertex::ALL.len() {
      all[FACE_COUNT + EDGE_COUNT + i] = Self::Vertex(Vertex::ALL[i]);
      i += 1;
    }
    all
  };

  /// Row index into the neighbor tables (0-25).
  #[inline]
  pub const fn index(self) -> usize {
    match self {
      Self::Face(face) => face.index(),
      Self::Edge(edge) => FACE_COUNT + edge.index(),
      Self::Vertex(vertex) => FACE_COUNT + EDGE_COUNT + vertex.index(),
    }
  }

  pub const fn class(self) -> DirectionClass {
    match self {
      Self::Face(_) => DirectionClass::Face,
      Self::Edge(_) => DirectionClass::Edge,
      Self::Vertex(_) => DirectionClass::Vertex,
    }
  }

  /// Octant bits of every axis this direction crosses.
  pub const fn axis_mask(self) -> u8 {
    match self {
      Self::Face(face) => face.axis_mask(),
      Self::Edge(edge) => {
        let [a, b] = edge.faces();
        a.axis_mask() | b.axis_mask()
      }
      Self::Vertex(_) => X_BIT | Z_BIT | Y_BIT,
    }
  }

  /// Octant bits of the positive sides this direction points to.
  pub const fn side_bits(self) -> u8 {
    match self {
      Self::Face(face) => face.side_bits(),
      Self::Edge(edge) => {
        let [a, b] = edge.faces();
        a.side_bits() | b.side_bits()
      }
      Self::Vertex(vertex) => {
        let [x, z, y] = vertex.faces();
        x.side_bits() | z.side_bits() | y.side_bits()
      }
    }
  }

  /// Step vector with components in {-1, 0, 1} (x = L/R, y = B/F, z = D/U).
  pub fn step(self) -> DVec3 {
    match self {
      Self::Face(face) => face.step(),
      Self::Edge(edge) => edge.faces().iter().map(|f| f.step()).sum(),
      Self::Vertex(vertex) => vertex.faces().iter().map(|f| f.step()).sum(),
    }
  }
}

impl From<Face> for Direction {
  fn from(face: Face) -> Self {
    Self::Face(face)
  }
}

impl From<Edge> for Direction {
  fn from(edge: Edge) -> Self {
    Self::Edge(edge)
  }
}

impl From<Vertex> for Direction {
  fn from(vertex: Vertex) -> Self {
    Self::Vertex(vertex)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Face(face) => f.write_str(face.label()),
      Self::Edge(edge) => edge.faces().iter().try_for_each(|face| f.write_str(face.label())),
      Self::Vertex(vertex) => vertex.faces().iter().try_for_each(|face| f.write_str(face.label())),
    }
  }
}

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;
