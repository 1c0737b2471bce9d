//! Octant labels - a child's position relative to its parent's center.
//!
//! # Label Layout
//!
//! ```text
//! index bits:  x (Left/Right) = 4   z (Down/Up) = 2   y (Back/Front) = 1
//!
//!   0 = LDB   1 = LDF   2 = LUB   3 = LUF
//!   4 = RDB   5 = RDF   6 = RUB   7 = RUF
//! ```
//!
//! A set bit selects the positive half of its axis (Right, Up, Front). The
//! root has no octant; [`Octree::octant_of`](super::Octree::octant_of)
//! reports it as `None`.

use std::fmt;

use glam::DVec3;

/// Octant bit for the x axis (Left = 0, Right = 1).
pub const X_BIT: u8 = 0b100;
/// Octant bit for the z axis (Down = 0, Up = 1).
pub const Z_BIT: u8 = 0b010;
/// Octant bit for the y axis (Back = 0, Front = 1).
pub const Y_BIT: u8 = 0b001;

/// One of the eight children of an internal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Octant {
  /// Left, Down, Back
  Ldb = 0,
  /// Left, Down, Front
  Ldf = 1,
  /// Left, Up, Back
  Lub = 2,
  /// Left, Up, Front
  Luf = 3,
  /// Right, Down, Back
  Rdb = 4,
  /// Right, Down, Front
  Rdf = 5,
  /// Right, Up, Back
  Rub = 6,
  /// Right, Up, Front
  Ruf = 7,
}

impl Octant {
  /// All octants in child-slot order.
  pub const ALL: [Self; 8] = [
    Self::Ldb,
    Self::Ldf,
    Self::Lub,
    Self::Luf,
    Self::Rdb,
    Self::Rdf,
    Self::Rub,
    Self::Ruf,
  ];

  /// Child slot index (0-7).
  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Raw label bits (see module docs).
  #[inline]
  pub const fn bits(self) -> u8 {
    self as u8
  }

  /// Octant for the low three bits of `bits`.
  #[inline]
  pub const fn from_bits(bits: u8) -> Self {
    Self::ALL[(bits & 0b111) as usize]
  }

  /// Octant for a child slot, `None` past the eighth slot.
  pub const fn from_index(index: usize) -> Option<Self> {
    if index < 8 {
      Some(Self::ALL[index])
    } else {
      None
    }
  }

  /// Combine three independent half-space choices into one label.
  #[inline]
  pub const fn from_sides(right: bool, up: bool, front: bool) -> Self {
    let mut bits = 0;
    if right {
      bits |= X_BIT;
    }
    if up {
      bits |= Z_BIT;
    }
    if front {
      bits |= Y_BIT;
    }
    Self::from_bits(bits)
  }

  /// Octant of `point` relative to `center`.
  ///
  /// Each axis compares strictly-less-than, so a point on a splitting plane
  /// goes to the Right/Up/Front side.
  #[inline]
  pub fn containing(center: DVec3, point: DVec3) -> Self {
    Self::from_sides(!(point.x < center.x), !(point.z < center.z), !(point.y < center.y))
  }

  #[inline]
  pub const fn is_right(self) -> bool {
    self.bits() & X_BIT != 0
  }

  #[inline]
  pub const fn is_up(self) -> bool {
    self.bits() & Z_BIT != 0
  }

  #[inline]
  pub const fn is_front(self) -> bool {
    self.bits() & Y_BIT != 0
  }

  /// Mirror this octant across every axis whose bit is set in `mask`.
  #[inline]
  pub const fn flipped(self, mask: u8) -> Self {
    Self::from_bits(self.bits() ^ mask)
  }

  /// Per-axis sign (-1 or +1) of this octant's offset from the parent center.
  pub fn sign(self) -> DVec3 {
    let pick = |positive: bool| if positive { 1.0 } else { -1.0 };
    DVec3::new(pick(self.is_right()), pick(self.is_front()), pick(self.is_up()))
  }

  /// Three-letter label, e.g. `"LDB"`.
  pub const fn label(self) -> &'static str {
    match self {
      Self::Ldb => "LDB",
      Self::Ldf => "LDF",
      Self::Lub => "LUB",
      Self::Luf => "LUF",
      Self::Rdb => "RDB",
      Self::Rdf => "RDF",
      Self::Rub => "RUB",
      Self::Ruf => "RUF",
    }
  }
}

impl fmt::Display for Octant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[cfg(test)]
#[path = "octant_test.rs"]
mod octant_test;
