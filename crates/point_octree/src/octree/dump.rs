//! Human-readable tree listing for debugging.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use super::{CellId, CellKind, Octant, Octree};

/// Depth-first listing of every cell, one line per cell.
///
/// Each line is indented by depth and reads `(depth) cx cy cz LABEL`, where
/// `LABEL` is the cell's octant within its parent or `ROOT`. Leaves also
/// show their item count.
pub struct TreeDump<'a, T> {
  tree: &'a Octree<T>,
  start: CellId,
}

impl<'a, T> TreeDump<'a, T> {
  pub fn new(tree: &'a Octree<T>) -> Self {
    Self::from_cell(tree, CellId::ROOT)
  }

  /// Listing of the subtree under `start`.
  pub fn from_cell(tree: &'a Octree<T>, start: CellId) -> Self {
    Self { tree, start }
  }
}

impl<T> fmt::Display for TreeDump<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Holds at most 7 pending siblings per level plus the current cell.
    let mut stack: SmallVec<[(CellId, Option<Octant>); 32]> = smallvec![(self.start, None)];
    let base = self.tree.cell(self.start).depth();

    while let Some((id, octant)) = stack.pop() {
      let cell = self.tree.cell(id);
      let center = cell.center();
      let indent = (cell.depth() - base) as usize * 2;
      let label = match (cell.parent(), octant) {
        (None, _) => "ROOT",
        (Some(_), Some(octant)) => octant.label(),
        // Subtree start: label from the parent's slots.
        (Some(_), None) => match self.tree.octant_of(id) {
          Ok(Some(octant)) => octant.label(),
          _ => "?",
        },
      };

      write!(
        f,
        "{:indent$}({}) {} {} {} {}",
        "",
        cell.depth(),
        center.x,
        center.y,
        center.z,
        label,
      )?;
      match cell.kind() {
        CellKind::Leaf(items) => writeln!(f, " [{}]", items.len())?,
        CellKind::Internal(children) => {
          writeln!(f)?;
          // Reverse so LDB pops first.
          for octant in Octant::ALL.into_iter().rev() {
            stack.push((children[octant.index()], Some(octant)));
          }
        }
      }
    }
    Ok(())
  }
}

impl<T> Octree<T> {
  /// Debug listing of the whole tree.
  pub fn dump(&self) -> TreeDump<'_, T> {
    TreeDump::new(self)
  }
}

#[cfg(test)]
mod tests {
  use glam::DVec3;

  use super::*;
  use crate::octree::{Bounds, IndexConfig};

  #[test]
  fn test_single_root_line() {
    let tree: Octree<()> = Octree::new(Bounds::from_extents(DVec3::splat(8.0)), IndexConfig::default());
    assert_eq!(tree.dump().to_string(), "(0) 4 4 4 ROOT [0]\n");
  }

  #[test]
  fn test_split_lists_children_in_octant_order() {
    let mut tree: Octree<()> = Octree::new(Bounds::from_extents(DVec3::splat(8.0)), IndexConfig::default());
    tree.split(CellId::ROOT);
    let text = tree.dump().to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "(0) 4 4 4 ROOT");
    assert_eq!(lines[1], "  (1) 2 2 2 LDB [0]");
    assert_eq!(lines[8], "  (1) 6 6 6 RUF [0]");
  }

  #[test]
  fn test_subtree_dump_labels_start() {
    let mut tree: Octree<()> = Octree::new(Bounds::from_extents(DVec3::splat(8.0)), IndexConfig::default());
    tree.split(CellId::ROOT);
    let rdb = tree.cell(CellId::ROOT).child(Octant::Rdb).unwrap();
    let text = TreeDump::from_cell(&tree, rdb).to_string();
    assert_eq!(text, "(1) 6 2 2 RDB [0]\n");
  }
}
