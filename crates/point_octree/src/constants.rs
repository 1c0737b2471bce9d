//! Fixed sizes shared by the octant tables, the cells and the index.

/// Bucket size at which a leaf splits into eight children.
///
/// A leaf never holds this many items after an insertion returns, unless it
/// sits at the configured maximum depth.
pub const SPLIT_THRESHOLD: usize = 16;

/// Deepest level a leaf may be split to (root = 0).
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Largest `max_depth` a configuration may request.
///
/// Cell extents halve per level, so deeper cells carry no more f64
/// precision than their parents.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Children per internal cell.
pub const OCTANT_COUNT: usize = 8;

/// Single-axis directions.
pub const FACE_COUNT: usize = 6;

/// Two-axis directions.
pub const EDGE_COUNT: usize = 12;

/// Three-axis directions.
pub const VERTEX_COUNT: usize = 8;

/// Every direction a cell can have a neighbor in.
pub const DIRECTION_COUNT: usize = FACE_COUNT + EDGE_COUNT + VERTEX_COUNT;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_direction_count_is_26() {
    assert_eq!(DIRECTION_COUNT, 26, "3x3x3 block minus the center cell");
  }

  #[test]
  fn test_default_depth_within_limit() {
    assert!(DEFAULT_MAX_DEPTH <= MAX_DEPTH_LIMIT);
  }

  #[test]
  fn test_split_threshold_is_16() {
    assert_eq!(SPLIT_THRESHOLD, 16);
  }
}
