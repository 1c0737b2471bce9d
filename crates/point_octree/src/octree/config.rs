//! IndexConfig - split policy and out-of-bounds handling.

use crate::constants::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, SPLIT_THRESHOLD};
use crate::error::{IndexError, Result};

/// What [`SpatialIndex::insert`](crate::SpatialIndex::insert) does with a
/// point outside the world volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutOfBoundsPolicy {
  /// Fail with [`IndexError::OutOfBounds`]; nothing is stored.
  #[default]
  Reject,
  /// Move the point to the nearest position inside the volume and store it
  /// there. The stored position is the clamped one.
  Clamp,
}

/// Configuration for leaf splitting and insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
  /// Bucket size that triggers a split.
  pub split_threshold: usize,

  /// Leaves at this depth never split and keep accepting items past
  /// `split_threshold`. Bounds the recursion when many items share one
  /// position. At most [`MAX_DEPTH_LIMIT`].
  pub max_depth: u32,

  /// Handling of points outside the world volume.
  pub out_of_bounds: OutOfBoundsPolicy,
}

impl IndexConfig {
  /// Check the configuration for values the tree cannot work with.
  pub fn validate(&self) -> Result<()> {
    if self.split_threshold < 2 {
      return Err(IndexError::InvalidConfig("split_threshold must be at least 2"));
    }
    if self.max_depth > MAX_DEPTH_LIMIT {
      return Err(IndexError::InvalidConfig("max_depth must not exceed 64"));
    }
    Ok(())
  }

  /// Initial bucket allocation for a new leaf.
  ///
  /// Capped at [`SPLIT_THRESHOLD`] so a large threshold grows buckets on
  /// demand instead of preallocating them.
  #[inline]
  pub fn bucket_capacity(&self) -> usize {
    self.split_threshold.min(SPLIT_THRESHOLD)
  }

  /// Builder-style override of `out_of_bounds`.
  pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
    self.out_of_bounds = policy;
    self
  }

  /// Whether a leaf at `depth` holding `len` items must split.
  #[inline]
  pub fn should_split(&self, len: usize, depth: u32) -> bool {
    len >= self.split_threshold && depth < self.max_depth
  }
}

impl Default for IndexConfig {
  fn default() -> Self {
    Self {
      split_threshold: SPLIT_THRESHOLD,
      max_depth: DEFAULT_MAX_DEPTH,
      out_of_bounds: OutOfBoundsPolicy::Reject,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
