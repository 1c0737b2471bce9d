//! Running statistics for an index.

/// Counters maintained while the tree grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexStats {
	/// Leaves turned into internal cells.
	pub splits: usize,
	/// Cells allocated, root included.
	pub cells: usize,
	/// Cells that are currently leaves.
	pub leaves: usize,
	/// Items stored.
	pub items: usize,
	/// Depth of the deepest cell.
	pub max_depth_reached: u32,
	/// Insertions that left a leaf at max depth holding more than the split
	/// threshold.
	pub overfull_inserts: usize,
}

impl IndexStats {
	/// Stats of a tree consisting of an empty root.
	pub(crate) const fn root_only() -> Self {
		Self {
			splits: 0,
			cells: 1,
			leaves: 1,
			items: 0,
			max_depth_reached: 0,
			overfull_inserts: 0,
		}
	}

	/// Cells that have children.
	#[inline]
	pub fn internal_cells(&self) -> usize {
		self.cells - self.leaves
	}

	/// Account for one leaf at `depth` becoming internal with 8 new leaves.
	#[inline]
	pub(crate) fn record_split(&mut self, depth: u32) {
		self.splits += 1;
		self.cells += 8;
		self.leaves += 7;
		self.max_depth_reached = self.max_depth_reached.max(depth + 1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_root_only() {
		let stats = IndexStats::root_only();
		assert_eq!(stats.cells, 1);
		assert_eq!(stats.leaves, 1);
		assert_eq!(stats.internal_cells(), 0);
	}

	#[test]
	fn test_record_split() {
		let mut stats = IndexStats::root_only();
		stats.record_split(0);
		stats.record_split(1);

		assert_eq!(stats.splits, 2);
		assert_eq!(stats.cells, 17);
		assert_eq!(stats.leaves, 15);
		assert_eq!(stats.internal_cells(), 2);
		assert_eq!(stats.max_depth_reached, 2);
	}

	/// Splitting a shallow cell does not lower the recorded depth.
	#[test]
	fn test_max_depth_is_monotonic() {
		let mut stats = IndexStats::root_only();
		stats.record_split(4);
		stats.record_split(0);
		assert_eq!(stats.max_depth_reached, 5);
	}
}
