//! Double-precision axis-aligned box for the world volume and cell regions.

use glam::DVec3;

/// Axis-aligned box with inclusive `min` and `max` corners.
///
/// Axes: x = width (Left/Right), y = breadth (Back/Front), z = height
/// (Down/Up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Minimum corner (inclusive).
	pub min: DVec3,
	/// Maximum corner (inclusive).
	pub max: DVec3,
}

impl Bounds {
	/// Box from explicit corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: DVec3, max: DVec3) -> Self {
		debug_assert!(min.cmple(max).all(), "Bounds min must be <= max on all axes");
		Self { min, max }
	}

	/// World box `[0, w] x [0, b] x [0, h]` for extents `(w, b, h)`.
	pub fn from_extents(extents: DVec3) -> Self {
		Self::new(DVec3::ZERO, extents)
	}

	/// Box of full size `extents` around `center`.
	pub fn from_center_extents(center: DVec3, extents: DVec3) -> Self {
		let half = extents * 0.5;
		Self {
			min: center - half,
			max: center + half,
		}
	}

	/// Closed containment test; points on any face count as inside.
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Nearest point inside the box.
	#[inline]
	pub fn clamp_point(&self, point: DVec3) -> DVec3 {
		point.clamp(self.min, self.max)
	}

	/// Full extents (max - min).
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_extents() {
		let bounds = Bounds::from_extents(DVec3::new(10.0, 20.0, 30.0));
		assert_eq!(bounds.min, DVec3::ZERO);
		assert_eq!(bounds.max, DVec3::new(10.0, 20.0, 30.0));
		assert_eq!(bounds.center(), DVec3::new(5.0, 10.0, 15.0));
	}

	#[test]
	fn test_from_center_extents() {
		let bounds = Bounds::from_center_extents(DVec3::splat(2.5), DVec3::splat(5.0));
		assert_eq!(bounds.min, DVec3::ZERO);
		assert_eq!(bounds.max, DVec3::splat(5.0));
		assert_eq!(bounds.size(), DVec3::splat(5.0));
	}

	#[test]
	fn test_contains_point() {
		let bounds = Bounds::from_extents(DVec3::splat(10.0));

		// Inside
		assert!(bounds.contains_point(DVec3::splat(5.0)));

		// On boundary
		assert!(bounds.contains_point(DVec3::ZERO));
		assert!(bounds.contains_point(DVec3::splat(10.0)));

		// Outside on one axis only
		assert!(!bounds.contains_point(DVec3::new(5.0, -0.1, 5.0)));
		assert!(!bounds.contains_point(DVec3::new(5.0, 5.0, 10.1)));
	}

	#[test]
	fn test_clamp_point() {
		let bounds = Bounds::from_extents(DVec3::splat(10.0));
		assert_eq!(
			bounds.clamp_point(DVec3::new(-3.0, 4.0, 12.0)),
			DVec3::new(0.0, 4.0, 10.0)
		);
		assert_eq!(bounds.clamp_point(DVec3::splat(7.0)), DVec3::splat(7.0));
	}
}
