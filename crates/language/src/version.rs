//! Descriptor version compatibility.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Version tag written by the current descriptor format.
pub const DESCRIPTOR_VERSION: u32 = 1;

/// Oldest descriptor version this crate can still load.
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Inclusive range of descriptor versions a loader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionRange {
	pub min: u32,
	pub max: u32,
}

impl VersionRange {
	pub const fn new(min: u32, max: u32) -> Self {
		Self { min, max }
	}

	/// A range accepting exactly one version.
	pub const fn exact(version: u32) -> Self {
		Self::new(version, version)
	}

	#[inline]
	pub fn contains(&self, version: u32) -> bool {
		self.min <= version && version <= self.max
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.min > self.max
	}
}

impl Default for VersionRange {
	fn default() -> Self {
		Self::new(MIN_COMPATIBLE_VERSION, DESCRIPTOR_VERSION)
	}
}

impl fmt::Display for VersionRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.min == self.max {
			write!(f, "{}", self.min)
		} else {
			write!(f, "{}..={}", self.min, self.max)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_accepts_current() {
		let range = VersionRange::default();
		assert!(range.contains(DESCRIPTOR_VERSION));
		assert!(range.contains(MIN_COMPATIBLE_VERSION));
		assert!(!range.contains(99));
		assert!(!range.is_empty());
	}

	#[test]
	fn test_display() {
		assert_eq!(VersionRange::exact(1).to_string(), "1");
		assert_eq!(VersionRange::new(1, 3).to_string(), "1..=3");
		assert!(VersionRange::new(3, 1).is_empty());
	}
}
