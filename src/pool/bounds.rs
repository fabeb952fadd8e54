//! Word length bounds.

use serde::{Deserialize, Serialize};

/// Inclusive word length bounds, always with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Default shortest word.
    pub const DEFAULT_MIN: usize = 3;
    /// Default longest word.
    pub const DEFAULT_MAX: usize = 8;

    /// Builds bounds, swapping `min` and `max` if they arrive reversed.
    ///
    /// Reversed bounds are a user slip, not a failure: they are corrected
    /// with a warning.
    pub fn normalized(min: usize, max: usize) -> Self {
        if min > max {
            tracing::warn!(min, max, "Minimum length exceeds maximum; swapping");
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    /// Shortest accepted length.
    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Longest accepted length.
    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if `len` lies within the bounds.
    #[inline]
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_bounds_swapped() {
        let bounds = LengthBounds::normalized(8, 3);
        assert_eq!((bounds.min(), bounds.max()), (3, 8));
    }

    #[test]
    fn test_ordered_bounds_kept() {
        let bounds = LengthBounds::normalized(2, 5);
        assert_eq!((bounds.min(), bounds.max()), (2, 5));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = LengthBounds::normalized(3, 8);
        assert!(!bounds.contains(2));
        assert!(bounds.contains(3));
        assert!(bounds.contains(8));
        assert!(!bounds.contains(9));
    }
}
