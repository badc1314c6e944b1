// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FitVec;

impl<T: Clone> FitVec<T> {
    /// Returns the position of the first element equal to `value`, or `None`.
    ///
    /// Linear scan over the logical prefix.
    #[inline]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Returns `true` if the vector contains `value` (linear search on the logical prefix).
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns `true` if `index` addresses a logical element (`index < len`).
    #[inline]
    pub const fn in_range(&self, index: usize) -> bool {
        index < self.len
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::FitVec;

    #[test]
    fn test_index_of_returns_first_match() {
        let v: FitVec<i32> = [5, 6, 5].into();
        assert_eq!(v.index_of(&5), Some(0));
        assert_eq!(v.index_of(&6), Some(1));
        assert_eq!(v.index_of(&7), None);
    }

    #[test]
    fn test_search_ignores_stale_tail() {
        let mut v: FitVec<i32> = [1, 2, 3].into();
        v.truncate(1);
        assert_eq!(v.index_of(&3), None);
        assert!(!v.contains(&2));
        assert!(v.contains(&1));
    }

    #[test]
    fn test_in_range() {
        let v: FitVec<i32> = [1, 2].into();
        assert!(v.in_range(0));
        assert!(v.in_range(1));
        assert!(!v.in_range(2));

        let w: FitVec<i32> = FitVec::with_capacity(4);
        assert!(!w.in_range(0));
    }
}
