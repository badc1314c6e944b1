// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FitVec;

impl<T: Clone> Extend<T> for FitVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut iter = iter.into_iter();
        let Some(first) = iter.next() else {
            return;
        };
        // One reallocation for everything the iterator promises up front.
        let (lower, _) = iter.size_hint();
        let required = self.len.saturating_add(lower).saturating_add(1);
        self.grow_for(required, || first.clone());
        self.push_back(first);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for FitVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> FitVec<T> {
    /// Appends a clone of every element of `src`, reallocating at most once.
    ///
    /// When `len + src.len()` exceeds the capacity, the growth policy picks
    /// the new capacity (exactly `len + src.len()` under
    /// [`Growth::Exact`](crate::Growth::Exact)).
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        if src.is_empty() {
            return;
        }
        self.append_growing(src.iter().cloned());
    }

    /// Appends all elements of `other` in order. `other` is left untouched.
    #[inline]
    pub fn add_all(&mut self, other: &FitVec<T>) {
        self.extend_from_slice(other.as_slice());
    }
}
