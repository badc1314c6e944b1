// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-checked access, compiled only with the `unsafe-unchecked` feature.
//!
//! Each function `debug_assert!`s its precondition, so misuse is caught in
//! debug builds; release builds trust the caller.

// Crate imports
use crate::vec::FitVec;

impl<T: Clone> FitVec<T> {
    /// Returns a reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i` must be `< self.len()`.
    #[inline]
    pub unsafe fn at_unchecked(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "index {i} out of bounds (len {})", self.len);
        // SAFETY: caller guarantees i < len <= buf.len()
        unsafe { self.buf.get_unchecked(i) }
    }

    /// Returns a mutable reference to element `i` without bounds checking.
    ///
    /// # Safety
    ///
    /// `i` must be `< self.len()`.
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "index {i} out of bounds (len {})", self.len);
        // SAFETY: caller guarantees i < len <= buf.len()
        unsafe { self.buf.get_unchecked_mut(i) }
    }

    /// Appends `value` without checking for a free slot and without growing.
    ///
    /// # Safety
    ///
    /// `self.len()` must be `< self.capacity()`.
    #[inline]
    pub unsafe fn add_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.buf.len(), "add_unchecked on a full FitVec");
        // SAFETY: caller guarantees len < buf.len()
        unsafe {
            *self.buf.get_unchecked_mut(self.len) = value;
        }
        self.len += 1;
    }
}
