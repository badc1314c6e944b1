// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FitVec};

impl<T: Clone> FitVec<T> {
    /// Appends `value`, growing the allocation according to the growth policy
    /// when it is full.
    ///
    /// With [`Growth::Exact`](crate::Growth::Exact) an overflowing push
    /// reallocates to exactly `len + 1` slots and moves `value` in without
    /// cloning it.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.append_growing(core::iter::once(value));
    }

    /// Appends `value` into already-allocated space. Never reallocates.
    ///
    /// Returns [`Error::Full`] if `len == capacity`, leaving the vector unchanged.
    #[inline]
    pub fn add(&mut self, value: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            return Err(Error::Full);
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, if any. The capacity is kept.
    ///
    /// The returned value is a clone; the slot keeps the original until it
    /// is overwritten or the allocation is resized.
    #[inline]
    #[must_use]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len].clone())
        }
    }
}
