// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FitVec};

impl<T: Clone> FitVec<T> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`. Only `[index..len)` is touched;
    /// the capacity is unchanged. The returned value is a clone of the
    /// element, which stays behind as a stale tail slot.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;

        // Rotate the removed element to position len-1, just outside the new length.
        self.buf[index..len].rotate_left(1);

        self.len = len - 1;
        Some(self.buf[len - 1].clone())
    }

    /// Fallible variant of [`remove_at`](FitVec::remove_at), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.remove_at(index).ok_or(Error::OutOfBounds)
    }

    /// Removes the first element equal to `value` and returns the index it held.
    ///
    /// If no element matches, the vector is left unchanged and `None` is returned.
    #[inline]
    pub fn remove(&mut self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let index = self.index_of(value)?;
        self.remove_at(index);
        Some(index)
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}
