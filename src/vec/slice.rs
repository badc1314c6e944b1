// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FitVec;

impl<T: Clone> FitVec<T> {
    /// Returns the logical prefix as a shared slice (`&self.buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the logical prefix as a mutable slice (`&mut self.buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[..len]
    }
}
