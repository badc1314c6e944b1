// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FitVec};

impl<T: Clone> FitVec<T> {
    /// Exchanges the elements at `a` and `b`.
    ///
    /// Unlike `<[T]>::swap` this does not panic: if either index is out of
    /// range it returns [`Error::OutOfBounds`] and nothing is moved.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), Error> {
        if !self.in_range(a) || !self.in_range(b) {
            return Err(Error::OutOfBounds);
        }
        self.as_mut_slice().swap(a, b);
        Ok(())
    }
}
