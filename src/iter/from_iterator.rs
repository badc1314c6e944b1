// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FitVec;

// Alloc imports
use alloc::vec::Vec;

impl<T: Clone> FromIterator<T> for FitVec<T> {
    /// Collects every element into an exact-fit allocation (`capacity == len`).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
