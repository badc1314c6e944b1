// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FitVec`](crate::FitVec).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and panic exactly like slices do. Views never reach past the
//! logical length, even when the allocation is larger.

// Crate imports
use crate::vec::FitVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T: Clone, I: SliceIndex<[T]>> Index<I> for FitVec<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Clone, I: SliceIndex<[T]>> IndexMut<I> for FitVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
