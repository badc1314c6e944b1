// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FitVec`](crate::FitVec).
//!
//! - `IntoIter<T>` takes over the vector's allocation and moves the logical
//!   elements out; stale tail slots are dropped before iteration starts.
//! - `&FitVec` and `&mut FitVec` iterate as slices over `[0..len)`.
//! - Collecting produces an exact-fit vector.

mod from_iterator;

// Crate imports
use crate::vec::FitVec;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `FitVec::into_iter()`.
///
/// Yields the logical elements by value, front to back or back to front.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the elements not yet yielded as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Clone> IntoIterator for &'a FitVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T: Clone> IntoIterator for &'a mut FitVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T: Clone> IntoIterator for FitVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}
