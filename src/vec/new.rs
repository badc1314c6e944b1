// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{growth::Growth, vec::FitVec};

// Alloc imports
use alloc::{boxed::Box, vec};

// Core imports
use core::mem;

impl<T: Clone> Default for FitVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FitVec<T> {
    /// Constructs an empty vector with no allocation and [`Growth::Exact`].
    #[inline]
    pub fn new() -> Self {
        Self::with_growth(Growth::Exact)
    }

    /// Constructs an empty vector with no allocation and the given growth policy.
    // Not `const`: stable Rust cannot build a `Box<[T]>` in a const context.
    #[inline]
    pub fn with_growth(growth: Growth) -> Self {
        Self {
            buf: Box::default(),
            len: 0,
            growth,
        }
    }

    /// Constructs a vector of `len` copies of `value` (`capacity == len`).
    ///
    /// This is the sized constructor for element types without a `Default`.
    #[inline]
    pub fn from_elem(value: T, len: usize) -> Self {
        Self {
            buf: vec![value; len].into_boxed_slice(),
            len,
            growth: Growth::Exact,
        }
    }

    /// Moves the contents out, leaving `self` empty with zero capacity.
    ///
    /// The allocation itself is transferred, not copied. The growth policy
    /// stays with `self` and is also carried by the returned vector.
    #[inline]
    pub fn take(&mut self) -> Self {
        let growth = self.growth;
        mem::replace(self, Self::with_growth(growth))
    }
}

impl<T: Clone + Default> FitVec<T> {
    /// Constructs a vector whose `len` and `capacity` are both `len`.
    ///
    /// Every slot starts out as `T::default()`; callers are expected to
    /// overwrite them through indexing.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self::from_elem(T::default(), len)
    }

    /// Constructs an empty vector with exactly `capacity` allocated slots.
    ///
    /// Pair this with [`add`](FitVec::add) when the final size is known up front.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut v = Self::with_len(capacity);
        v.len = 0;
        v
    }
}
