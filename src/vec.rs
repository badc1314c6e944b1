// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FitVec` type and its inherent API.
//!
//! `FitVec<T>` is a heap-allocated vector that keeps its
//! capacity under explicit control. The backing storage is a single
//! `Box<[T]>` whose length *is* the capacity; a separate logical length marks
//! the valid prefix.

mod extend;
mod from;
mod new;
mod push;
mod remove;
mod resize;
mod search;
mod slice;
mod swap;
#[cfg(feature = "unsafe-unchecked")]
mod unchecked;

// Crate imports
use crate::{error::Error, growth::Growth};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
};

/// A heap-allocated, growable vector with exact-fit growth.
///
/// `FitVec<T>` owns one contiguous allocation of `capacity` slots and tracks
/// a logical length `len <= capacity`:
///
/// - only the prefix `[0..len)` is visible through slices, indexing,
///   iteration, comparison, hashing and serialization;
/// - the tail `[len..capacity)` always holds *some* valid `T`, but its values
///   are unspecified (defaults or fill values written by a reallocation, or
///   stale values left by [`clear`](FitVec::clear) and friends). Only
///   [`fit`](FitVec::fit) exposes them.
///
/// Elements only need to be [`Clone`]. Reallocation moves them; removal
/// returns a clone and leaves the original behind as a stale slot.
///
/// # Growth
///
/// By default ([`Growth::Exact`]) an overflowing [`push_back`](FitVec::push_back)
/// reallocates to *exactly* `len + 1` slots. This keeps memory tight but
/// makes each overflowing push `O(n)`. Use [`FitVec::with_growth`] with
/// [`Growth::Doubling`] for amortised `O(1)` appends, or pre-size the vector
/// with [`with_capacity`](FitVec::with_capacity) / [`resize`](FitVec::resize)
/// and append with [`add`](FitVec::add).
///
/// # Checked and panicking access
///
/// - Indexing (`v[i]`, `v[a..b]`) panics out of range, exactly like slices.
/// - [`get`](FitVec::get), [`try_get`](FitVec::try_get),
///   [`remove_at`](FitVec::remove_at), [`swap`](FitVec::swap) and the
///   capacity operations report violations as `None` / [`Error`] and leave
///   the vector unchanged.
///
/// # Copies
///
/// [`Clone`] produces an independent allocation sized to the source's
/// *length*, so cloning also compacts. Moving a `FitVec` moves only the
/// owning pointer; [`take`](FitVec::take) moves the contents out of a
/// `&mut FitVec` and leaves it empty.
///
/// # Examples
///
/// ```rust
/// use fit_vec::FitVec;
///
/// let mut v = FitVec::new();
/// v.push_back(12);
/// v.push_back(23);
/// v.push_back(30);
/// assert_eq!(v.capacity(), 3);
///
/// assert_eq!(v.remove_at(1), Some(23));
/// assert_eq!(v.as_slice(), &[12, 30]);
/// assert_eq!(v.index_of(&30), Some(1));
/// ```
pub struct FitVec<T: Clone> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
    pub(crate) growth: Growth,
}

impl<T: Clone> FitVec<T> {
    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements [`add`](FitVec::add)
    /// can still accept.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns the size of the allocation in bytes (`capacity * size_of::<T>()`).
    #[inline]
    pub fn memory_size(&self) -> usize {
        self.buf.len() * mem::size_of::<T>()
    }

    /// Returns the growth policy used on overflow.
    #[inline]
    pub const fn growth(&self) -> Growth {
        self.growth
    }

    /// Replaces the growth policy. Existing capacity is left as is.
    #[inline]
    pub fn set_growth(&mut self, growth: Growth) {
        self.growth = growth;
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Like [`get`](FitVec::get), reporting [`Error::OutOfBounds`] instead of `None`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfBounds)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Sets `len = 0`. The allocation and the values in it are kept (not
    /// dropped) until they are overwritten or the vector is resized.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for FitVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FitVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Capacity and growth policy take no part in comparisons.
impl<T: Clone + PartialEq> PartialEq for FitVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Clone + Eq> Eq for FitVec<T> {}
impl<T: Clone + Ord> Ord for FitVec<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: Clone + PartialOrd> PartialOrd for FitVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Clone + Hash> Hash for FitVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone + PartialEq> PartialEq<[T]> for FitVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Clone + PartialEq, const N: usize> PartialEq<[T; N]> for FitVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Clone> Clone for FitVec<T> {
    /// Copies the logical prefix into a fresh allocation of exactly `len` slots.
    fn clone(&self) -> Self {
        Self {
            buf: Box::from(self.as_slice()),
            len: self.len,
            growth: self.growth,
        }
    }
}

impl<T: Clone> Deref for FitVec<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T: Clone> DerefMut for FitVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Clone> AsRef<[T]> for FitVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Clone> AsMut<[T]> for FitVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone> Borrow<[T]> for FitVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Clone> BorrowMut<[T]> for FitVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
