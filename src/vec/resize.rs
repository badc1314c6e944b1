// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FitVec};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::mem;

impl<T: Clone> FitVec<T> {
    /// Moves the first `min(len, new_cap)` logical elements out into a `Vec`
    /// with room for `new_cap`, leaving `self` empty. Stale tail values are
    /// dropped; elements are moved, never cloned.
    pub(crate) fn take_prefix(&mut self, new_cap: usize) -> Vec<T> {
        let keep = self.len.min(new_cap);
        self.len = 0;
        let mut buf = mem::take(&mut self.buf).into_vec();
        buf.truncate(keep);
        buf.reserve_exact(new_cap - keep);
        buf
    }

    /// Installs `buf` as the allocation, exactly `buf.len()` slots, of which
    /// the first `len` are logical.
    pub(crate) fn install(&mut self, buf: Vec<T>, len: usize) {
        debug_assert!(len <= buf.len());
        self.buf = buf.into_boxed_slice();
        self.len = len;
    }

    /// Replaces the allocation with one of exactly `new_cap` slots.
    ///
    /// The first `min(len, new_cap)` logical elements are moved over, the
    /// remaining slots are filled with `fill`, and `len` is clamped to
    /// `new_cap`.
    pub(crate) fn reallocate(&mut self, new_cap: usize, fill: T) {
        let mut buf = self.take_prefix(new_cap);
        let keep = buf.len();
        buf.resize(new_cap, fill);
        self.install(buf, keep);
    }

    /// Makes room for at least `required` slots, asking the growth policy for
    /// the new capacity. No-op when the capacity already suffices; `fill` is
    /// only called when a reallocation happens.
    pub(crate) fn grow_for(&mut self, required: usize, fill: impl FnOnce() -> T) {
        let capacity = self.capacity();
        if required > capacity {
            let new_cap = self.growth.next_capacity(capacity, required);
            self.reallocate(new_cap, fill());
        }
    }

    /// Appends `items` as logical elements, reallocating once to the policy's
    /// capacity when they do not fit. Slots past the appended elements are
    /// filled with clones of the last one.
    pub(crate) fn append_growing<I>(&mut self, items: I)
    where
        I: ExactSizeIterator<Item = T>,
    {
        let len = self.len;
        let required = len.saturating_add(items.len());
        let capacity = self.capacity();
        if required <= capacity {
            let mut written = 0;
            for (slot, item) in self.buf[len..required].iter_mut().zip(items) {
                *slot = item;
                written += 1;
            }
            self.len = len + written;
            return;
        }

        let new_cap = self.growth.next_capacity(capacity, required);
        let mut buf = self.take_prefix(new_cap);
        buf.extend(items);
        buf.truncate(new_cap);
        let new_len = buf.len();
        if new_len < new_cap {
            if let Some(last) = buf.last().cloned() {
                buf.resize(new_cap, last);
            }
        }
        self.install(buf, new_len);
    }

    /// Reallocates to exactly `new_cap` slots, filling new slots with `fill`.
    ///
    /// Same contract as [`resize`](FitVec::resize), for element types that
    /// have no `Default`.
    pub fn resize_fill(&mut self, new_cap: usize, fill: T) -> Result<(), Error> {
        if new_cap == 0 {
            return Err(Error::InvalidCapacity);
        }
        if new_cap != self.capacity() {
            self.reallocate(new_cap, fill);
        }
        Ok(())
    }

    /// Reallocates to exactly `len` slots, releasing the allocation when empty.
    pub fn shrink_to_fit(&mut self) {
        let len = self.len;
        if len != self.capacity() {
            let buf = self.take_prefix(len);
            self.install(buf, len);
        }
    }

    /// Promotes every allocated slot to logical content (`len = capacity`).
    ///
    /// The slots in `[old_len..capacity)` hold unspecified values: defaults
    /// written by an earlier resize, or stale values left behind by
    /// [`clear`](FitVec::clear), [`remove_at`](FitVec::remove_at) and
    /// [`pop_back`](FitVec::pop_back). No reallocation takes place.
    #[inline]
    pub fn fit(&mut self) {
        self.len = self.capacity();
    }
}

impl<T: Clone + Default> FitVec<T> {
    /// Reallocates to exactly `new_cap` slots.
    ///
    /// - The first `min(len, new_cap)` elements are preserved.
    /// - Shrinking below `len` truncates the vector to `new_cap`.
    /// - New slots hold `T::default()` and stay outside the logical length.
    /// - Resizing to the current capacity is a no-op.
    ///
    /// Returns [`Error::InvalidCapacity`] if `new_cap == 0`; use
    /// [`shrink_to_fit`](FitVec::shrink_to_fit) on an empty vector to release
    /// its allocation.
    #[inline]
    pub fn resize(&mut self, new_cap: usize) -> Result<(), Error> {
        self.resize_fill(new_cap, T::default())
    }

    /// Resizes to `len + delta` slots.
    ///
    /// This is relative to the *length*, not the capacity, so on a vector
    /// with more than `delta` spare slots it shrinks the allocation.
    ///
    /// Returns [`Error::InvalidCapacity`] if `delta == 0` and
    /// [`Error::CapacityOverflow`] if `len + delta` overflows.
    #[inline]
    pub fn grow(&mut self, delta: usize) -> Result<(), Error> {
        if delta == 0 {
            return Err(Error::InvalidCapacity);
        }
        let new_cap = self.len.checked_add(delta).ok_or(Error::CapacityOverflow)?;
        self.resize(new_cap)
    }

    /// Ensures room for `additional` more elements, reallocating to exactly
    /// `len + additional` slots if needed. Never shrinks.
    ///
    /// Returns [`Error::CapacityOverflow`] if `len + additional` overflows.
    #[inline]
    pub fn reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if required > self.capacity() {
            self.reallocate(required, T::default());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, FitVec};

    #[test]
    fn test_resize_grows_and_preserves_prefix() {
        let mut v: FitVec<i32> = [1, 2, 3].into();
        v.resize(6).unwrap();
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_resize_below_len_truncates() {
        let mut v: FitVec<i32> = [1, 2, 3, 4].into();
        v.resize(2).unwrap();
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_resize_zero_errors_and_is_noop() {
        let mut v: FitVec<i32> = [1, 2].into();
        assert_eq!(v.resize(0), Err(Error::InvalidCapacity));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_resize_to_same_capacity_keeps_allocation() {
        let mut v: FitVec<i32> = FitVec::with_capacity(4);
        v.extend_from_slice(&[1, 2]);
        let before = v.as_ptr();
        v.resize(4).unwrap();
        assert_eq!(v.as_ptr(), before);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_resize_new_slots_are_defaults() {
        let mut v: FitVec<i32> = [9].into();
        v.resize(3).unwrap();
        v.fit();
        assert_eq!(v.as_slice(), &[9, 0, 0]);
    }

    #[test]
    fn test_resize_fill_for_non_default_type() {
        #[derive(Copy, Clone, Debug, PartialEq)]
        struct NoDefault(u8);

        let mut v = FitVec::from_elem(NoDefault(1), 1);
        v.resize_fill(3, NoDefault(0)).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.resize_fill(0, NoDefault(0)), Err(Error::InvalidCapacity));
        v.fit();
        assert_eq!(v.as_slice(), &[NoDefault(1), NoDefault(0), NoDefault(0)]);
    }

    #[test]
    fn test_grow_is_relative_to_len() {
        let mut v: FitVec<i32> = [1, 2].into();
        v.grow(3).unwrap();
        assert_eq!(v.capacity(), 5);
        assert_eq!(v.len(), 2);

        // Ten spare slots, grow(1) lands on len + 1.
        let mut w: FitVec<i32> = FitVec::with_capacity(10);
        w.add(7).unwrap();
        w.grow(1).unwrap();
        assert_eq!(w.capacity(), 2);
        assert_eq!(w.as_slice(), &[7]);
    }

    #[test]
    fn test_grow_rejects_zero_and_overflow() {
        let mut v: FitVec<u8> = [1].into();
        assert_eq!(v.grow(0), Err(Error::InvalidCapacity));
        assert_eq!(v.grow(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_reserve_never_shrinks() {
        let mut v: FitVec<i32> = FitVec::with_capacity(8);
        v.add(1).unwrap();
        v.reserve(2).unwrap();
        assert_eq!(v.capacity(), 8);

        let mut w: FitVec<i32> = [1, 2].into();
        w.reserve(3).unwrap();
        assert_eq!(w.capacity(), 5);
        assert_eq!(w.as_slice(), &[1, 2]);
        assert_eq!(w.reserve(usize::MAX), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut v: FitVec<i32> = FitVec::with_capacity(8);
        v.extend_from_slice(&[1, 2, 3]);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        v.clear();
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_fit_reveals_stale_values_after_clear() {
        let mut v: FitVec<i32> = [2, 3].into();
        v.clear();
        v.fit();
        // The buffer was not touched, so the old values are what comes back.
        assert_eq!(v.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_fit_on_full_vector_is_noop() {
        let mut v: FitVec<i32> = [1, 2].into();
        v.fit();
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_reallocation_moves_owned_elements() {
        use alloc::{string::String, vec};

        let mut v: FitVec<String> = vec![String::from("left"), String::from("right")].into();
        let heap = v[1].as_ptr();
        v.resize(8).unwrap();
        assert_eq!(v[1].as_ptr(), heap);
        v.shrink_to_fit();
        assert_eq!(v[1].as_ptr(), heap);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &["left", "right"]);
    }
}
