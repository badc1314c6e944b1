// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{growth::Growth, vec::FitVec};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

impl<T: Clone> FitVec<T> {
    /// Takes ownership of `buf` without copying; `capacity == len == buf.len()`.
    #[inline]
    pub fn from_boxed_slice(buf: Box<[T]>) -> Self {
        Self {
            len: buf.len(),
            buf,
            growth: Growth::Exact,
        }
    }

    /// Converts into a boxed slice holding exactly the logical elements.
    ///
    /// The allocation is handed over as is when `len == capacity`; otherwise
    /// the stale tail is dropped and the allocation shrunk to `len`. Elements
    /// are moved, never cloned.
    #[inline]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        let Self { buf, len, .. } = self;
        let mut buf = buf.into_vec();
        buf.truncate(len);
        buf.into_boxed_slice()
    }

    /// Converts into a `Vec<T>` holding the logical elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.into_boxed_slice().into_vec()
    }
}

impl<T: Clone> From<Box<[T]>> for FitVec<T> {
    fn from(buf: Box<[T]>) -> Self {
        Self::from_boxed_slice(buf)
    }
}

impl<T: Clone> From<Vec<T>> for FitVec<T> {
    /// Adopts the vector's buffer; spare capacity is released first.
    fn from(v: Vec<T>) -> Self {
        Self::from_boxed_slice(v.into_boxed_slice())
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for FitVec<T> {
    fn from(arr: [T; N]) -> Self {
        let buf: Box<[T]> = Box::new(arr);
        Self::from_boxed_slice(buf)
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for FitVec<T> {
    fn from(arr: &[T; N]) -> Self {
        Self::from(&arr[..])
    }
}

impl<T: Clone> From<&[T]> for FitVec<T> {
    fn from(src: &[T]) -> Self {
        Self::from_boxed_slice(Box::from(src))
    }
}

impl<T: Clone> From<FitVec<T>> for Vec<T> {
    fn from(v: FitVec<T>) -> Self {
        v.into_vec()
    }
}

impl<T: Clone> From<FitVec<T>> for Box<[T]> {
    fn from(v: FitVec<T>) -> Self {
        v.into_boxed_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{FitVec, Growth};
    use alloc::{boxed::Box, vec, vec::Vec};

    #[test]
    fn test_from_boxed_slice_adopts_allocation() {
        let b: Box<[u16]> = Box::new([1, 2, 3]);
        let ptr = b.as_ptr();
        let v = FitVec::from_boxed_slice(b);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.growth(), Growth::Exact);
    }

    #[test]
    fn test_from_vec_releases_spare_capacity() {
        let mut src = Vec::with_capacity(10);
        src.extend_from_slice(&[1, 2]);
        let v: FitVec<i32> = src.into();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_from_array_and_slice() {
        let a: FitVec<i32> = [1, 2, 3].into();
        let b: FitVec<i32> = FitVec::from(&[1, 2, 3]);
        let c: FitVec<i32> = FitVec::from(&[1, 2, 3][..]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c.capacity(), 3);

        let empty: FitVec<i32> = FitVec::from([]);
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_into_boxed_slice_reuses_full_buffer() {
        let v: FitVec<i32> = [1, 2, 3].into();
        let ptr = v.as_ptr();
        let b = v.into_boxed_slice();
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(&*b, &[1, 2, 3]);
    }

    #[test]
    fn test_into_boxed_slice_drops_stale_tail() {
        let mut v: FitVec<i32> = FitVec::with_capacity(6);
        v.extend_from_slice(&[4, 5]);
        let b: Box<[i32]> = v.into();
        assert_eq!(b.len(), 2);
        assert_eq!(&*b, &[4, 5]);
    }

    #[test]
    fn test_into_vec() {
        let v: FitVec<i32> = [1, 2, 3].into();
        let out: Vec<i32> = v.into();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_into_vec_moves_owned_values() {
        use alloc::string::String;

        let mut v: FitVec<String> = vec![String::from("kept"), String::from("dropped")].into();
        let heap = v[0].as_ptr();
        v.truncate(1);
        let out = v.into_vec();
        assert_eq!(out, ["kept"]);
        assert_eq!(out[0].as_ptr(), heap);
    }
}
