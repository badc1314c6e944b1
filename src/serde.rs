// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FitVec`](crate::FitVec).
//!
//! - **Serialize**: as a sequence of the `len` logical elements; spare
//!   capacity is not written.
//! - **Deserialize**: from any sequence. The result is exact-fit
//!   (`capacity == len`) and uses [`Growth::Exact`](crate::Growth::Exact).
//!
//! No bound beyond `T: Clone` is needed on either side; in particular
//! `T: Default` is not required.

// Crate imports
use crate::vec::FitVec;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

// Upper bound on the up-front allocation driven by an untrusted size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Clone + Serialize> Serialize for FitVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Clone,
{
    type Value = FitVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut items = Vec::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            items.push(elem);
        }
        Ok(FitVec::from(items))
    }
}

impl<'de, T> Deserialize<'de> for FitVec<T>
where
    T: Deserialize<'de> + Clone,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
