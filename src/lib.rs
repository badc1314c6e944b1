// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fit-vec`
//!
//! A `no_std` + `alloc`, heap-allocated vector type whose capacity grows
//! **exactly** as far as needed, **with no `unsafe` by
//! default**.
//!
//! The core type, [`FitVec<T>`], owns a single boxed buffer whose length is
//! the capacity and tracks a logical length `len ∈ 0..=capacity`. Capacity is
//! never over-committed unless asked for: an overflowing
//! [`push_back`](FitVec::push_back) reallocates to `len + 1` slots.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - Memory footprint matters more than append throughput.
//! - You want to size the buffer explicitly ([`FitVec::resize`],
//!   [`FitVec::grow`]) and then fill it without reallocation
//!   ([`FitVec::add`]).
//!
//! It may not be the best fit if:
//!
//! - You push many elements one by one without pre-sizing (each overflowing
//!   push is `O(n)` under [`Growth::Exact`]; pick [`Growth::Doubling`] or use
//!   `Vec`).
//! - Element types are not `Clone`: slots outside the logical length must
//!   always hold a value, and removal hands out clones.
//!
//! ## Growth policies
//!
//! - [`Growth::Exact`] (default): reallocate to exactly the required size.
//! - [`Growth::Doubling`]: reallocate to `max(required, 2 * capacity)`.
//!
//! Explicit capacity operations ([`FitVec::resize`], [`FitVec::grow`],
//! [`FitVec::reserve`], [`FitVec::shrink_to_fit`]) are always exact,
//! regardless of the policy.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FitVec<T>`.
//!   - Deserialized vectors are exact-fit.
//!
//! - `unsafe-unchecked`
//!   - Adds `unsafe` accessors without bounds checks
//!     ([`FitVec::at_unchecked`], [`FitVec::at_unchecked_mut`],
//!     [`FitVec::add_unchecked`]) that only `debug_assert!` their
//!     preconditions.
//!   - Lifts `#![forbid(unsafe_code)]` for the crate.
//!
//! ## Error behavior
//!
//! - Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//!   inverted ranges, exactly like built-in slices.
//! - Everything else reports precondition violations as `None` or an
//!   [`Error`] and leaves the vector unchanged:
//!     - [`FitVec::add`] on a full vector → [`Error::Full`]
//!     - [`FitVec::try_get`], [`FitVec::try_remove_at`], [`FitVec::swap`]
//!       out of range → [`Error::OutOfBounds`]
//!     - [`FitVec::resize`]`(0)`, [`FitVec::grow`]`(0)` →
//!       [`Error::InvalidCapacity`]
//!
//! ## Example
//!
//! ```rust
//! use fit_vec::FitVec;
//!
//! let mut v: FitVec<u8> = FitVec::new();
//! v.resize(3).unwrap();
//! v.add(1).unwrap();
//! v.add(2).unwrap();
//! v.push_back(3);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 3);
//!
//! v.push_back(4);
//! assert_eq!(v.capacity(), 4);
//! ```

#![cfg_attr(not(feature = "unsafe-unchecked"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod growth;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use growth::Growth;
pub use iter::IntoIter;
pub use vec::FitVec;
