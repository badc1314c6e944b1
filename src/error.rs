// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FitVec`.
//!
//! Every precondition the container checks maps to one of these variants.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the checked operations of [`FitVec`](crate::FitVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// [`FitVec::add`](crate::FitVec::add) found no free slot (`len == capacity`).
    Full,
    /// An index was outside the logical range `0..len`.
    OutOfBounds,
    /// A resize target or growth delta was zero.
    InvalidCapacity,
    /// `len + n` does not fit in a `usize`.
    CapacityOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidCapacity => f.write_str("invalid capacity"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
        }
    }
}

impl CoreError for Error {}
