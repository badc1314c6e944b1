// This file is part of fit-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Growth policies used when an append overflows the current capacity.

/// How [`FitVec`](crate::FitVec) picks a new capacity when an append needs
/// more room than is allocated.
///
/// The policy is fixed per instance at construction time (see
/// [`FitVec::with_growth`](crate::FitVec::with_growth)) and can be changed
/// later with [`FitVec::set_growth`](crate::FitVec::set_growth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Growth {
    /// Reallocate to exactly the required number of slots.
    ///
    /// Memory is never over-committed, but a run of `push_back` calls
    /// reallocates on every push: `O(n)` per push, `O(n^2)` overall.
    #[default]
    Exact,
    /// Reallocate to at least twice the current capacity.
    ///
    /// Amortised `O(1)` pushes at the cost of up to 2x unused slots.
    Doubling,
}

impl Growth {
    /// Returns the capacity to allocate when `required` slots are needed and
    /// `current` are allocated.
    ///
    /// Only meaningful when `required > current`; the result is always
    /// `>= required`.
    #[inline]
    pub const fn next_capacity(self, current: usize, required: usize) -> usize {
        match self {
            Self::Exact => required,
            Self::Doubling => {
                let doubled = current.saturating_mul(2);
                if doubled > required { doubled } else { required }
            }
        }
    }
}
