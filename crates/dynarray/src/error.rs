// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarray.

use thiserror::Error;

/// Error type for the fallible `DynArray` operations.
///
/// The infallible counterparts (`reserve()`, `append()`, ...) panic with the
/// message of this error instead of returning it.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DynArrayError {
    /// The requested capacity cannot be represented.
    ///
    /// Raised when doubling would overflow `usize`, or when the buffer size in
    /// bytes would exceed `isize::MAX`.
    #[error("Capacity overflow: requested capacity exceeds the addressable limit")]
    CapacityOverflow,

    /// The allocator could not provide a buffer of the requested capacity.
    #[error("Allocation failed: could not allocate {capacity} slots")]
    AllocationFailed {
        /// Capacity (in elements) that was requested.
        capacity: usize,
    },
}
