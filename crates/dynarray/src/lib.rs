// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with an explicit, predictable growth policy.
//!
//! `DynArray<T>` owns one contiguous buffer of exactly `capacity()` slots and
//! tracks how many of them are in use (`len()`).
//!
//! # Core Guarantees
//!
//! - **Exact capacity**: the buffer always holds exactly `capacity()` slots.
//!   No allocation happens while capacity is 0.
//! - **Doubling growth**: `append()` on a full array grows `0 → 1 → 2 → 4...`.
//!   `reserve(n)` grows to exactly `n` and never shrinks.
//! - **Deep copies by capacity**: `clone()` and `assign()` allocate
//!   `source.capacity()` slots and copy the elements in use. Copies never share
//!   storage.
//! - **Storage-wide indexing**: `array[i]` reaches any slot in
//!   `[0, capacity())`. Spare slots hold `T::default()`.
//!
//! # Example: Growth
//!
//! ```rust
//! use dynarray::DynArray;
//!
//! let mut array = DynArray::with_capacity(3);
//! assert_eq!(array.capacity(), 3);
//!
//! array.reserve(10);
//! assert_eq!(array.capacity(), 10);
//!
//! // Smaller requests are ignored
//! array.reserve(2);
//! assert_eq!(array.capacity(), 10);
//!
//! // 0 means "double"
//! array.reserve(0);
//! assert_eq!(array.capacity(), 20);
//! # array.append(1u8);
//! ```
//!
//! # Example: Fallible Growth
//!
//! ```rust
//! use dynarray::{DynArray, DynArrayError};
//!
//! fn example() -> Result<(), DynArrayError> {
//!     let mut array = DynArray::try_with_capacity(2)?;
//!     array.try_append(1u32)?;
//!     array.try_append(2)?;
//!     array.try_append(3)?;
//!
//!     assert_eq!(array.capacity(), 4);
//!     assert_eq!(array.try_reserve(usize::MAX), Err(DynArrayError::CapacityOverflow));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `log`: traces every reallocation and release through the `log` facade.
//! - `test-utils`: exposes [`DynArrayBehaviour`] to inject growth failures.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

mod dyn_array;
mod error;

#[cfg(test)]
mod tests;

pub use dyn_array::DynArray;
pub use error::DynArrayError;

#[cfg(any(test, feature = "test-utils"))]
pub use dyn_array::DynArrayBehaviour;
