// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarray crates.
//!
//! - [`CountingAllocator`]: a `#[global_allocator]` wrapper around `System`
//!   that counts allocations and deallocations per thread.
//! - [`DropTracker`]: a `Clone + Default` element type that counts its live
//!   instances per thread.
//!
//! All counters are thread-local, so tests running in parallel do not
//! observe each other.
//!
//! ## License
//!
//! GPL-3.0-only

mod counting_allocator;
mod drop_tracker;

pub use counting_allocator::{AllocationStats, CountingAllocator, measure};
pub use drop_tracker::DropTracker;
