// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::thread::LocalKey;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static DEALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static LocalKey<Cell<usize>>) {
    // Ignored during thread teardown, when the slot is already gone
    let _ = counter.try_with(|count| count.set(count.get() + 1));
}

fn read(counter: &'static LocalKey<Cell<usize>>) -> usize {
    counter.try_with(Cell::get).unwrap_or(0)
}

/// Global allocator that forwards to `System` and counts calls per thread.
///
/// Only has an effect once installed:
///
/// ```rust,ignore
/// use dynarray_test_utils::CountingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: CountingAllocator = CountingAllocator;
/// ```
///
/// `realloc` is not overridden, so it is counted as one allocation plus one
/// deallocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        bump(&ALLOCATIONS);
        // SAFETY: forwarded verbatim, caller upholds GlobalAlloc::alloc contract
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        bump(&DEALLOCATIONS);
        // SAFETY: forwarded verbatim, ptr was returned by System.alloc with this layout
        unsafe { System.dealloc(ptr, layout) }
    }
}

/// Allocation counters of the current thread.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AllocationStats {
    /// Number of `alloc` calls.
    pub allocations: usize,
    /// Number of `dealloc` calls.
    pub deallocations: usize,
}

impl AllocationStats {
    /// Reads the counters of the current thread.
    pub fn current() -> Self {
        Self {
            allocations: read(&ALLOCATIONS),
            deallocations: read(&DEALLOCATIONS),
        }
    }

    /// Returns the calls performed between `earlier` and `self`.
    pub fn since(self, earlier: Self) -> Self {
        Self {
            allocations: self.allocations.saturating_sub(earlier.allocations),
            deallocations: self.deallocations.saturating_sub(earlier.deallocations),
        }
    }
}

/// Runs `f` and returns its result along with the calls it performed.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, AllocationStats) {
    let before = AllocationStats::current();
    let result = f();
    let delta = AllocationStats::current().since(before);

    (result, delta)
}
