// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;

thread_local! {
    static LIVE: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

/// Element type that counts how many of its instances are alive on the
/// current thread.
///
/// Every construction path (`new`, `default`, `clone`) increments the live
/// count and `Drop` decrements it, so a container that leaks or double-drops
/// shows up as a mismatch.
#[derive(Debug, PartialEq, Eq)]
pub struct DropTracker {
    value: u32,
}

impl DropTracker {
    /// Creates a tracked instance holding `value`.
    pub fn new(value: u32) -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self { value }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of instances currently alive on this thread.
    pub fn live() -> usize {
        LIVE.with(Cell::get)
    }

    /// Number of instances dropped on this thread so far.
    pub fn drops() -> usize {
        DROPS.with(Cell::get)
    }
}

impl Default for DropTracker {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for DropTracker {
    fn clone(&self) -> Self {
        Self::new(self.value)
    }
}

impl Drop for DropTracker {
    fn drop(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
        DROPS.with(|drops| drops.set(drops.get() + 1));
    }
}
