// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynArray, DynArrayBehaviour, DynArrayError};

#[test]
fn test_fail_at_allocation() {
    let mut array = DynArray::new();
    array.append(1u8);
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    let result = array.try_append(2);

    assert_eq!(result, Err(DynArrayError::AllocationFailed { capacity: 2 }));
    // Untouched
    assert_eq!(array.capacity(), 1);
    assert_eq!(array.as_slice(), &[1]);
}

#[test]
fn test_fail_at_capacity_overflow() {
    let mut array: DynArray<u8> = DynArray::with_capacity(2);
    array.change_behaviour(DynArrayBehaviour::FailAtCapacityOverflow);

    assert_eq!(array.try_reserve(8), Err(DynArrayError::CapacityOverflow));
    assert_eq!(array.try_grow(), Err(DynArrayError::CapacityOverflow));
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_behaviour_is_sticky() {
    let mut array: DynArray<u8> = DynArray::new();
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    assert!(array.try_grow().is_err());
    assert!(array.try_grow().is_err());

    array.change_behaviour(DynArrayBehaviour::None);
    array.try_grow().expect("Failed to try_grow()");

    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_behaviour_does_not_affect_appends_within_capacity() {
    let mut array = DynArray::with_capacity(2);
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    array.try_append(1u8).expect("Failed to try_append(..)");
    array.try_append(2).expect("Failed to try_append(..)");

    assert!(array.try_append(3).is_err());
    assert_eq!(array.as_slice(), &[1, 2]);
}

#[test]
fn test_behaviour_does_not_affect_noop_reserve() {
    let mut array: DynArray<u8> = DynArray::with_capacity(4);
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    assert!(array.try_reserve(3).is_ok());
}

#[test]
#[should_panic(expected = "Allocation failed")]
fn test_append_panics_on_injected_failure() {
    let mut array: DynArray<u8> = DynArray::new();
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    array.append(1);
}

#[test]
fn test_clone_resets_behaviour() {
    let mut array: DynArray<u8> = DynArray::new();
    array.change_behaviour(DynArrayBehaviour::FailAtAllocation);

    let mut copy = array.clone();

    assert!(copy.try_append(1).is_ok());
}
