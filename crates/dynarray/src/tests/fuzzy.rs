// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::DynArray;

#[derive(Debug, Clone)]
enum Op {
    Append(u16),
    Reserve(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<u16>().prop_map(Op::Append),
        2 => (0..64usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn appends_track_len_and_capacity(values in proptest::collection::vec(any::<u32>(), 0..300)) {
        let mut array = DynArray::new();

        for (i, value) in values.iter().enumerate() {
            array.append(*value);

            prop_assert_eq!(array.len(), i + 1);
            prop_assert!(array.capacity() >= array.len());
            prop_assert_eq!(array[array.len() - 1], *value);
        }

        prop_assert_eq!(array.as_slice(), values.as_slice());
        // Doubling from 0 only ever produces powers of two
        prop_assert!(array.capacity() == 0 || array.capacity().is_power_of_two());
    }

    #[test]
    fn reserve_follows_growth_policy(start in 0..128usize, request in 0..256usize) {
        let mut array: DynArray<u8> = DynArray::with_capacity(start);
        prop_assert_eq!(array.capacity(), start);

        array.reserve(request);

        let expected = match (request, start) {
            (0, 0) => 1,
            (0, capacity) => capacity * 2,
            (request, capacity) if request > capacity => request,
            (_, capacity) => capacity,
        };
        prop_assert_eq!(array.capacity(), expected);
        prop_assert_eq!(array.len(), 0);
    }

    #[test]
    fn operations_keep_len_within_capacity(ops in proptest::collection::vec(op(), 0..200)) {
        let mut array = DynArray::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            match op {
                Op::Append(value) => {
                    array.append(value);
                    model.push(value);
                }
                Op::Reserve(request) => {
                    let before = array.capacity();
                    array.reserve(request);
                    prop_assert!(array.capacity() >= before);
                }
                Op::Clear => {
                    array.clear();
                    model.clear();
                    prop_assert_eq!(array.capacity(), 0);
                }
            }

            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn copies_match_source_and_stay_independent(
        values in proptest::collection::vec(any::<i64>(), 0..64),
        extra in 0..32usize,
    ) {
        let mut source = DynArray::with_capacity(values.len() + extra);
        for value in &values {
            source.append(*value);
        }

        let mut cloned = source.clone();
        let mut assigned = DynArray::new();
        assigned.assign(&source);

        for copy in [&cloned, &assigned] {
            prop_assert_eq!(copy.len(), source.len());
            prop_assert_eq!(copy.capacity(), source.capacity());
            prop_assert_eq!(copy.as_slice(), source.as_slice());
        }

        for i in 0..cloned.len() {
            cloned[i] = cloned[i].wrapping_add(1);
            assigned[i] = assigned[i].wrapping_sub(1);
        }
        prop_assert_eq!(source.as_slice(), values.as_slice());
    }
}
