#![cfg(test)]

// Property tests for ProbingTable kept inside the crate so they can check
// slot-level counters without widening the public API.

use crate::error::InsertError;
use crate::probing_table::ProbingTable;
use crate::slot_index::{FnSlotIndex, SlotIndex};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

// Pool-indexed operations so shrinking moves toward earlier values and
// shorter op lists.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Remove(usize),
    Contains(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=12, proptest::collection::vec("[a-z]{0,6}", 1..=16)).prop_flat_map(
        |(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                3 => idx.clone().prop_map(OpI::Insert),
                2 => idx.clone().prop_map(OpI::Remove),
                1 => prop_oneof![contains_pool, "[a-z]{0,6}"].prop_map(OpI::Contains),
                1 => Just(OpI::Iterate),
            ];
            proptest::collection::vec(op, 1..120)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

fn run_against_model<I: SlotIndex>(
    mut sut: ProbingTable<I>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let capacity = sut.capacity();
    let mut model: HashSet<String> = HashSet::new();

    for op in ops {
        match op {
            OpI::Insert(i) => {
                let v = pool[i].as_str();
                let res = sut.try_insert(v);
                if model.len() == capacity {
                    prop_assert_eq!(res, Err(InsertError::TableFull));
                } else if model.contains(v) {
                    prop_assert_eq!(res, Err(InsertError::DuplicateValue));
                } else {
                    prop_assert_eq!(res, Ok(()));
                    model.insert(v.to_string());
                }
            }
            OpI::Remove(i) => {
                let v = pool[i].as_str();
                prop_assert_eq!(sut.remove(v), model.remove(v));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains(&s), model.contains(&s));
            }
            OpI::Iterate => {
                let s: BTreeSet<String> = sut.iter().map(str::to_string).collect();
                let m: BTreeSet<String> = model.iter().cloned().collect();
                prop_assert_eq!(s, m);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.capacity(), capacity);
        prop_assert!(sut.len() + sut.tombstones() <= capacity);
        prop_assert_eq!(sut.iter().count(), model.len());
    }

    for v in pool {
        prop_assert_eq!(sut.contains(v), model.contains(v));
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashSet
// bounded to the table's capacity. Exercised invariants:
// - Inserts are declined for a full table first, then for duplicates.
// - remove/contains agree with the model, including across compactions.
// - iter yields each live value exactly once.
// - live + tombstones never exceeds capacity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario(), threshold in 0usize..6) {
        let sut = ProbingTable::builder()
            .capacity(capacity)
            .tombstone_threshold(threshold)
            .build()
            .unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: same invariants with every value hashing to one slot, so every
// table is a single cluster and tombstones sit between probe start and
// target.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario(), threshold in 0usize..6) {
        let home = capacity / 2;
        let sut = ProbingTable::builder()
            .tombstone_threshold(threshold)
            .build_with(FnSlotIndex::new(capacity, move |_: &str| home))
            .unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}
