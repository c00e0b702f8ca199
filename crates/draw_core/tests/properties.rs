//! Property tests for store invariants under arbitrary operation sequences.

use draw_core::{draw_from_range, draw_from_roster, DrawRng, RangeStore, RosterStore};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum RosterOp {
    Add(Vec<String>),
    Draw,
    Reset,
}

#[derive(Debug, Clone)]
enum RangeOp {
    SetN(i64),
    Toggle,
    Draw,
    Reset,
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-E]{1,2}",
        " [A-E] ",
        Just(String::new()),
        Just("\t".to_string()),
    ]
}

fn roster_op_strategy() -> impl Strategy<Value = RosterOp> {
    prop_oneof![
        prop::collection::vec(name_strategy(), 0..6).prop_map(RosterOp::Add),
        Just(RosterOp::Draw),
        Just(RosterOp::Reset),
    ]
}

fn range_op_strategy() -> impl Strategy<Value = RangeOp> {
    prop_oneof![
        (-2i64..12).prop_map(RangeOp::SetN),
        Just(RangeOp::Toggle),
        Just(RangeOp::Draw),
        Just(RangeOp::Draw),
        Just(RangeOp::Reset),
    ]
}

fn check_roster(store: &RosterStore) -> Result<(), TestCaseError> {
    let all: HashSet<&String> = store.all().iter().collect();
    prop_assert_eq!(all.len(), store.all().len(), "all has duplicates");
    prop_assert_eq!(store.all().len(), store.pool().len() + store.history().len());

    let pool: HashSet<&String> = store.pool().iter().collect();
    let history: HashSet<&String> = store.history().iter().collect();
    prop_assert!(pool.is_disjoint(&history));
    prop_assert_eq!(&pool | &history, all);
    Ok(())
}

fn check_range(store: &RangeStore) -> Result<(), TestCaseError> {
    let n = store.n();
    if n == 0 {
        prop_assert!(store.pool().is_empty());
        prop_assert!(store.history().is_empty());
        return Ok(());
    }

    prop_assert!(store.history().iter().all(|v| (1..=n).contains(v)));

    if store.no_repeat() {
        let pool: HashSet<u32> = store.pool().iter().copied().collect();
        let history: HashSet<u32> = store.history().iter().copied().collect();
        prop_assert_eq!(history.len(), store.history().len(), "history repeats");
        prop_assert!(pool.is_disjoint(&history));
        let full: HashSet<u32> = (1..=n).collect();
        prop_assert_eq!(&pool | &history, full);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_roster_invariants_hold(
        ops in prop::collection::vec(roster_op_strategy(), 0..40),
        seed in any::<u64>()
    ) {
        let mut store = RosterStore::new();
        let mut rng = DrawRng::from_seed(seed);

        for op in ops {
            let before = store.all().len();
            match op {
                RosterOp::Add(lines) => { store.add_many(&lines); }
                RosterOp::Draw => { let _ = draw_from_roster(&mut store, &mut rng); }
                RosterOp::Reset => store.reset(),
            }
            prop_assert!(store.all().len() >= before);
            check_roster(&store)?;
        }
    }

    #[test]
    fn test_range_invariants_hold(
        ops in prop::collection::vec(range_op_strategy(), 0..40),
        seed in any::<u64>()
    ) {
        let mut store = RangeStore::new(true);
        let mut rng = DrawRng::from_seed(seed);

        for op in ops {
            match op {
                RangeOp::SetN(n) => { let _ = store.set_n(n); }
                RangeOp::Toggle => { let _ = store.toggle_no_repeat(); }
                RangeOp::Draw => { let _ = draw_from_range(&mut store, &mut rng); }
                RangeOp::Reset => store.reset(),
            }
            check_range(&store)?;
        }
    }

    #[test]
    fn test_add_many_is_idempotent(lines in prop::collection::vec(name_strategy(), 0..12)) {
        let mut once = RosterStore::new();
        once.add_many(&lines);

        let mut twice = RosterStore::new();
        twice.add_many(&lines);
        twice.add_many(&lines);

        prop_assert_eq!(once.all(), twice.all());
    }

    #[test]
    fn test_double_reset_equals_single(
        lines in prop::collection::vec("[a-z]{1,3}", 1..8),
        draws in 0usize..8,
        seed in any::<u64>()
    ) {
        let mut store = RosterStore::new();
        store.add_many(&lines);
        let mut rng = DrawRng::from_seed(seed);
        for _ in 0..draws {
            let _ = draw_from_roster(&mut store, &mut rng);
        }

        store.reset();
        let once = store.clone();
        store.reset();
        prop_assert_eq!(store, once);
    }

    #[test]
    fn test_seeded_range_draws_replay(n in 1i64..50, seed in any::<u64>(), no_repeat in any::<bool>()) {
        let run = || {
            let mut store = RangeStore::new(no_repeat);
            store.set_n(n).unwrap();
            let mut rng = DrawRng::from_seed(seed);
            (0..n).map(|_| draw_from_range(&mut store, &mut rng).unwrap()).collect::<Vec<_>>()
        };
        prop_assert_eq!(run(), run());
    }
}
