//! End-to-end draw scenarios against the public API.

use draw_core::{
    draw_from_range, draw_from_roster, DrawError, DrawRng, ErrorKind, RangeStore, RosterStore,
    ScriptedRng, MAX_RANGE,
};

#[test]
fn test_roster_draw_empties_pool_then_reset() {
    let mut roster = RosterStore::new();
    roster.add_many(["Ann", "Bob", "Cid"]);

    let mut rng = ScriptedRng::new([1, 0, 0]);
    let drawn: Vec<String> = (0..3)
        .map(|_| draw_from_roster(&mut roster, &mut rng).unwrap())
        .collect();

    assert_eq!(drawn, ["Bob", "Ann", "Cid"]);
    assert_eq!(roster.history(), drawn.as_slice());
    assert!(roster.pool().is_empty());

    let err = draw_from_roster(&mut roster, &mut rng).unwrap_err();
    assert!(matches!(err, DrawError::EmptyPool));

    roster.reset();
    assert_eq!(roster.pool(), ["Ann", "Bob", "Cid"]);
    assert!(roster.history().is_empty());
}

#[test]
fn test_roster_dedup() {
    let mut roster = RosterStore::new();
    roster.add_many(["  Alice ", "Alice", "Bob", "Alice"]);

    assert_eq!(roster.all(), ["Alice", "Bob"]);
    assert_eq!(roster.pool(), ["Alice", "Bob"]);
}

#[test]
fn test_range_set_and_toggle() {
    let mut range = RangeStore::new(true);
    range.set_n(3).unwrap();
    assert_eq!(range.pool(), [1, 2, 3]);

    let v = draw_from_range(&mut range, &mut ScriptedRng::new([2])).unwrap();
    assert_eq!(v, 3);
    assert_eq!(range.pool(), [1, 2]);

    // Turning no-repeat off discards the pool but keeps what was drawn.
    assert!(!range.toggle_no_repeat().unwrap());
    assert!(range.pool().is_empty());
    assert_eq!(range.history(), [3]);

    let v = draw_from_range(&mut range, &mut ScriptedRng::new([1])).unwrap();
    assert_eq!(v, 1);
    assert_eq!(range.history(), [3, 1]);

    // Explicit reset clears the history.
    range.reset();
    assert!(range.history().is_empty());
}

#[test]
fn test_range_domain_error_then_not_configured() {
    let mut range = RangeStore::new(true);
    let err = range.set_n(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);

    let err = draw_from_range(&mut range, &mut ScriptedRng::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotConfigured);
}

#[test]
fn test_export_empty_history_writes_zero_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    RosterStore::new().export_history(&path).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_export_populated_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let mut roster = RosterStore::new();
    roster.add_many(["Ann", "Bob"]);
    let mut rng = ScriptedRng::new([0, 0]);
    draw_from_roster(&mut roster, &mut rng).unwrap();
    draw_from_roster(&mut roster, &mut rng).unwrap();

    roster.export_history(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,Ann\n2,Bob\n");
}

#[test]
fn test_load_file_then_draw() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("class_a.txt");
    std::fs::write(&path, "  Ann \r\n\r\nBob\n\nAnn\n王小明\n").unwrap();

    let mut roster = RosterStore::new();
    let added = roster.load_file(&path).unwrap();

    assert_eq!(added, 4);
    assert_eq!(roster.all(), ["Ann", "Bob", "王小明"]);

    let winner = draw_from_roster(&mut roster, &mut ScriptedRng::new([2])).unwrap();
    assert_eq!(winner, "王小明");
}

#[test]
fn test_large_range_with_repeats_allowed() {
    let mut range = RangeStore::new(false);
    range.set_n(20_000_000).unwrap();
    assert!(range.pool().is_empty());

    let mut rng = DrawRng::from_seed(11);
    for _ in 0..100 {
        let v = draw_from_range(&mut range, &mut rng).unwrap();
        assert!((1..=20_000_000).contains(&v));
    }
    assert_eq!(range.history().len(), 100);

    let top = draw_from_range(&mut range, &mut ScriptedRng::new([20_000_000])).unwrap();
    assert_eq!(top, 20_000_000);

    // No pool of that size may be built, so no-repeat stays off.
    let err = range.toggle_no_repeat().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
    assert!(!range.no_repeat());
    assert_eq!(range.n(), 20_000_000);
    assert_eq!(range.history().len(), 101);

    // The no-repeat bound still applies once the policy is on.
    let mut strict = RangeStore::new(true);
    let err = strict.set_n(i64::from(MAX_RANGE) + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainError);
}
