use pretty_assertions::assert_eq;
use streamflow::{FlowCollection, HistoryLog};

#[test]
fn starts_with_single_snapshot_and_nothing_to_undo() {
    let history = HistoryLog::default();
    assert_eq!(history.current(), &FlowCollection::new());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn undo_returns_previous_commit_and_redo_returns_it_back() {
    let s0 = FlowCollection::new();
    let (s1, _) = s0.create_flow("Cameras").unwrap();

    let mut history = HistoryLog::new(s0.clone());
    history.commit(s1.clone());
    assert!(history.can_undo());
    assert!(!history.can_redo());

    assert_eq!(history.undo(), &s0);
    assert!(history.can_redo());
    assert_eq!(history.redo(), &s1);
    assert_eq!(history.current(), &s1);
}

#[test]
fn undo_at_oldest_and_redo_at_newest_are_noops() {
    let s0 = FlowCollection::new();
    let mut history = HistoryLog::new(s0.clone());
    assert_eq!(history.undo(), &s0);
    assert_eq!(history.redo(), &s0);
    assert_eq!(history.current(), &s0);
}

#[test]
fn commit_after_undo_prunes_redo_branch() {
    let s0 = FlowCollection::new();
    let (s1, _) = s0.create_flow("Cameras").unwrap();
    let (s2, _) = s0.create_flow("Alerts").unwrap();

    let mut history = HistoryLog::new(s0.clone());
    history.commit(s1.clone());
    history.undo();
    history.commit(s2.clone());

    // s1 is gone for good.
    assert!(!history.can_redo());
    assert_eq!(history.current(), &s2);
    assert_eq!(history.undo(), &s0);
    assert_eq!(history.redo(), &s2);
}

#[test]
fn current_always_tracks_the_cursor() {
    let s0 = FlowCollection::new();
    let (s1, id) = s0.create_flow("Cameras").unwrap();
    let s2 = s1.insert_step(id, "file:///motion", None).unwrap();

    let mut history = HistoryLog::new(s0.clone());
    history.commit(s1.clone());
    history.commit(s2.clone());

    assert_eq!(history.current(), &s2);
    history.undo();
    assert_eq!(history.current(), &s1);
    history.undo();
    assert_eq!(history.current(), &s0);
    history.redo();
    assert_eq!(history.current(), &s1);
}
