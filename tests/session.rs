//! Session state machine tests: history, transitions, and their laws.
mod common;
use common::*;
use coverflow::error::TransitionError;
use coverflow::prelude::*;
use std::sync::Arc;

fn new_session() -> FlowSession {
    FlowSession::new(Arc::new(create_mini_flow()))
}

#[test]
fn test_session_starts_at_flow_start() {
    let session = new_session();
    assert_eq!(session.current_node_id(), "intro");
    assert!(session.answers().is_empty());
    assert!(session.flags().is_empty());
    assert!(!session.can_go_back());
    assert_eq!(session.direction(), Direction::Forward);
}

#[test]
fn test_back_is_exact_inverse_of_advance() {
    let mut session = new_session();

    // Snapshot before each advance, then unwind and compare after each back.
    let mut snapshots: Vec<FlowState> = Vec::new();

    snapshots.push(session.state().clone());
    session.advance("q1", None).expect("intro -> q1");

    session.select_answer("q1", "yes");
    snapshots.push(session.state().clone());
    session.advance("q2", None).expect("q1 -> q2");

    session.select_answer("q2", "no");
    snapshots.push(session.state().clone());
    session.advance("q6", None).expect("q2 -> q6");

    assert_eq!(session.history_depth(), 3);

    while let Some(expected) = snapshots.pop() {
        assert!(session.back());
        assert_eq!(session.state().current_node_id, expected.current_node_id);
        assert_eq!(session.state().answers, expected.answers);
        assert_eq!(session.state().flags, expected.flags);
    }
    assert!(!session.can_go_back());
}

#[test]
fn test_back_discards_unconfirmed_selection() {
    let mut session = new_session();
    session.advance("q1", None).expect("intro -> q1");

    // Select on q1 without advancing, then go back: the selection is gone.
    session.select_answer("q1", "yes");
    assert!(session.back());
    assert_eq!(session.current_node_id(), "intro");
    assert!(session.answers().get("q1").is_none());
    assert_eq!(session.direction(), Direction::Back);
}

#[test]
fn test_back_on_empty_history_is_noop() {
    let mut session = new_session();
    assert!(!session.back());
    assert_eq!(session.current_node_id(), "intro");
    assert_eq!(session.direction(), Direction::Forward);
}

#[test]
fn test_restart_resets_everything() {
    let mut session = new_session();
    session.advance("q1", None).expect("intro -> q1");
    session.select_answer("q1", "yes");
    session.advance("q2", None).expect("q1 -> q2");

    session.restart();
    assert_eq!(session.current_node_id(), "intro");
    assert!(session.answers().is_empty());
    assert!(session.flags().is_empty());
    assert_eq!(session.history_depth(), 0);
    assert_eq!(session.direction(), Direction::Forward);

    // Idempotent: restarting a fresh session changes nothing.
    session.restart();
    assert_eq!(session.current_node_id(), "intro");
    assert_eq!(session.history_depth(), 0);
}

#[test]
fn test_answer_overwrite_is_last_write_wins() {
    let mut session = new_session();
    session.advance("q1", None).expect("intro -> q1");
    let depth = session.history_depth();

    session.select_answer("q1", "yes");
    session.select_answer("q1", "no");

    assert_eq!(session.answers().get("q1").map(String::as_str), Some("no"));
    assert_eq!(session.history_depth(), depth);
    assert_eq!(session.current_node_id(), "q1");
}

#[test]
fn test_advance_merges_patch_shallowly() {
    let mut session = new_session();
    session.advance("q1", None).expect("intro -> q1");
    session.select_answer("q1", "yes");

    let mut patch = StatePatch::default();
    patch.answers.insert("q1".to_string(), "no".to_string());
    patch.flags.insert("provisional".to_string(), true);
    session.advance("q2", Some(patch)).expect("q1 -> q2 with patch");

    // Later keys win; untouched keys stay.
    assert_eq!(session.answers().get("q1").map(String::as_str), Some("no"));
    assert_eq!(session.flags().get("provisional"), Some(&true));

    // The pre-patch snapshot is what back restores.
    assert!(session.back());
    assert_eq!(session.answers().get("q1").map(String::as_str), Some("yes"));
    assert!(session.flags().get("provisional").is_none());
}

#[test]
fn test_advance_rejects_unknown_node() {
    let mut session = new_session();
    let err = session.advance("nowhere", None).unwrap_err();
    assert_eq!(err, TransitionError::UnknownNode("nowhere".to_string()));
    assert_eq!(session.current_node_id(), "intro");
    assert_eq!(session.history_depth(), 0);
}

#[test]
fn test_advance_rejects_unoffered_edge() {
    let mut session = new_session();
    // q6 exists, but the intro node does not offer it.
    let err = session.advance("q6", None).unwrap_err();
    assert_eq!(
        err,
        TransitionError::EdgeNotOffered {
            from: "intro".to_string(),
            to: "q6".to_string(),
        }
    );
    assert_eq!(session.current_node_id(), "intro");
    assert_eq!(session.history_depth(), 0);
}

#[test]
fn test_step_info() {
    let mut session = new_session();
    assert_eq!(session.step_info(), (None, Some(3)));
    session.advance("q1", None).expect("intro -> q1");
    assert_eq!(session.step_info(), (Some(1), Some(3)));
}

#[test]
fn test_re_answer_does_not_truncate_downstream() {
    // Documented hazard: re-answering an earlier question through the API
    // leaves already-recorded downstream answers untouched until restart.
    let mut session = new_session();
    session.advance("q1", None).expect("intro -> q1");
    session.select_answer("q1", "yes");
    session.advance("q2", None).expect("q1 -> q2");
    session.select_answer("q2", "no");
    session.advance("q6", None).expect("q2 -> q6");
    session.select_answer("q6", "no");

    session.select_answer("q1", "no");

    assert_eq!(session.answers().get("q1").map(String::as_str), Some("no"));
    assert_eq!(session.answers().get("q2").map(String::as_str), Some("no"));
    assert_eq!(session.answers().get("q6").map(String::as_str), Some("no"));
    assert_eq!(session.current_node_id(), "q6");
}
