//! Unit tests for core coverflow types.
mod common;
use common::*;
use coverflow::error::{FlowLoadError, TransitionError};
use coverflow::prelude::*;

#[test]
fn test_tone_as_str() {
    assert_eq!(Tone::Neutral.as_str(), "neutral");
    assert_eq!(Tone::Informational.as_str(), "informational");
    assert_eq!(Tone::Important.as_str(), "important");
    assert_eq!(Tone::default(), Tone::Neutral);
}

#[test]
fn test_yes_no_round_trip() {
    assert_eq!(YesNo::parse("yes"), Some(YesNo::Yes));
    assert_eq!(YesNo::parse("no"), Some(YesNo::No));
    assert_eq!(YesNo::parse("maybe"), None);
    assert_eq!(YesNo::Yes.as_str(), "yes");
    assert_eq!(ExemptionAnswer::NotSure.as_str(), "not_sure");
}

#[test]
fn test_prompt_lines() {
    let single = Prompt::Line("One question.".to_string());
    assert_eq!(single.lines().collect::<Vec<_>>(), vec!["One question."]);

    let multi = Prompt::Lines(vec!["First.".to_string(), "Second.".to_string()]);
    assert_eq!(multi.lines().collect::<Vec<_>>(), vec!["First.", "Second."]);
}

#[test]
fn test_node_accessors() {
    let flow = create_mini_flow();
    let q1 = flow.node("q1").expect("q1 exists");
    assert_eq!(q1.id(), "q1");
    assert_eq!(q1.step(), Some(1));
    assert_eq!(q1.targets().collect::<Vec<_>>(), vec!["q2", "result_not_covered"]);

    let result = flow.node("result_covered").expect("result exists");
    assert_eq!(result.step(), None);
    assert_eq!(result.targets().count(), 0);
}

#[test]
fn test_question_option_lookup() {
    let flow = create_mini_flow();
    let FlowNode::Question(q1) = flow.node("q1").expect("q1 exists") else {
        panic!("q1 should be a question");
    };
    assert_eq!(q1.option_for_value("no").map(|o| o.label.as_str()), Some("No"));
    assert!(q1.option_for_value("unknown").is_none());
    assert_eq!(question_answer_label(q1, "yes"), Some("Yes"));
}

#[test]
fn test_error_display() {
    let err = FlowLoadError::DanglingNodeRef {
        node_id: "q1".to_string(),
        target: "q99".to_string(),
    };
    assert!(err.to_string().contains("q1"));
    assert!(err.to_string().contains("q99"));

    let transition_err = TransitionError::EdgeNotOffered {
        from: "q1".to_string(),
        to: "result_covered".to_string(),
    };
    assert!(transition_err.to_string().contains("q1"));
    assert!(transition_err.to_string().contains("result_covered"));

    let option_err = TransitionError::UnknownOption {
        node_id: "q6".to_string(),
        value: "perhaps".to_string(),
    };
    assert!(option_err.to_string().contains("perhaps"));
}

#[test]
fn test_commodity_question_prompts() {
    assert_eq!(
        CommodityQuestion::RarelyConsumedRaw.prompt("Potatoes"),
        "Is Potatoes rarely consumed raw?"
    );
    assert_eq!(
        CommodityQuestion::ProcessingKillStep.prompt("Apples"),
        "Is Apples for commercial processing with a kill step?"
    );
}

#[test]
fn test_outcome_labels() {
    assert_eq!(
        Outcome::NotCoveredFarm.label(),
        "Not covered by the Produce Safety Rule"
    );
    assert_eq!(Outcome::NotCoveredSales.label(), Outcome::NotCoveredFarm.label());
    assert!(Outcome::Covered.label().contains("YOU ARE COVERED"));
    assert!(Outcome::QualifiedExemption.label().contains("qualified exemption"));
}

#[test]
fn test_status_record_from_result_key() {
    let answers = AnswerMap::new();
    let flags = FlagMap::new();

    let covered = StatusRecord::from_result_key("covered", answers.clone(), flags.clone());
    assert!(covered.covered);
    assert!(covered.exemption_type.is_none());

    let qualified =
        StatusRecord::from_result_key("qualified_exemption", answers.clone(), flags.clone());
    assert!(!qualified.covered);
    assert_eq!(
        qualified.exemption_type.as_deref(),
        Some("qualified_exemption")
    );

    let not_covered = StatusRecord::from_result_key("not_covered", answers, flags);
    assert!(!not_covered.covered);
    assert!(not_covered.exemption_type.is_none());
}
