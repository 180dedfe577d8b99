//! Common test utilities for building flow definitions.
use coverflow::prelude::*;

use ahash::AHashMap;

/// Builds a compact coverage flow in code, small enough to reason about in
/// tests but using the same result keys as the shipped definition.
///
/// Shape: intro -> q1 -> q2 -> q6, with q6's "not sure" option detouring
/// through a helper whose continue action sets the provisional flag.
#[allow(dead_code)]
pub fn create_mini_flow() -> FlowDefinition {
    let mut results = AHashMap::new();
    results.insert(
        "not_covered".to_string(),
        ResultDefinition {
            label: "Not covered".to_string(),
            summary: "The rule does not apply.".to_string(),
            tone: Tone::Informational,
            reminder_title: None,
            reminder_items: Vec::new(),
        },
    );
    results.insert(
        "qualified_exemption".to_string(),
        ResultDefinition {
            label: "Qualified exemption".to_string(),
            summary: "Modified requirements apply.".to_string(),
            tone: Tone::Informational,
            reminder_title: Some("Reminders".to_string()),
            reminder_items: vec!["Keep records".to_string()],
        },
    );
    results.insert(
        "covered".to_string(),
        ResultDefinition {
            label: "Covered".to_string(),
            summary: "The rule applies.".to_string(),
            tone: Tone::Important,
            reminder_title: None,
            reminder_items: Vec::new(),
        },
    );

    let mut nodes = AHashMap::new();
    nodes.insert(
        "intro".to_string(),
        FlowNode::Intro(IntroNode {
            id: "intro".to_string(),
            title: "Welcome".to_string(),
            body: vec!["Answer one question at a time.".to_string()],
            actions: vec![NodeAction {
                id: "begin".to_string(),
                label: "Start".to_string(),
                next: "q1".to_string(),
            }],
        }),
    );
    nodes.insert(
        "q1".to_string(),
        FlowNode::Question(QuestionNode {
            id: "q1".to_string(),
            step: Some(1),
            title: "Farm activities".to_string(),
            prompt: Prompt::Line(
                "Does your farm grow, harvest, pack, or hold produce?".to_string(),
            ),
            helper_text: None,
            options: vec![
                option("Yes", "yes", "q2"),
                option("No", "no", "result_not_covered"),
            ],
        }),
    );
    nodes.insert(
        "q2".to_string(),
        FlowNode::Question(QuestionNode {
            id: "q2".to_string(),
            step: Some(2),
            title: "Produce sales threshold".to_string(),
            prompt: Prompt::Line(
                "Are annual produce sales $25,000 or less (3-year average)?".to_string(),
            ),
            helper_text: Some("Use gross sales.".to_string()),
            options: vec![
                option("Yes", "yes", "result_not_covered"),
                option("No", "no", "q6"),
            ],
        }),
    );
    nodes.insert(
        "q6".to_string(),
        FlowNode::Question(QuestionNode {
            id: "q6".to_string(),
            step: Some(3),
            title: "Qualified exemption check".to_string(),
            prompt: Prompt::Lines(vec![
                "Are annual food sales under $500,000?".to_string(),
                "Do most sales go to qualified end-users?".to_string(),
            ]),
            helper_text: None,
            options: vec![
                option("Yes", "yes", "result_qualified"),
                option("No", "no", "result_covered"),
                option("Not sure", "not_sure", "helper_not_sure"),
            ],
        }),
    );
    let mut continue_flags = FlagMap::new();
    continue_flags.insert("provisional".to_string(), true);
    nodes.insert(
        "helper_not_sure".to_string(),
        FlowNode::Helper(HelperNode {
            id: "helper_not_sure".to_string(),
            step: Some(3),
            title: "Not sure?".to_string(),
            body: vec!["You will need your 3-year sales averages.".to_string()],
            actions: vec![
                HelperAction {
                    id: "answer".to_string(),
                    label: "Go back and answer".to_string(),
                    next: "q6".to_string(),
                    set_answers: AnswerMap::new(),
                    set_flags: FlagMap::new(),
                },
                HelperAction {
                    id: "continue".to_string(),
                    label: "Continue anyway".to_string(),
                    next: "result_covered".to_string(),
                    set_answers: AnswerMap::new(),
                    set_flags: continue_flags,
                },
            ],
        }),
    );
    for (node_id, key) in [
        ("result_not_covered", "not_covered"),
        ("result_qualified", "qualified_exemption"),
        ("result_covered", "covered"),
    ] {
        nodes.insert(
            node_id.to_string(),
            FlowNode::Result(ResultNode {
                id: node_id.to_string(),
                result_key: key.to_string(),
            }),
        );
    }

    FlowDefinition {
        start: "intro".to_string(),
        total_steps: Some(3),
        summary_order: vec!["q1".to_string(), "q2".to_string(), "q6".to_string()],
        results,
        nodes,
    }
}

#[allow(dead_code)]
pub fn option(label: &str, value: &str, next: &str) -> QuestionOption {
    QuestionOption {
        label: label.to_string(),
        value: value.to_string(),
        next: next.to_string(),
    }
}

/// The shipped coverage flow, parsed through the raw document layer.
#[allow(dead_code)]
pub fn load_coverage_flow() -> FlowDefinition {
    FlowDefinition::from_json(include_str!("../data/coverage_flow.json"))
        .expect("shipped coverage flow should load")
}

/// Drives a wizard through the mini flow's intro and the two yes/no
/// questions, leaving it on q6.
#[allow(dead_code)]
pub fn walk_to_q6(wizard: &mut Wizard) {
    wizard.choose_action("begin").expect("intro action");
    wizard.select("yes").expect("select q1");
    wizard.advance().expect("advance q1");
    wizard.select("no").expect("select q2");
    wizard.advance().expect("advance q2");
}
