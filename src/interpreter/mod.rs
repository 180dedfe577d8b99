//! Pure read-side functions over a flow and its accumulated session state.
//!
//! Nothing in this module mutates anything or drives navigation: these are
//! the lookups and display computations the presentation layer composes into
//! a rendered slide.

mod reasons;

pub use reasons::result_reasons;

use itertools::Itertools;

use crate::flow::{AnswerMap, FlowDefinition, FlowNode, QuestionNode};

/// Pure node lookup by id.
///
/// On a validated flow every id produced by navigation resolves; an absent
/// result here means a dangling reference, which callers must treat as a
/// configuration error (render nothing) rather than a normal outcome.
pub fn node_by_id<'a>(flow: &'a FlowDefinition, id: &str) -> Option<&'a FlowNode> {
    flow.node(id)
}

/// Resolves a recorded answer value to its display label on a question node.
///
/// Used only for human-readable summaries, never for control flow.
pub fn question_answer_label<'a>(node: &'a QuestionNode, value: &str) -> Option<&'a str> {
    node.option_for_value(value).map(|option| option.label.as_str())
}

/// One resolved line of the answer summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    /// The question title, used as the row label.
    pub label: String,
    /// The selected option's display label.
    pub value: String,
}

/// Assembles the resolved answer summary in the flow's declared order.
///
/// Entries whose question was never answered, or whose recorded value no
/// longer matches an option, are skipped; only question nodes contribute.
pub fn answer_lines(flow: &FlowDefinition, answers: &AnswerMap) -> Vec<AnswerLine> {
    flow.summary_order
        .iter()
        .filter_map(|id| match flow.node(id) {
            Some(FlowNode::Question(question)) => {
                let value = answers.get(id)?;
                let label = question_answer_label(question, value)?;
                Some(AnswerLine {
                    label: question.title.clone(),
                    value: label.to_string(),
                })
            }
            _ => None,
        })
        .collect_vec()
}
