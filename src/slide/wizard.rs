use std::sync::Arc;

use crate::error::TransitionError;
use crate::flow::{FlowDefinition, FlowNode};
use crate::interpreter::{answer_lines, result_reasons};
use crate::session::{Direction, FlowSession, StatePatch};

use super::view::{SlideChrome, SlideView};

/// The presentation adapter: maps the session's current node to a slide
/// template and wires shell interactions back into state-machine
/// transitions.
///
/// The wizard resolves navigation targets exclusively from the current
/// node's own options and actions, so a well-behaved shell can never request
/// an edge the flow does not declare.
pub struct Wizard {
    session: FlowSession,
}

impl Wizard {
    /// Starts a wizard over a validated flow definition.
    pub fn new(flow: Arc<FlowDefinition>) -> Self {
        Self {
            session: FlowSession::new(flow),
        }
    }

    pub fn session(&self) -> &FlowSession {
        &self.session
    }

    /// The current slide, ready to render.
    pub fn view(&self) -> SlideView<'_> {
        let Some(node) = self.session.current_node() else {
            return SlideView::Incomplete;
        };
        match node {
            FlowNode::Intro(intro) => SlideView::Intro { node: intro },
            FlowNode::Question(question) => SlideView::Question {
                node: question,
                selected: self
                    .session
                    .answers()
                    .get(&question.id)
                    .and_then(|value| question.option_for_value(value)),
            },
            FlowNode::Helper(helper) => SlideView::Helper { node: helper },
            FlowNode::Result(result) => {
                let Some(outcome) = self.session.flow().result(&result.result_key) else {
                    return SlideView::Incomplete;
                };
                let flow = self.session.flow();
                SlideView::Result {
                    outcome,
                    reasons: result_reasons(
                        &result.result_key,
                        self.session.answers(),
                        self.session.flags(),
                    ),
                    answers: answer_lines(flow, self.session.answers()),
                    provisional: self
                        .session
                        .flags()
                        .get("provisional")
                        .copied()
                        .unwrap_or(false),
                }
            }
        }
    }

    /// Shared slide chrome for the current node.
    pub fn chrome(&self) -> SlideChrome {
        let (step, total_steps) = self.session.step_info();
        let on_intro = matches!(self.session.current_node(), Some(FlowNode::Intro(_)));
        SlideChrome {
            step,
            total_steps,
            // Back and restart stay hidden on the opening slide.
            can_go_back: self.session.can_go_back() && !on_intro,
            can_restart: !on_intro,
            direction: self.session.direction(),
        }
    }

    /// Records the option with the given value as selected on the current
    /// question. Selection does not navigate; call [`Wizard::advance`] to
    /// confirm it.
    pub fn select(&mut self, value: &str) -> Result<(), TransitionError> {
        let node_id = self.session.current_node_id().to_string();
        let Some(FlowNode::Question(question)) = self.session.current_node() else {
            return Err(TransitionError::NotAQuestion(node_id));
        };
        if question.option_for_value(value).is_none() {
            return Err(TransitionError::UnknownOption {
                node_id,
                value: value.to_string(),
            });
        }
        let question_id = question.id.clone();
        self.session.select_answer(&question_id, value);
        Ok(())
    }

    /// Confirms the current question's selection and navigates along the
    /// selected option's edge.
    pub fn advance(&mut self) -> Result<(), TransitionError> {
        let node_id = self.session.current_node_id().to_string();
        let Some(FlowNode::Question(question)) = self.session.current_node() else {
            return Err(TransitionError::NotAQuestion(node_id));
        };
        let selected = self
            .session
            .answers()
            .get(&question.id)
            .and_then(|value| question.option_for_value(value));
        let Some(option) = selected else {
            return Err(TransitionError::NothingSelected(node_id));
        };
        let next = option.next.clone();
        self.session.advance(&next, None)
    }

    /// Triggers an intro or helper action: navigation plus, for helper
    /// actions, the action's answers/flags patch.
    pub fn choose_action(&mut self, action_id: &str) -> Result<(), TransitionError> {
        let node_id = self.session.current_node_id().to_string();
        let (next, patch) = match self.session.current_node() {
            Some(FlowNode::Intro(intro)) => {
                let action = intro
                    .actions
                    .iter()
                    .find(|action| action.id == action_id)
                    .ok_or_else(|| TransitionError::UnknownAction {
                        node_id: node_id.clone(),
                        action_id: action_id.to_string(),
                    })?;
                (action.next.clone(), None)
            }
            Some(FlowNode::Helper(helper)) => {
                let action =
                    helper
                        .action(action_id)
                        .ok_or_else(|| TransitionError::UnknownAction {
                            node_id: node_id.clone(),
                            action_id: action_id.to_string(),
                        })?;
                let patch = StatePatch {
                    answers: action.set_answers.clone(),
                    flags: action.set_flags.clone(),
                };
                (action.next.clone(), (!patch.is_empty()).then_some(patch))
            }
            _ => {
                return Err(TransitionError::UnknownAction {
                    node_id,
                    action_id: action_id.to_string(),
                });
            }
        };
        self.session.advance(&next, patch)
    }

    /// Navigates back one snapshot. Returns `false` when already at the
    /// start of the walk.
    pub fn back(&mut self) -> bool {
        self.session.back()
    }

    /// Drops all progress and returns to the flow's start node.
    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn can_go_back(&self) -> bool {
        self.session.can_go_back()
    }

    pub fn direction(&self) -> Direction {
        self.session.direction()
    }
}
