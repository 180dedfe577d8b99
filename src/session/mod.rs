//! The session state machine: one user's walk through a flow.
//!
//! A session owns the mutable trio of current node id, accumulated answers
//! and accumulated flags, plus a history stack of whole-state snapshots for
//! back-navigation. All transitions are synchronous in-memory mutations; the
//! flow definition itself is injected read-only at construction and never
//! changes.

use std::sync::Arc;

use crate::error::TransitionError;
use crate::flow::{AnswerMap, FlagMap, FlowDefinition, FlowNode};

/// The value-copied snapshot unit pushed onto history before every advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowState {
    pub current_node_id: String,
    pub answers: AnswerMap,
    pub flags: FlagMap,
}

/// Last-transition hint for slide animation. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Back,
}

/// A partial answers/flags update merged into session state on advance.
///
/// Merges are shallow: later keys win, keys not named are untouched.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub answers: AnswerMap,
    pub flags: FlagMap,
}

impl StatePatch {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.flags.is_empty()
    }
}

/// A single-user, single-flow navigation session.
pub struct FlowSession {
    flow: Arc<FlowDefinition>,
    state: FlowState,
    history: Vec<FlowState>,
    direction: Direction,
}

impl FlowSession {
    /// Starts a fresh session on a validated flow definition.
    pub fn new(flow: Arc<FlowDefinition>) -> Self {
        let state = FlowState {
            current_node_id: flow.start.clone(),
            answers: AnswerMap::new(),
            flags: FlagMap::new(),
        };
        Self {
            flow,
            state,
            history: Vec::new(),
            direction: Direction::Forward,
        }
    }

    pub fn flow(&self) -> &FlowDefinition {
        &self.flow
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.state.answers
    }

    pub fn flags(&self) -> &FlagMap {
        &self.state.flags
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The node the session is currently on. `None` only if the definition
    /// skipped validation and the cursor landed on a dangling id.
    pub fn current_node(&self) -> Option<&FlowNode> {
        self.flow.node(&self.state.current_node_id)
    }

    pub fn current_node_id(&self) -> &str {
        &self.state.current_node_id
    }

    /// True once any forward navigation has happened since the last restart.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Records the selected value for a question without navigating.
    ///
    /// Re-selecting overwrites the prior value (last-write-wins) and does
    /// not invalidate downstream answers already recorded via the old value;
    /// stale entries persist until restart. No history is pushed and the
    /// cursor does not move. Callers are responsible for only selecting
    /// while a question node is current.
    pub fn select_answer(&mut self, question_id: &str, value: &str) {
        self.state
            .answers
            .insert(question_id.to_string(), value.to_string());
    }

    /// Navigates forward to `next_node_id`, optionally merging a state patch.
    ///
    /// The pre-mutation state is pushed onto history first, so one `back`
    /// restores it exactly. The target must exist in the flow and be offered
    /// by the current node's own options/actions; anything else is rejected
    /// with the state untouched.
    pub fn advance(
        &mut self,
        next_node_id: &str,
        patch: Option<StatePatch>,
    ) -> Result<(), TransitionError> {
        if !self.flow.nodes.contains_key(next_node_id) {
            tracing::warn!(target_id = %next_node_id, "advance to unknown node rejected");
            return Err(TransitionError::UnknownNode(next_node_id.to_string()));
        }

        let offered = self
            .current_node()
            .is_some_and(|node| node.targets().any(|target| target == next_node_id));
        if !offered {
            tracing::warn!(
                from = %self.state.current_node_id,
                to = %next_node_id,
                "advance along unoffered edge rejected"
            );
            return Err(TransitionError::EdgeNotOffered {
                from: self.state.current_node_id.clone(),
                to: next_node_id.to_string(),
            });
        }

        self.history.push(self.state.clone());
        self.direction = Direction::Forward;

        if let Some(patch) = patch {
            self.state.answers.extend(patch.answers);
            self.state.flags.extend(patch.flags);
        }

        tracing::debug!(
            from = %self.state.current_node_id,
            to = %next_node_id,
            "advancing"
        );
        self.state.current_node_id = next_node_id.to_string();
        Ok(())
    }

    /// Pops the most recent snapshot and replaces the whole state with it,
    /// discarding any not-yet-advanced selection on the current node.
    ///
    /// Returns `false` (a no-op) when there is nothing to go back to; back
    /// controls should be hidden in that case.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!(
                    from = %self.state.current_node_id,
                    to = %previous.current_node_id,
                    "navigating back"
                );
                self.state = previous;
                self.direction = Direction::Back;
                true
            }
            None => false,
        }
    }

    /// Drops all progress and returns the session to its initial state.
    pub fn restart(&mut self) {
        tracing::debug!(start = %self.flow.start, "restarting session");
        self.history.clear();
        self.state = FlowState {
            current_node_id: self.flow.start.clone(),
            answers: AnswerMap::new(),
            flags: FlagMap::new(),
        };
        self.direction = Direction::Forward;
    }

    /// Progress display info: the current node's step number and the flow's
    /// declared total. Either side may be absent.
    pub fn step_info(&self) -> (Option<u32>, Option<u32>) {
        let step = self.current_node().and_then(|node| node.step());
        (step, self.flow.total_steps)
    }
}
