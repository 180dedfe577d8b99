use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::error::FlowLoadError;
use crate::flow::{FlowDefinition, FlowNode};
use crate::ui::RawFlowDocument;

use super::conversion::IntoFlow;

impl FlowDefinition {
    /// Parses a raw JSON flow document and validates every reference.
    ///
    /// This is the only supported way to obtain a definition from JSON; a
    /// document that fails here must never reach a session.
    pub fn from_json(json: &str) -> Result<Self, FlowLoadError> {
        let raw: RawFlowDocument =
            serde_json::from_str(json).map_err(|e| FlowLoadError::JsonParse(e.to_string()))?;
        let flow = raw
            .into_flow()
            .map_err(|e| FlowLoadError::Invalid(e.to_string()))?;
        flow.validate()?;
        Ok(flow)
    }

    /// Reads and parses a flow document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FlowLoadError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            FlowLoadError::Io(format!("'{}': {}", path.as_ref().display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Checks the definition's internal references.
    ///
    /// Fatal findings: a dangling `start`, any `next` that does not resolve
    /// to a node, any result key that was not declared, and summary-order
    /// entries naming unknown nodes. Suspicious-but-legal shapes (duplicate
    /// option values, option-less questions) are only warned about, since
    /// the session can still navigate them.
    pub fn validate(&self) -> Result<(), FlowLoadError> {
        if !self.nodes.contains_key(&self.start) {
            return Err(FlowLoadError::StartNotFound(self.start.clone()));
        }

        for (id, node) in &self.nodes {
            for target in node.targets() {
                if !self.nodes.contains_key(target) {
                    return Err(FlowLoadError::DanglingNodeRef {
                        node_id: id.clone(),
                        target: target.to_string(),
                    });
                }
            }

            match node {
                FlowNode::Result(result) => {
                    if !self.results.contains_key(&result.result_key) {
                        return Err(FlowLoadError::DanglingResultKey {
                            node_id: id.clone(),
                            result_key: result.result_key.clone(),
                        });
                    }
                }
                FlowNode::Question(question) => {
                    if question.options.is_empty() {
                        tracing::warn!(node_id = %id, "question node has no options");
                    }
                    let duplicates: Vec<_> = question
                        .options
                        .iter()
                        .map(|option| option.value.as_str())
                        .duplicates()
                        .collect();
                    if !duplicates.is_empty() {
                        tracing::warn!(
                            node_id = %id,
                            values = ?duplicates,
                            "question node repeats option values"
                        );
                    }
                }
                FlowNode::Intro(intro) => {
                    if intro.actions.is_empty() {
                        tracing::warn!(node_id = %id, "intro node has no actions");
                    }
                }
                FlowNode::Helper(helper) => {
                    if helper.actions.is_empty() {
                        tracing::warn!(node_id = %id, "helper node has no actions");
                    }
                }
            }
        }

        for summary_id in &self.summary_order {
            if !self.nodes.contains_key(summary_id) {
                return Err(FlowLoadError::SummaryRefNotFound(summary_id.clone()));
            }
        }

        Ok(())
    }
}
