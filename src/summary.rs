//! Plain-text rendering of a finished session, for the print/export
//! affordance.
//!
//! Purely a rendering concern: everything here is derived from the terminal
//! result definition, the computed reasons, and the resolved answer lines —
//! no new data is produced.

use itertools::Itertools;

use crate::flow::{FlagMap, ResultDefinition};
use crate::interpreter::AnswerLine;

const DOCUMENT_TITLE: &str = "FSMA Produce Safety Rule Coverage Checker";

/// Renders the printable summary document for a terminal result.
pub fn render_document(
    outcome: &ResultDefinition,
    reasons: &[String],
    answers: &[AnswerLine],
    flags: &FlagMap,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(DOCUMENT_TITLE.to_string());
    lines.push(String::new());
    lines.push(outcome.label.clone());
    lines.push(outcome.summary.clone());
    if flags.get("provisional").copied().unwrap_or(false) {
        lines.push("Provisional result based on a \u{201c}not sure\u{201d} response.".to_string());
    }

    lines.push(String::new());
    lines.push("Why you got this result".to_string());
    for reason in reasons {
        lines.push(format!("  - {}", reason));
    }

    if !outcome.reminder_items.is_empty() {
        lines.push(String::new());
        lines.push(
            outcome
                .reminder_title
                .clone()
                .unwrap_or_else(|| "Reminder".to_string()),
        );
        for item in &outcome.reminder_items {
            lines.push(format!("  - {}", item));
        }
    }

    lines.push(String::new());
    lines.push("Your answers".to_string());
    for answer in answers {
        lines.push(format!("  {}: {}", answer.label, answer.value));
    }

    lines.iter().join("\n")
}
