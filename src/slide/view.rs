use crate::flow::{HelperNode, IntroNode, QuestionNode, QuestionOption, ResultDefinition};
use crate::interpreter::AnswerLine;
use crate::session::Direction;

/// Everything a shell needs to render the current step of a session.
///
/// One variant per interaction template. The engine computes these; drawing
/// them (terminal, web, print) is entirely the shell's concern.
#[derive(Debug)]
pub enum SlideView<'a> {
    Intro {
        node: &'a IntroNode,
    },
    Question {
        node: &'a QuestionNode,
        /// The option matching the recorded answer, if any — "selected but
        /// not yet confirmed" until the shell triggers an advance.
        selected: Option<&'a QuestionOption>,
    },
    Helper {
        node: &'a HelperNode,
    },
    Result {
        outcome: &'a ResultDefinition,
        reasons: Vec<String>,
        answers: Vec<AnswerLine>,
        provisional: bool,
    },
    /// Degraded view: the cursor or a result key did not resolve. The shell
    /// should prompt the user to restart rather than render a result.
    Incomplete,
}

/// Shell chrome shared by every slide: progress, back/restart affordances,
/// and the last-transition direction for animation.
#[derive(Debug, Clone, Copy)]
pub struct SlideChrome {
    pub step: Option<u32>,
    pub total_steps: Option<u32>,
    pub can_go_back: bool,
    pub can_restart: bool,
    pub direction: Direction,
}
