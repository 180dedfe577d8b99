//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! coverflow crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use coverflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load and validate a flow definition
//! let flow = FlowDefinition::from_file("data/coverage_flow.json")?;
//!
//! // Walk it
//! let mut wizard = Wizard::new(std::sync::Arc::new(flow));
//! wizard.choose_action("begin")?;
//! wizard.select("no")?;
//! wizard.advance()?;
//!
//! println!("Current slide: {:?}", wizard.view());
//! # Ok(())
//! # }
//! ```

// Flow model and loading
pub use crate::flow::{
    AnswerMap, FlagMap, FlowDefinition, FlowNode, HelperAction, HelperNode, IntroNode, IntoFlow,
    NodeAction, Prompt, QuestionNode, QuestionOption, ResultDefinition, ResultNode, Tone,
};

// Session state machine
pub use crate::session::{Direction, FlowSession, FlowState, StatePatch};

// Presentation adapter
pub use crate::slide::{SlideChrome, SlideView, Wizard};

// Pure interpretation helpers
pub use crate::interpreter::{answer_lines, node_by_id, question_answer_label, result_reasons};
pub use crate::interpreter::AnswerLine;

// Coverage checker
pub use crate::coverage::{
    Commodity, CommodityOutcome, CommodityQuestion, CommodityWalk, CoverageCheck, CoverageWizard,
    Determination, ExemptionAnswer, Outcome, WalkBack, WalkStep, WizardStep, YesNo,
};

// Store contracts
pub use crate::store::{
    MemoryStore, NewRecord, RecordItem, RecordStore, StatusRecord, StatusStore,
};

// Error types
pub use crate::error::{FlowConversionError, FlowLoadError, StoreError, TransitionError};

// Summary rendering
pub use crate::summary::render_document;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
