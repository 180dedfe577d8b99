//! # Coverflow - Decision-Flow Engine for Coverage Wizards
//!
//! **Coverflow** is a decision-flow engine and session state machine for
//! produce-safety coverage wizards. A static, declarative flow definition —
//! a graph of intro, question, helper, and result nodes — is validated at
//! load time and then interpreted by a single-user session that supports
//! forward navigation, exact-snapshot back-navigation, restart, and
//! cross-cutting flag accumulation.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical
//! `FlowDefinition`; the primary workflow is:
//!
//! 1.  **Load Your Flow**: Parse the shipped JSON document format, or your
//!     own format, into a definition. Custom formats implement the
//!     `IntoFlow` trait to provide the translation layer.
//! 2.  **Validate**: Loading through `FlowDefinition::from_json` checks every
//!     `next` and result-key reference. A dangling reference is a fatal load
//!     error, never a mid-session surprise.
//! 3.  **Walk**: Create a `Wizard` over the definition. It presents one
//!     `SlideView` at a time and turns shell interactions (select an option,
//!     confirm it, trigger an action, go back, start over) into
//!     state-machine transitions.
//! 4.  **Finish**: On a result node the wizard resolves the outcome's
//!     display content, its justification sentences, and the ordered answer
//!     summary, ready for rendering or printing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coverflow::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     // 1. Load and validate the flow definition.
//!     let flow = Arc::new(FlowDefinition::from_file("data/coverage_flow.json")?);
//!
//!     // 2. Start a wizard session.
//!     let mut wizard = Wizard::new(flow);
//!
//!     // 3. Drive it: the intro's action, then answer the first question.
//!     wizard.choose_action("begin")?;
//!     wizard.select("no")?; // recorded, but not yet confirmed
//!     wizard.advance()?;    // confirm and navigate the selected edge
//!
//!     // 4. Render whatever the session is now on.
//!     match wizard.view() {
//!         SlideView::Result { outcome, reasons, .. } => {
//!             println!("{}", outcome.label);
//!             for reason in reasons {
//!                 println!("  - {}", reason);
//!             }
//!         }
//!         other => println!("Still walking: {:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The commodity sub-flow — a repeated three-question mini-flow per produce
//! commodity, aggregated into the top-level classification — lives in the
//! [`coverage`] module together with the ordered outcome rule chain.

pub mod coverage;
pub mod error;
pub mod flow;
pub mod interpreter;
pub mod prelude;
pub mod session;
pub mod slide;
pub mod store;
pub mod summary;
pub mod ui;
