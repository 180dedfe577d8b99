use super::definition::FlowDefinition;
use crate::error::FlowConversionError;

/// A trait for custom document models that can be converted into a canonical
/// `FlowDefinition`.
///
/// This is the primary extension point for keeping the engine
/// format-agnostic. The crate ships a JSON document shape (`ui` module) with
/// an `IntoFlow` implementation; by implementing this trait on your own
/// configuration structs you provide the same translation layer for any
/// other source format (YAML, a CMS export, a database row).
///
/// Conversion is shape translation only. Reference checking happens
/// afterwards in [`FlowDefinition::validate`], so an implementation should
/// not try to resolve `next` or result-key references itself.
pub trait IntoFlow {
    /// Consumes the object and converts it into a canonical decision flow.
    fn into_flow(self) -> Result<FlowDefinition, FlowConversionError>;
}
