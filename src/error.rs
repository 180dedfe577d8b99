use thiserror::Error;

/// Errors that can occur while loading and validating a flow definition.
///
/// All of these are fatal at load time: an engine must refuse to start a
/// session on a definition that produced one of these, rather than fail
/// lazily mid-navigation.
#[derive(Error, Debug, Clone)]
pub enum FlowLoadError {
    #[error("Failed to read flow document: {0}")]
    Io(String),

    #[error("Failed to parse flow JSON: {0}")]
    JsonParse(String),

    #[error("Start node '{0}' was not found in the flow")]
    StartNotFound(String),

    #[error("Node '{node_id}' references node '{target}', which was not found in the flow")]
    DanglingNodeRef { node_id: String, target: String },

    #[error("Result node '{node_id}' references result key '{result_key}', which was not declared")]
    DanglingResultKey { node_id: String, result_key: String },

    #[error("Summary order references node '{0}', which was not found in the flow")]
    SummaryRefNotFound(String),

    #[error("Invalid flow document: {0}")]
    Invalid(String),
}

/// Errors that can occur when converting a custom document format into a
/// canonical `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid custom flow data: {0}")]
    ValidationError(String),
}

/// Errors produced by rejected session transitions.
///
/// A rejected transition is a programmer error in the caller, never a user
/// error: the session leaves its state untouched and the caller should treat
/// the diagnostic as a bug report against its own wiring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Node '{0}' does not exist in the flow")]
    UnknownNode(String),

    #[error("Node '{from}' offers no transition to node '{to}'")]
    EdgeNotOffered { from: String, to: String },

    #[error("Node '{0}' is not a question")]
    NotAQuestion(String),

    #[error("Question '{node_id}' has no option with value '{value}'")]
    UnknownOption { node_id: String, value: String },

    #[error("No option is selected on question '{0}'")]
    NothingSelected(String),

    #[error("Node '{node_id}' has no action '{action_id}'")]
    UnknownAction { node_id: String, action_id: String },
}

/// Errors surfaced by the status/record store collaborators.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Record {0} was not found")]
    NotFound(u64),

    #[error("Store backend failure: {0}")]
    Backend(String),
}
