use thiserror::Error;

/// Errors that can occur while routing an action into a request description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Deleting a record requires the confirmation flag to be set")]
    ConfirmationRequired,

    #[error("Missing required parameter '{name}'")]
    MissingParameter { name: &'static str },
}

/// Errors that can occur while executing a request against the backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Backend responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request could not be completed: {0}")]
    Request(String),

    #[error("Backend response could not be decoded: {0}")]
    Decode(String),
}

impl TransportError {
    /// The HTTP status code carried by the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Any failure a single batch item can run into, from routing through transport.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("{0}")]
    Dispatch(#[from] DispatchError),

    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl ActionError {
    /// The HTTP status code behind this failure, when the transport saw one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ActionError::Transport(err) => err.status(),
            ActionError::Dispatch(_) => None,
        }
    }
}

/// A batch aborted by its first hard failure, naming the triggering item.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Batch item {index} failed: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: ActionError,
}
