use shared::error::ReorderError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("{target} queue is full")]
    QueueFull { target: &'static str },
    #[error("{target} receiver disconnected")]
    Disconnected { target: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Reorder(#[from] ReorderError),
    #[error("failed to dispatch {message}: {source}")]
    Dispatch {
        message: &'static str,
        #[source]
        source: DispatchError,
    },
}
