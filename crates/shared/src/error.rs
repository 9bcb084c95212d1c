use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ChunkId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The caller handed over indices that do not fit the sequence.
    InvalidInput,
    /// The chunk sequence or focus bookkeeping is corrupted; there is no
    /// recovery path.
    InvariantViolation,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("chunk index {index} out of range for {len} chunks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("focused chunk index {index} does not name one of {len} chunks")]
    FocusIndexOutOfRange { index: usize, len: usize },
    #[error("focused chunk {id} is missing after reorder")]
    FocusLost { id: ChunkId },
}

impl ReorderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReorderError::IndexOutOfRange { .. } => ErrorKind::InvalidInput,
            ReorderError::FocusIndexOutOfRange { .. } | ReorderError::FocusLost { .. } => {
                ErrorKind::InvariantViolation
            }
        }
    }

    pub fn is_invariant_violation(&self) -> bool {
        self.kind() == ErrorKind::InvariantViolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_errors_are_invariant_violations() {
        assert!(ReorderError::FocusLost { id: ChunkId::new() }.is_invariant_violation());
        assert!(ReorderError::FocusIndexOutOfRange { index: 4, len: 2 }.is_invariant_violation());
        assert_eq!(
            ReorderError::IndexOutOfRange { index: 9, len: 3 }.kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn messages_name_the_offending_index() {
        let err = ReorderError::IndexOutOfRange { index: 9, len: 3 };
        assert_eq!(err.to_string(), "chunk index 9 out of range for 3 chunks");
    }
}
