use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable chunk identity. Assigned once at creation and carried through every
/// reorder; positions change, ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkId(pub Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintStatus {
    NotLinted,
    Linting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFailure {
    pub message: String,
    /// Absolute line of the failure, when the analyzer reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Analysis state of a single chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ErrorState {
    #[default]
    NotLinted,
    Linting,
    Succeeded {
        #[serde(default)]
        values: Vec<String>,
    },
    Failed {
        #[serde(default)]
        failures: Vec<LintFailure>,
    },
}

impl ErrorState {
    pub fn status(&self) -> LintStatus {
        match self {
            ErrorState::NotLinted => LintStatus::NotLinted,
            ErrorState::Linting => LintStatus::Linting,
            ErrorState::Succeeded { .. } => LintStatus::Succeeded,
            ErrorState::Failed { .. } => LintStatus::Failed,
        }
    }
}

/// One independently-lintable unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    /// 1-based line where this chunk begins in the concatenated program.
    /// Derived from the chunk's position; recomputed after every reorder.
    pub start_line: usize,
    pub text: String,
    #[serde(default)]
    pub error_state: ErrorState,
}

impl Chunk {
    /// Creates a not-yet-linted chunk with a fresh id. `start_line` is left at
    /// 1 until the owning sequence is laid out.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChunkId::new(),
            start_line: 1,
            text: text.into(),
            error_state: ErrorState::NotLinted,
        }
    }

    pub fn status(&self) -> LintStatus {
        self.error_state.status()
    }
}
