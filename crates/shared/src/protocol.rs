use serde::{Deserialize, Serialize};

use crate::domain::{Chunk, ChunkId};

/// Drop result handed over by the drag interaction. A missing destination
/// means the chunk was released outside any drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub source_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_index: Option<usize>,
}

impl ReorderRequest {
    pub fn new(source_index: usize, destination_index: impl Into<Option<usize>>) -> Self {
        Self {
            source_index,
            destination_index: destination_index.into(),
        }
    }

    /// Whether the request would leave the sequence untouched.
    pub fn is_noop(&self) -> bool {
        match self.destination_index {
            None => true,
            Some(destination) => destination == self.source_index,
        }
    }
}

/// Updates applied to the editor state store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StateUpdate {
    Chunks {
        chunks: Vec<Chunk>,
        modifies_text: bool,
    },
    FocusedChunk(Option<usize>),
    /// The results panel no longer reflects the program text.
    RhsOutdated,
}

impl StateUpdate {
    pub fn name(&self) -> &'static str {
        match self {
            StateUpdate::Chunks { .. } => "chunks",
            StateUpdate::FocusedChunk(_) => "focused_chunk",
            StateUpdate::RhsOutdated => "rhs_outdated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseLoop {
    /// Lint only; running waits for an explicit request.
    #[default]
    Manual,
    /// Every edit is linted and then run.
    AutoRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Lint,
    Run,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSegment {
    pub id: ChunkId,
    pub start_line: usize,
}

/// Initial command sent to the analysis backend after the program changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCommand {
    pub kind: AnalysisKind,
    pub program: String,
    pub segments: Vec<ChunkSegment>,
}
