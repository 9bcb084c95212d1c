//! On-disk chunk documents.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chunk_core::{layout, LineCount};
use serde::{Deserialize, Serialize};
use shared::domain::{Chunk, ChunkId, ErrorState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ChunkId>,
    pub text: String,
    #[serde(default)]
    pub error_state: ErrorState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub chunks: Vec<ChunkEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focused_chunk: Option<usize>,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read document '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse document '{}'", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write document '{}'", path.display()))
    }

    /// Builds the laid-out chunk sequence, assigning fresh ids to entries
    /// that have none.
    pub fn into_chunks<L: LineCount>(self, lines: &L) -> (Vec<Chunk>, Option<usize>) {
        let mut chunks: Vec<Chunk> = self
            .chunks
            .into_iter()
            .map(|entry| Chunk {
                id: entry.id.unwrap_or_default(),
                start_line: 1,
                text: entry.text,
                error_state: entry.error_state,
            })
            .collect();
        layout(&mut chunks, lines);
        (chunks, self.focused_chunk)
    }

    pub fn from_chunks(chunks: &[Chunk], focused_chunk: Option<usize>) -> Self {
        Self {
            chunks: chunks
                .iter()
                .map(|chunk| ChunkEntry {
                    id: Some(chunk.id),
                    text: chunk.text.clone(),
                    error_state: chunk.error_state.clone(),
                })
                .collect(),
            focused_chunk,
        }
    }
}
