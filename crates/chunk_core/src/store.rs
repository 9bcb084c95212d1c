//! Minimal editor state store: the reducer side of [`StateUpdate`].

use crossbeam_channel::Receiver;
use serde::{Deserialize, Serialize};
use shared::{domain::Chunk, protocol::StateUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RhsState {
    #[default]
    Current,
    Outdated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorState {
    pub chunks: Vec<Chunk>,
    pub focused_chunk: Option<usize>,
    pub rhs: RhsState,
    /// Bumped by every update that changes the program text.
    pub text_revision: u64,
}

impl EditorState {
    pub fn new(chunks: Vec<Chunk>, focused_chunk: Option<usize>) -> Self {
        Self {
            chunks,
            focused_chunk,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::Chunks {
                chunks,
                modifies_text,
            } => {
                self.chunks = chunks;
                if modifies_text {
                    self.text_revision += 1;
                }
            }
            StateUpdate::FocusedChunk(focused_chunk) => self.focused_chunk = focused_chunk,
            StateUpdate::RhsOutdated => self.rhs = RhsState::Outdated,
        }
    }

    /// Applies every update currently queued on `rx` and returns how many were
    /// applied.
    pub fn drain(&mut self, rx: &Receiver<StateUpdate>) -> usize {
        let mut applied = 0;
        for update in rx.try_iter() {
            self.apply(update);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
