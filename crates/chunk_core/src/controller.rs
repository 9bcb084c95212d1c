//! Turns a drop result into state updates and at most one analysis request.

use shared::{
    domain::{Chunk, ChunkId},
    error::ReorderError,
    protocol::{ReorderRequest, StateUpdate},
};
use tracing::{debug, error, info};

use crate::{
    analysis::{CommandBuilder, ProgramCommandBuilder},
    error::ControllerError,
    lines::{LineCount, TextLines},
    reorder::{reorder, Dispatch, ReorderOutcome, Reordered},
    sink::{AnalysisSink, StateSink},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderReport {
    /// The drop did not move anything; nothing was emitted.
    Skipped,
    Applied {
        focused_chunk: Option<usize>,
        reanalysis_requested: bool,
    },
}

pub struct ReorderController<S, A, B = ProgramCommandBuilder, L = TextLines> {
    state: S,
    analysis: A,
    builder: B,
    lines: L,
}

impl<S, A> ReorderController<S, A>
where
    S: StateSink,
    A: AnalysisSink,
{
    pub fn new(state: S, analysis: A) -> Self {
        Self {
            state,
            analysis,
            builder: ProgramCommandBuilder::default(),
            lines: TextLines,
        }
    }
}

impl<S, A, B, L> ReorderController<S, A, B, L> {
    pub fn with_builder<B2: CommandBuilder>(self, builder: B2) -> ReorderController<S, A, B2, L> {
        ReorderController {
            state: self.state,
            analysis: self.analysis,
            builder,
            lines: self.lines,
        }
    }

    pub fn with_line_count<L2: LineCount>(self, lines: L2) -> ReorderController<S, A, B, L2> {
        ReorderController {
            state: self.state,
            analysis: self.analysis,
            builder: self.builder,
            lines,
        }
    }
}

impl<S, A, B, L> ReorderController<S, A, B, L>
where
    S: StateSink,
    A: AnalysisSink,
    B: CommandBuilder,
    L: LineCount,
{
    /// Applies a finished drag to the committed sequence `chunks`.
    ///
    /// `focused_chunk` is the store's focus index; it is turned into an
    /// identity before the move and back into an index afterwards. Nothing is
    /// emitted unless the whole reorder succeeds.
    pub fn handle_reorder(
        &self,
        request: ReorderRequest,
        chunks: &[Chunk],
        focused_chunk: Option<usize>,
    ) -> Result<ReorderReport, ControllerError> {
        if request.is_noop() {
            return Ok(ReorderReport::Skipped);
        }

        let focused_id = focused_identity(chunks, focused_chunk).inspect_err(log_violation)?;
        let outcome = reorder(
            chunks,
            request.source_index,
            request.destination_index,
            focused_id,
            &self.lines,
        )
        .inspect_err(log_violation)?;

        let ReorderOutcome::Reordered(reordered) = outcome else {
            return Ok(ReorderReport::Skipped);
        };

        info!(
            source = request.source_index,
            destination = ?request.destination_index,
            invalidated = ?reordered.invalidated,
            "reordered chunks"
        );

        self.commit(reordered, focused_chunk)
    }

    /// Emits the messages for a computed reorder.
    ///
    /// The store always receives the new sequence followed by at most one
    /// focus update and the stale-results marker; the analysis request, if
    /// any, goes out last.
    pub fn commit(
        &self,
        reordered: Reordered,
        focused_chunk: Option<usize>,
    ) -> Result<ReorderReport, ControllerError> {
        let (focus, command) = match reordered.dispatch {
            Dispatch::Reanalyze => (
                reordered.focus,
                Some(self.builder.initial_command(&reordered.chunks)),
            ),
            Dispatch::UpdateFocus(index) => (Some(index), None),
        };
        let reanalysis_requested = command.is_some();

        self.emit(
            "chunks",
            StateUpdate::Chunks {
                chunks: reordered.chunks,
                modifies_text: true,
            },
        )?;

        if command.is_none() || focus != focused_chunk {
            self.emit("focused_chunk", StateUpdate::FocusedChunk(focus))?;
        }

        self.emit("rhs_outdated", StateUpdate::RhsOutdated)?;

        if let Some(command) = command {
            self.analysis
                .enqueue(command)
                .map_err(|source| ControllerError::Dispatch {
                    message: "analysis command",
                    source,
                })?;
        }

        debug!(focused_chunk = ?focus, reanalysis_requested, "committed reorder");

        Ok(ReorderReport::Applied {
            focused_chunk: focus,
            reanalysis_requested,
        })
    }

    fn emit(&self, message: &'static str, update: StateUpdate) -> Result<(), ControllerError> {
        self.state
            .apply(update)
            .map_err(|source| ControllerError::Dispatch { message, source })
    }
}

fn focused_identity(
    chunks: &[Chunk],
    focused_chunk: Option<usize>,
) -> Result<Option<ChunkId>, ReorderError> {
    let Some(index) = focused_chunk else {
        return Ok(None);
    };
    chunks
        .get(index)
        .map(|chunk| Some(chunk.id))
        .ok_or(ReorderError::FocusIndexOutOfRange {
            index,
            len: chunks.len(),
        })
}

fn log_violation(err: &ReorderError) {
    if err.is_invariant_violation() {
        error!(error = %err, "chunk sequence invariant violated");
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
