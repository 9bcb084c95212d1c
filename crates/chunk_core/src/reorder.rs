//! Pure reorder step: move, lay out, invalidate, re-resolve focus.

use std::ops::RangeInclusive;

use shared::{
    domain::{Chunk, ChunkId, ErrorState},
    error::ReorderError,
};

use crate::lines::{layout, LineCount};

/// What the caller should do once the new sequence is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Request one fresh analysis of the whole program.
    Reanalyze,
    /// Focus moved to a different chunk; point the store at it instead of
    /// requesting analysis.
    UpdateFocus(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    pub chunks: Vec<Chunk>,
    /// Index of the previously focused chunk in `chunks`.
    pub focus: Option<usize>,
    pub invalidated: RangeInclusive<usize>,
    pub dispatch: Dispatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Nothing moved; the input sequence stays authoritative.
    Unchanged,
    Reordered(Reordered),
}

impl ReorderOutcome {
    pub fn into_reordered(self) -> Option<Reordered> {
        match self {
            ReorderOutcome::Unchanged => None,
            ReorderOutcome::Reordered(reordered) => Some(reordered),
        }
    }
}

/// Moves the chunk at `source` to `destination`, shifting everything in
/// between by one slot.
///
/// The returned sequence is laid out again from line 1, every chunk whose new
/// index lies between `source` and `destination` (inclusive) is reset to
/// [`ErrorState::NotLinted`], and `focused` is looked up again by identity.
/// `chunks` is never modified.
///
/// Invalidation replaces the whole [`ErrorState`], so results or failures
/// attached to an invalidated chunk are dropped along with its status.
pub fn reorder<L: LineCount + ?Sized>(
    chunks: &[Chunk],
    source: usize,
    destination: Option<usize>,
    focused: Option<ChunkId>,
    lines: &L,
) -> Result<ReorderOutcome, ReorderError> {
    let Some(destination) = destination else {
        return Ok(ReorderOutcome::Unchanged);
    };
    if source == destination {
        return Ok(ReorderOutcome::Unchanged);
    }
    for index in [source, destination] {
        if index >= chunks.len() {
            return Err(ReorderError::IndexOutOfRange {
                index,
                len: chunks.len(),
            });
        }
    }

    let mut moved = chunks.to_vec();
    let chunk = moved.remove(source);
    moved.insert(destination, chunk);

    layout(&mut moved, lines);

    let invalidated = invalidation_range(source, destination);
    for chunk in &mut moved[invalidated.clone()] {
        chunk.error_state = ErrorState::NotLinted;
    }

    let focus = resolve_focus(&moved, focused)?;
    let focused_after = focus.map(|index| moved[index].id);
    let dispatch = decide_dispatch(focused, focused_after, focus);

    Ok(ReorderOutcome::Reordered(Reordered {
        chunks: moved,
        focus,
        invalidated,
        dispatch,
    }))
}

/// Closed interval of indices whose textual context changes when a chunk
/// moves from `source` to `destination`.
pub fn invalidation_range(source: usize, destination: usize) -> RangeInclusive<usize> {
    source.min(destination)..=source.max(destination)
}

/// Finds the index of `focused` in `chunks`.
///
/// A focused identity that is not present means the sequence lost a chunk,
/// which is never recoverable.
pub fn resolve_focus(
    chunks: &[Chunk],
    focused: Option<ChunkId>,
) -> Result<Option<usize>, ReorderError> {
    let Some(id) = focused else {
        return Ok(None);
    };
    chunks
        .iter()
        .position(|chunk| chunk.id == id)
        .map(Some)
        .ok_or(ReorderError::FocusLost { id })
}

/// Re-analysis is requested when nothing was focused or when the focused
/// identity survived; a change of focused identity only moves the pointer.
pub fn decide_dispatch(
    before: Option<ChunkId>,
    after: Option<ChunkId>,
    focus: Option<usize>,
) -> Dispatch {
    match (before, after, focus) {
        (None, _, _) => Dispatch::Reanalyze,
        (Some(before), Some(after), Some(index)) if before != after => {
            Dispatch::UpdateFocus(index)
        }
        _ => Dispatch::Reanalyze,
    }
}

#[cfg(test)]
#[path = "tests/reorder_tests.rs"]
mod tests;
