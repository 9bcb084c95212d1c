//! Chunk ordering and lint invalidation for the chunked editor.
//!
//! [`reorder`] is the pure core: it moves one chunk, lays the sequence out
//! again, invalidates the chunks whose context changed and re-resolves focus
//! by identity. [`ReorderController`] wraps it and turns the outcome into
//! messages for the state store and the analysis backend.

pub mod analysis;
pub mod controller;
pub mod error;
pub mod lines;
pub mod reorder;
pub mod sink;
pub mod store;

pub use analysis::{CommandBuilder, ProgramCommandBuilder};
pub use controller::{ReorderController, ReorderReport};
pub use error::{ControllerError, DispatchError};
pub use lines::{layout, LineCount, TextLines};
pub use reorder::{decide_dispatch, reorder, Dispatch, ReorderOutcome, Reordered};
pub use sink::{AnalysisSink, StateSink};
pub use store::{EditorState, RhsState};
