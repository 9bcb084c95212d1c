//! Chunk data model and the messages exchanged between the reorder controller
//! and its collaborators.

pub mod domain;
pub mod error;
pub mod protocol;
