//! Builds the command that starts a fresh analysis pass.

use shared::{
    domain::Chunk,
    protocol::{AnalysisCommand, AnalysisKind, ChunkSegment, ResponseLoop},
};

pub trait CommandBuilder {
    fn initial_command(&self, chunks: &[Chunk]) -> AnalysisCommand;
}

impl<F> CommandBuilder for F
where
    F: Fn(&[Chunk]) -> AnalysisCommand,
{
    fn initial_command(&self, chunks: &[Chunk]) -> AnalysisCommand {
        self(chunks)
    }
}

/// Sends the whole program, chunk texts joined by newlines, together with the
/// start line of every chunk so results can be mapped back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramCommandBuilder {
    pub response_loop: ResponseLoop,
}

impl ProgramCommandBuilder {
    pub fn new(response_loop: ResponseLoop) -> Self {
        Self { response_loop }
    }
}

impl CommandBuilder for ProgramCommandBuilder {
    fn initial_command(&self, chunks: &[Chunk]) -> AnalysisCommand {
        let kind = match self.response_loop {
            ResponseLoop::Manual => AnalysisKind::Lint,
            ResponseLoop::AutoRun => AnalysisKind::Run,
        };
        let program = chunks
            .iter()
            .map(|chunk| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let segments = chunks
            .iter()
            .map(|chunk| ChunkSegment {
                id: chunk.id,
                start_line: chunk.start_line,
            })
            .collect();

        AnalysisCommand {
            kind,
            program,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{layout, TextLines};

    #[test]
    fn program_joins_chunks_in_order() {
        let mut chunks = vec![Chunk::new("fun f():\n  1\nend"), Chunk::new("f()")];
        layout(&mut chunks, &TextLines);

        let cmd = ProgramCommandBuilder::new(ResponseLoop::AutoRun).initial_command(&chunks);

        assert_eq!(cmd.kind, AnalysisKind::Run);
        assert_eq!(cmd.program, "fun f():\n  1\nend\nf()");
        assert_eq!(cmd.segments[1].id, chunks[1].id);
        assert_eq!(cmd.segments[1].start_line, 4);
    }

    #[test]
    fn manual_loop_only_lints() {
        let cmd = ProgramCommandBuilder::default().initial_command(&[]);
        assert_eq!(cmd.kind, AnalysisKind::Lint);
        assert!(cmd.program.is_empty());
    }
}
