//! Line accounting for chunk sequences.

use shared::domain::Chunk;

/// Reports how many lines a chunk occupies in the concatenated program.
pub trait LineCount {
    fn line_count(&self, chunk: &Chunk) -> usize;
}

impl<F> LineCount for F
where
    F: Fn(&Chunk) -> usize,
{
    fn line_count(&self, chunk: &Chunk) -> usize {
        self(chunk)
    }
}

/// Counts `\n`-separated lines of the chunk text. An empty chunk still takes
/// one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLines;

impl LineCount for TextLines {
    fn line_count(&self, chunk: &Chunk) -> usize {
        chunk.text.split('\n').count()
    }
}

/// Assigns `start_line` to every chunk from position 0 upward so that each
/// chunk begins right after the previous one ends.
pub fn layout<L: LineCount + ?Sized>(chunks: &mut [Chunk], lines: &L) {
    let mut next = 1;
    for chunk in chunks.iter_mut() {
        chunk.start_line = next;
        next += lines.line_count(chunk);
    }
}

/// Whether `chunks` satisfies the contiguity invariant.
pub fn is_contiguous<L: LineCount + ?Sized>(chunks: &[Chunk], lines: &L) -> bool {
    let mut expected = 1;
    for chunk in chunks {
        if chunk.start_line != expected {
            return false;
        }
        expected += lines.line_count(chunk);
    }
    true
}
