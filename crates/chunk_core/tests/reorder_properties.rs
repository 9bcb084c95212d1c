use std::collections::HashMap;

use chunk_core::{
    layout, lines::is_contiguous, reorder, Dispatch, ReorderOutcome, TextLines,
};
use shared::{
    domain::{Chunk, ChunkId, ErrorState, LintFailure, LintStatus},
    error::ReorderError,
};

fn mixed_document() -> Vec<Chunk> {
    let texts = [
        "include lists",
        "fun sum(l):\n  fold(l)\nend",
        "",
        "data Tree:\n  | leaf\n  | node(l, r)\nend",
        "check:\n  sum([list: 1]) is 1\nend",
        "x = 5",
        "y = x + 1",
    ];
    let mut chunks: Vec<Chunk> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut chunk = Chunk::new(*text);
            chunk.error_state = match i % 3 {
                0 => ErrorState::Succeeded {
                    values: vec![i.to_string()],
                },
                1 => ErrorState::Failed {
                    failures: vec![LintFailure {
                        message: format!("failure in chunk {i}"),
                        line: None,
                    }],
                },
                _ => ErrorState::Linting,
            };
            chunk
        })
        .collect();
    layout(&mut chunks, &TextLines);
    chunks
}

fn every_move(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |source| (0..len).map(move |destination| (source, destination)))
}

#[test]
fn identities_are_permuted_for_every_move() {
    let chunks = mixed_document();
    let mut before: Vec<ChunkId> = chunks.iter().map(|c| c.id).collect();
    before.sort();

    for (source, destination) in every_move(chunks.len()) {
        let outcome = reorder(&chunks, source, Some(destination), None, &TextLines)
            .expect("valid move");
        let ReorderOutcome::Reordered(reordered) = outcome else {
            assert_eq!(source, destination);
            continue;
        };

        let mut after: Vec<ChunkId> = reordered.chunks.iter().map(|c| c.id).collect();
        after.sort();
        assert_eq!(after, before, "move {source} -> {destination}");
        assert_eq!(reordered.chunks[destination].id, chunks[source].id);
    }
}

#[test]
fn start_lines_are_contiguous_for_every_move() {
    let chunks = mixed_document();

    for (source, destination) in every_move(chunks.len()) {
        if let ReorderOutcome::Reordered(reordered) =
            reorder(&chunks, source, Some(destination), None, &TextLines).expect("valid move")
        {
            assert_eq!(reordered.chunks[0].start_line, 1);
            assert!(
                is_contiguous(&reordered.chunks, &TextLines),
                "move {source} -> {destination}"
            );
        }
    }
}

#[test]
fn exactly_the_range_between_positions_is_invalidated() {
    let chunks = mixed_document();
    let original: HashMap<ChunkId, ErrorState> = chunks
        .iter()
        .map(|c| (c.id, c.error_state.clone()))
        .collect();

    for (source, destination) in every_move(chunks.len()) {
        let Some(reordered) = reorder(&chunks, source, Some(destination), None, &TextLines)
            .expect("valid move")
            .into_reordered()
        else {
            continue;
        };
        let low = source.min(destination);
        let high = source.max(destination);

        for (index, chunk) in reordered.chunks.iter().enumerate() {
            if (low..=high).contains(&index) {
                assert_eq!(chunk.status(), LintStatus::NotLinted);
            } else {
                assert_eq!(&chunk.error_state, &original[&chunk.id]);
            }
        }
    }
}

#[test]
fn focus_always_resolves_to_the_same_identity() {
    let chunks = mixed_document();

    for focus in 0..chunks.len() {
        let focused = chunks[focus].id;
        for (source, destination) in every_move(chunks.len()) {
            let Some(reordered) =
                reorder(&chunks, source, Some(destination), Some(focused), &TextLines)
                    .expect("valid move")
                    .into_reordered()
            else {
                continue;
            };
            let index = reordered.focus.expect("focus kept");
            assert_eq!(reordered.chunks[index].id, focused);
            assert_eq!(reordered.dispatch, Dispatch::Reanalyze);
        }
    }
}

#[test]
fn five_chunk_focus_scenario() {
    let mut chunks: Vec<Chunk> = ["a", "b", "c", "d", "e"].into_iter().map(Chunk::new).collect();
    layout(&mut chunks, &TextLines);
    let names: HashMap<ChunkId, &str> = chunks
        .iter()
        .map(|c| (c.id, c.text.as_str()))
        .collect();

    let reordered = reorder(&chunks, 0, Some(4), Some(chunks[2].id), &TextLines)
        .expect("reorder")
        .into_reordered()
        .expect("moved");

    let order: Vec<&str> = reordered.chunks.iter().map(|c| names[&c.id]).collect();
    assert_eq!(order, vec!["b", "c", "d", "e", "a"]);
    assert_eq!(reordered.focus, Some(1));
}

#[test]
fn missing_focus_identity_is_fatal_for_every_move() {
    let chunks = mixed_document();
    let stranger = ChunkId::new();

    for (source, destination) in every_move(chunks.len()) {
        let result = reorder(&chunks, source, Some(destination), Some(stranger), &TextLines);
        if source == destination {
            assert_eq!(result, Ok(ReorderOutcome::Unchanged));
        } else {
            assert_eq!(result, Err(ReorderError::FocusLost { id: stranger }));
        }
    }
}
