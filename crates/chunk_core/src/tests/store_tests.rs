use super::*;
use crossbeam_channel::unbounded;

#[test]
fn chunk_updates_bump_text_revision_only_when_text_changes() {
    let mut state = EditorState::new(vec![Chunk::new("a")], None);

    state.apply(StateUpdate::Chunks {
        chunks: vec![Chunk::new("b")],
        modifies_text: false,
    });
    assert_eq!(state.text_revision, 0);

    state.apply(StateUpdate::Chunks {
        chunks: vec![Chunk::new("c")],
        modifies_text: true,
    });
    assert_eq!(state.text_revision, 1);
    assert_eq!(state.chunks[0].text, "c");
}

#[test]
fn drain_applies_queued_updates_in_order() {
    let (tx, rx) = unbounded();
    tx.send(StateUpdate::FocusedChunk(Some(2))).expect("send");
    tx.send(StateUpdate::FocusedChunk(None)).expect("send");
    tx.send(StateUpdate::RhsOutdated).expect("send");

    let mut state = EditorState::default();
    assert_eq!(state.drain(&rx), 3);
    assert_eq!(state.focused_chunk, None);
    assert_eq!(state.rhs, RhsState::Outdated);
    assert_eq!(state.drain(&rx), 0);
}
