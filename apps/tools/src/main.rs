use std::path::PathBuf;

use anyhow::{Context, Result};
use chunk_core::{
    EditorState, LineCount, ProgramCommandBuilder, ReorderController, ReorderReport, TextLines,
};
use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use shared::{
    domain::Chunk,
    protocol::{AnalysisCommand, ReorderRequest, StateUpdate},
};
use tracing_subscriber::EnvFilter;

mod config;
mod document;

use config::{load_settings, load_settings_from, Settings};
use document::Document;

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; defaults to ./chunkctl.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every chunk with its start line and lint status.
    Layout {
        #[arg(long)]
        document: PathBuf,
    },
    /// Move one chunk and print the resulting document and analysis requests.
    Reorder {
        #[arg(long)]
        document: PathBuf,
        #[arg(long)]
        from: usize,
        /// Omit to simulate a drop outside any target.
        #[arg(long)]
        to: Option<usize>,
        /// Focused chunk index; overrides the one stored in the document.
        #[arg(long)]
        focus: Option<usize>,
        /// Save the reordered document back to its file.
        #[arg(long)]
        write: bool,
    },
}

/// One `layout` line: focus marker, index, start line, line count, status, id.
fn layout_row(index: usize, chunk: &Chunk, focused: bool) -> String {
    let marker = if focused { '*' } else { ' ' };
    format!(
        "{marker}{index:>3} line {:>4} +{:<3} {:?}  {}",
        chunk.start_line,
        TextLines.line_count(chunk),
        chunk.status(),
        chunk.id
    )
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings(),
    };
    init_tracing(&settings);

    match cli.command {
        Command::Layout { document } => {
            let (chunks, focused_chunk) = Document::load(&document)?.into_chunks(&TextLines);
            for (index, chunk) in chunks.iter().enumerate() {
                println!("{}", layout_row(index, chunk, focused_chunk == Some(index)));
            }
        }
        Command::Reorder {
            document,
            from,
            to,
            focus,
            write,
        } => {
            let (chunks, stored_focus) = Document::load(&document)?.into_chunks(&TextLines);
            let focused_chunk = focus.or(stored_focus);

            let (state_tx, state_rx) = bounded::<StateUpdate>(settings.state_queue_capacity);
            let (analysis_tx, analysis_rx) =
                bounded::<AnalysisCommand>(settings.analysis_queue_capacity);
            let controller = ReorderController::new(state_tx, analysis_tx)
                .with_builder(ProgramCommandBuilder::new(settings.response_loop));

            let report = controller
                .handle_reorder(ReorderRequest::new(from, to), &chunks, focused_chunk)
                .context("reorder failed")?;

            let mut state = EditorState::new(chunks, focused_chunk);
            state.drain(&state_rx);

            if report == ReorderReport::Skipped {
                tracing::info!("drop did not move any chunk");
            }

            let reordered = Document::from_chunks(&state.chunks, state.focused_chunk);
            println!("{}", serde_json::to_string_pretty(&reordered)?);
            for cmd in analysis_rx.try_iter() {
                println!("{}", serde_json::to_string(&cmd)?);
            }

            if write {
                reordered.save(&document)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
