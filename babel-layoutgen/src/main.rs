//! Library layout generator binary.
//!
//! Reads the raw book metadata dump, computes the deterministic
//! seven-floor layout and writes the versioned JSON artifacts the
//! frontend serves.

mod cli;

use tracing_subscriber::EnvFilter;

use babel_layout::{read_meta_jsonl, Layout, LayoutOptions};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::info!("Babel layout generator v{}", env!("CARGO_PKG_VERSION"));

    let books = read_meta_jsonl(&cli.input)?;
    tracing::info!("Read {} book records from {}", books.len(), cli.input.display());

    let options = LayoutOptions {
        top_subs: cli.top_subs,
        min_sub_books: cli.min_sub_books,
    };
    let layout = Layout::build(&books, &options);
    layout.write_artifacts(&cli.out)?;

    tracing::info!(
        "Layout complete: {} rooms, {} placed books, artifacts under {}",
        layout.rooms_total,
        layout.primary.len(),
        cli.out.display()
    );

    Ok(())
}
