// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to its
// use case. All work happens in Layer 2; this layer only
// converts arguments and prints results.
//
//   1. `prepare` — build vocabulary, weights and windows
//   2. `inspect` — print decoded windows from a prepared run
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

#[derive(Parser, Debug)]
#[command(
    name = "headline-prep",
    version,
    about = "Prepare vocabulary, embedding weights and training windows for headline generation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::PrepareUseCase;

    tracing::info!("Preparing corpus '{}' with vectors '{}'", args.corpus, args.embeddings);

    let summary = PrepareUseCase::new(args.into()).execute()?;

    println!(
        "Prepared {} of {} articles: vocab={} dim={} train_windows={} val_windows={}",
        summary.kept_pairs,
        summary.articles,
        summary.vocab_size,
        summary.embedding_dim,
        summary.train_windows,
        summary.val_windows,
    );
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let use_case = InspectUseCase::new(args.output_dir.as_str())?;
    for w in use_case.decode(args.split.into(), args.limit)? {
        println!("{}  →  {}", w.input, w.target);
    }
    Ok(())
}
