// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `prepare` and `inspect` subcommands and their
// flags. clap's derive macros generate --help text, missing
// argument errors and string → number conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use crate::application::prepare_use_case::PrepareConfig;
use crate::infra::artifact_store::WindowSplit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build vocabulary, embedding weights and training windows
    Prepare(PrepareArgs),

    /// Print decoded windows from a prepared directory
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Trained word vectors in word2vec text format
    #[arg(long, default_value = "data/word_vectors.txt")]
    pub embeddings: String,

    /// JSON Lines file with one {"body", "headline"} object per line
    #[arg(long, default_value = "data/articles.jsonl")]
    pub corpus: String,

    /// Directory to write the prepared artifacts to
    #[arg(long, default_value = "prepared")]
    pub output_dir: String,

    /// Map every word of the embedding model instead of only
    /// the words that occur in the corpus
    #[arg(long)]
    pub full_vocab: bool,

    /// Lowercase tokens (only if the vectors were trained lowercased)
    #[arg(long)]
    pub lowercase: bool,

    /// Number of indices per training window
    #[arg(long, default_value_t = 50)]
    pub maxlen: usize,

    /// Offset between consecutive windows
    #[arg(long, default_value_t = 1)]
    pub step: usize,

    /// Fraction of windows held out for validation
    #[arg(long, default_value_t = 0.2)]
    pub val_fraction: f64,

    /// Seed for the train/validation shuffle
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            embeddings_path: a.embeddings,
            corpus_path:     a.corpus,
            output_dir:      a.output_dir,
            filter_corpus:   !a.full_vocab,
            lowercase:       a.lowercase,
            maxlen:          a.maxlen,
            step:            a.step,
            val_fraction:    a.val_fraction,
            seed:            a.seed,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SplitArg {
    Train,
    Val,
}

impl From<SplitArg> for WindowSplit {
    fn from(s: SplitArg) -> Self {
        match s {
            SplitArg::Train => WindowSplit::Train,
            SplitArg::Val   => WindowSplit::Validation,
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory written by `prepare`
    #[arg(long, default_value = "prepared")]
    pub output_dir: String,

    #[arg(long, value_enum, default_value_t = SplitArg::Train)]
    pub split: SplitArg,

    /// Maximum number of windows to print
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_prepare_args_become_config() {
        let cli = Cli::try_parse_from([
            "headline-prep", "prepare",
            "--embeddings", "vec.txt",
            "--corpus", "a.jsonl",
            "--maxlen", "2",
            "--full-vocab",
        ])
        .unwrap();

        let Commands::Prepare(args) = cli.command else {
            panic!("expected prepare");
        };
        let cfg: PrepareConfig = args.into();
        assert_eq!(cfg.embeddings_path, "vec.txt");
        assert_eq!(cfg.corpus_path, "a.jsonl");
        assert_eq!(cfg.maxlen, 2);
        assert_eq!(cfg.step, 1);
        assert!(!cfg.filter_corpus);
    }

    #[test]
    fn test_inspect_split_flag() {
        let cli = Cli::try_parse_from(["headline-prep", "inspect", "--split", "val"]).unwrap();
        let Commands::Inspect(args) = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(WindowSplit::from(args.split), WindowSplit::Validation);
        assert_eq!(args.limit, 10);
    }
}
