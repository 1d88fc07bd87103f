// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates one preparation run end to end:
//
//   Step 1: Load word vectors          (Layer 6 - infra)
//   Step 2: Load articles              (Layer 4 - data)
//   Step 3: Tokenise                   (Layer 4 - data)
//   Step 4: Build vocabulary mappings  (Layer 4 - data)
//   Step 5: Embedding weight matrix    (Layer 4 - data)
//   Step 6: Vectorise texts            (Layer 4 - data)
//   Step 7: Format training windows    (Layer 4 - data)
//   Step 8: Train / validation split   (Layer 4 - data)
//   Step 9: Persist artifacts          (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::{tokenize_articles, JsonlArticleLoader},
    mapping::{create_mapping_dicts, VocabFilter},
    preprocessor::Preprocessor,
    splitter::split_train_val,
    vectorizer::vectorize_texts,
    weights::gen_embedding_weights,
    windows::{format_inputs, TrainingWindows},
};
use crate::domain::traits::{ArticleSource, EmbeddingModel};
use crate::infra::{
    artifact_store::{ArtifactStore, WindowSplit},
    word_vectors::WordVectors,
};

// ─── Preparation Configuration ───────────────────────────────────────────────
// Serialisable so it can be stored next to the artifacts it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// word2vec text format file
    pub embeddings_path: String,
    /// JSON Lines file of {"body", "headline"} objects
    pub corpus_path:     String,
    pub output_dir:      String,
    /// Restrict the vocabulary to words used in the corpus
    pub filter_corpus:   bool,
    pub lowercase:       bool,
    pub maxlen:          usize,
    pub step:            usize,
    /// Fraction of windows held out for validation
    pub val_fraction:    f64,
    pub seed:            u64,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            embeddings_path: "data/word_vectors.txt".to_string(),
            corpus_path:     "data/articles.jsonl".to_string(),
            output_dir:      "prepared".to_string(),
            filter_corpus:   true,
            lowercase:       false,
            maxlen:          50,
            step:            1,
            val_fraction:    0.2,
            seed:            42,
        }
    }
}

/// Counts reported at the end of a run and saved as summary.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepSummary {
    pub articles:      usize,
    pub kept_pairs:    usize,
    pub vocab_size:    usize,
    pub embedding_dim: usize,
    pub train_windows: usize,
    pub val_windows:   usize,
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Load the configured inputs and run the pipeline.
    pub fn execute(&self) -> Result<PrepSummary> {
        let cfg = &self.config;

        // ── Step 1: Word vectors ──────────────────────────────────────────────
        let model = WordVectors::load_text(&cfg.embeddings_path)?;

        let loader = JsonlArticleLoader::new(&cfg.corpus_path);

        self.execute_with(&model, &loader)
    }

    /// Run the pipeline against an already loaded model and an
    /// arbitrary article source.
    pub fn execute_with<M, S>(&self, model: &M, source: &S) -> Result<PrepSummary>
    where
        M: EmbeddingModel + ?Sized,
        S: ArticleSource + ?Sized,
    {
        let cfg = &self.config;

        // ── Step 2: Articles ──────────────────────────────────────────────────
        let articles = source.load_all()?;
        tracing::info!("Loaded {} articles", articles.len());

        // ── Step 3: Tokenise ──────────────────────────────────────────────────
        let preprocessor = Preprocessor::new().with_lowercase(cfg.lowercase);
        let corpus       = tokenize_articles(&articles, &preprocessor);

        // ── Step 4: Vocabulary mappings ───────────────────────────────────────
        let filter = if cfg.filter_corpus {
            VocabFilter::Corpus { bodies: &corpus.bodies, headlines: &corpus.headlines }
        } else {
            VocabFilter::Full
        };
        let mappings = create_mapping_dicts(model, filter);

        // ── Step 5: Embedding weights ─────────────────────────────────────────
        let weights = gen_embedding_weights(&mappings.word_to_idx, &mappings.word_to_vector)
            .context("Cannot build embedding weights")?;

        // ── Step 6: Vectorise ─────────────────────────────────────────────────
        let vectorized = vectorize_texts(&corpus.bodies, &corpus.headlines, &mappings.word_to_idx)
            .context("Cannot vectorise corpus")?;
        tracing::info!(
            "Kept {} of {} article pairs after vectorisation",
            vectorized.len(),
            corpus.len()
        );

        // ── Step 7: Windows ───────────────────────────────────────────────────
        let windows = format_inputs(
            &vectorized.bodies,
            &vectorized.headlines,
            mappings.len(),
            cfg.maxlen,
            cfg.step,
        )
        .context("Cannot format training windows")?;
        tracing::info!("Formatted {} training windows", windows.len());

        // ── Step 8: Split ─────────────────────────────────────────────────────
        let samples = windows.into_samples();
        let (train, val) = split_train_val(samples, 1.0 - cfg.val_fraction, cfg.seed);
        let train = TrainingWindows::from_samples(&train, cfg.maxlen, mappings.len())?;
        let val   = TrainingWindows::from_samples(&val,   cfg.maxlen, mappings.len())?;

        // ── Step 9: Persist ───────────────────────────────────────────────────
        let summary = PrepSummary {
            articles:      articles.len(),
            kept_pairs:    vectorized.len(),
            vocab_size:    mappings.len(),
            embedding_dim: weights.ncols(),
            train_windows: train.len(),
            val_windows:   val.len(),
        };

        let store = ArtifactStore::new(&cfg.output_dir)?;
        store.save_config(cfg)?;
        store.save_mappings(&mappings)?;
        store.save_weights(&weights)?;
        store.save_windows(WindowSplit::Train, &train)?;
        store.save_windows(WindowSplit::Validation, &val)?;
        store.save_summary(&summary)?;

        tracing::info!("Artifacts written to '{}'", store.dir().display());
        Ok(summary)
    }
}
