// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw articles and model-ready windows.
//
//   articles.jsonl           word vectors (infra)
//       │                          │
//       ▼                          │
//   JsonlArticleLoader             │
//       │                          │
//       ▼                          │
//   Preprocessor → tokens          │
//       │                          ▼
//       │                   create_mapping_dicts
//       │                     │            │
//       ▼                     ▼            ▼
//   vectorize_texts ◄──── word_to_idx   gen_embedding_weights
//       │
//       ▼
//   format_inputs → TrainingWindows (X, one-hot y)
//       │
//       ▼
//   split_train_val → WindowDataset → WindowBatcher (burn)
//
// Each step is a separate module and is tested on its own.

/// Reads body/headline articles from JSON Lines
pub mod loader;

/// Cleans and tokenises raw article text
pub mod preprocessor;

/// Word ↔ index ↔ vector tables from an embedding model
pub mod mapping;

/// Dense embedding matrix ordered by index
pub mod weights;

/// Token lists → index sequences
pub mod vectorizer;

/// Index sequences → fixed-length windows with one-hot targets
pub mod windows;

/// Seeded train/validation split
pub mod splitter;

/// Burn Dataset over window samples
pub mod dataset;

/// Burn Batcher turning window samples into tensors
pub mod batcher;
