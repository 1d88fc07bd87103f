// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File formats on either side of the pipeline:
//
//   word_vectors.rs   — Embedding model input
//                       Loads/saves the word2vec text format
//                       and implements the EmbeddingModel trait.
//
//   artifact_store.rs — Pipeline output
//                       Writes vocabulary, embedding weights,
//                       training windows and the run config as
//                       JSON, and reads them back.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// word2vec text format embedding model
pub mod word_vectors;

/// JSON persistence for prepared artifacts
pub mod artifact_store;
