//! Text preprocessing for headline generation.
//!
//! Builds word/index mappings from a trained word-embedding model,
//! an embedding weight matrix ordered by index, index-encoded
//! bodies and headlines, and fixed-length training windows with
//! one-hot next-word targets.

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use data::mapping::{create_mapping_dicts, VocabFilter};
pub use data::vectorizer::{vectorize_texts, VectorizedTexts};
pub use data::weights::gen_embedding_weights;
pub use data::windows::{format_inputs, TrainingWindows, WindowSample};
pub use domain::mappings::VocabMappings;
pub use domain::traits::EmbeddingModel;
pub use error::PrepError;
pub use infra::word_vectors::WordVectors;
