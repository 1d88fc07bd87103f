// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline only ever talks to these traits, never to a
// concrete embedding file format or corpus format:
//   - WordVectors implements EmbeddingModel
//   - JsonlArticleLoader implements ArticleSource
//
// A different embedding backend (fastText, GloVe binary, a
// vector database) only has to implement EmbeddingModel to be
// usable by create_mapping_dicts.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::article::Article;

// ─── EmbeddingModel ───────────────────────────────────────────────────────────
/// A trained word-embedding model.
///
/// Only two capabilities are needed: enumerate the vocabulary in
/// the model's native order, and look up the vector of one word.
/// The pipeline never trains or mutates the model.
pub trait EmbeddingModel {
    /// Words known to the model, in the model's native order.
    /// The order must be stable for a given model instance.
    fn vocabulary(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// The embedding vector for `word`, or None if the model
    /// has never seen it.
    fn vector(&self, word: &str) -> Option<&[f32]>;

    /// Length of every vector returned by `vector`
    fn dimension(&self) -> usize;

    /// Number of words in the vocabulary
    fn vocab_len(&self) -> usize {
        self.vocabulary().count()
    }
}

// ─── ArticleSource ────────────────────────────────────────────────────────────
/// Any component that can load body/headline articles.
///
/// Implementations:
///   - JsonlArticleLoader → one JSON object per line
pub trait ArticleSource {
    /// Load all available articles from this source.
    fn load_all(&self) -> Result<Vec<Article>>;
}
