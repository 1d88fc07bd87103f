// ============================================================
// Layer 4 — Mapping Builder
// ============================================================
// Derives the word↔index and word→vector tables from a trained
// embedding model.
//
// Two modes:
//
//   VocabFilter::Full
//     Every word the model knows gets an index, in the model's
//     native vocabulary order.
//
//   VocabFilter::Corpus { bodies, headlines }
//     Only words that occur in the corpus AND in the model get
//     an index. Corpus words the model never saw are skipped
//     silently. Indices still follow the model's native order,
//     so the result does not depend on HashSet iteration order.
//
// In both modes indices are the dense range [0, len).

use std::collections::HashSet;

use crate::domain::mappings::VocabMappings;
use crate::domain::traits::EmbeddingModel;

/// Which part of the model's vocabulary to map.
#[derive(Debug, Clone, Copy)]
pub enum VocabFilter<'a> {
    Full,
    Corpus {
        bodies:    &'a [Vec<String>],
        headlines: &'a [Vec<String>],
    },
}

/// Build the word→index, index→word and word→vector tables.
pub fn create_mapping_dicts<M>(model: &M, filter: VocabFilter<'_>) -> VocabMappings
where
    M: EmbeddingModel + ?Sized,
{
    let mappings = match filter {
        VocabFilter::Full => {
            let mut m = VocabMappings::with_capacity(model.vocab_len());
            for word in model.vocabulary() {
                if let Some(vector) = model.vector(word) {
                    m.push(word, vector);
                }
            }
            m
        }
        VocabFilter::Corpus { bodies, headlines } => {
            let corpus_words: HashSet<&str> = bodies
                .iter()
                .chain(headlines.iter())
                .flatten()
                .map(String::as_str)
                .collect();

            let mut m = VocabMappings::with_capacity(corpus_words.len());
            for word in model.vocabulary() {
                if !corpus_words.contains(word) {
                    continue;
                }
                if let Some(vector) = model.vector(word) {
                    m.push(word, vector);
                }
            }

            tracing::debug!(
                "Corpus filter kept {} of {} corpus words ({} unknown to the model)",
                m.len(),
                corpus_words.len(),
                corpus_words.len() - m.len(),
            );
            m
        }
    };

    tracing::info!(
        "Built vocabulary mappings: {} words, dim={}",
        mappings.len(),
        model.dimension()
    );
    mappings
}
