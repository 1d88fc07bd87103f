// ============================================================
// Layer 3 — Vocabulary Mappings
// ============================================================
// The three lookup tables produced by the mapping builder:
//
//   word_to_idx    "parrots" → 7
//   idx_to_word    7 → "parrots"
//   word_to_vector "parrots" → [0.12, -0.3, ...]
//
// Invariants (upheld by create_mapping_dicts):
//   - all three tables have the same length
//   - indices form the dense range [0, len)
//   - idx_to_word[word_to_idx[w]] == w for every word

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabMappings {
    pub word_to_idx:    HashMap<String, usize>,
    pub idx_to_word:    HashMap<usize, String>,
    /// Not persisted; the weight matrix carries the same data in index order
    #[serde(skip)]
    pub word_to_vector: HashMap<String, Vec<f32>>,
}

impl VocabMappings {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            word_to_idx:    HashMap::with_capacity(capacity),
            idx_to_word:    HashMap::with_capacity(capacity),
            word_to_vector: HashMap::with_capacity(capacity),
        }
    }

    /// Register `word` under the next free index.
    /// Returns the index it was given. A word that is already
    /// registered keeps its first index and vector.
    pub fn push(&mut self, word: &str, vector: &[f32]) -> usize {
        if let Some(&idx) = self.word_to_idx.get(word) {
            return idx;
        }
        let idx = self.word_to_idx.len();
        self.word_to_idx.insert(word.to_string(), idx);
        self.idx_to_word.insert(idx, word.to_string());
        self.word_to_vector.insert(word.to_string(), vector.to_vec());
        idx
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.word_to_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_to_idx.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_to_idx.get(word).copied()
    }

    pub fn word_at(&self, idx: usize) -> Option<&str> {
        self.idx_to_word.get(&idx).map(String::as_str)
    }

    /// Join the words behind `indices` with single spaces.
    /// Indices with no word are skipped.
    pub fn decode<'a, I>(&self, indices: I) -> String
    where
        I: IntoIterator<Item = &'a usize>,
    {
        indices
            .into_iter()
            .filter_map(|&i| self.word_at(i))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
