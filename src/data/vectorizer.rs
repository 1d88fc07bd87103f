// ============================================================
// Layer 4 — Text Vectorizer
// ============================================================
// Converts tokenised bodies and headlines into index sequences.
//
//   ["body1", "words", "xyzzy"]  →  [0, 1]      (unknown dropped)
//   ["xyzzy"]                    →  []          (pair dropped)
//
// Tokens missing from the vocabulary are dropped rather than
// mapped to a placeholder. A body or headline left with no
// tokens is dropped together with its partner, so
// bodies[i] still belongs to headlines[i] in the output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// Index-encoded bodies and headlines, paired by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorizedTexts {
    pub bodies:    Vec<Vec<usize>>,
    pub headlines: Vec<Vec<usize>>,
}

impl VectorizedTexts {
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Look up every token of one document, skipping unknown words.
pub fn vectorize_tokens(tokens: &[String], word_to_idx: &HashMap<String, usize>) -> Vec<usize> {
    tokens
        .iter()
        .filter_map(|t| word_to_idx.get(t).copied())
        .collect()
}

pub fn vectorize_texts(
    bodies:      &[Vec<String>],
    headlines:   &[Vec<String>],
    word_to_idx: &HashMap<String, usize>,
) -> Result<VectorizedTexts> {
    if bodies.len() != headlines.len() {
        return Err(PrepError::LengthMismatch {
            bodies:    bodies.len(),
            headlines: headlines.len(),
        });
    }

    let mut out     = VectorizedTexts::default();
    let mut dropped = 0usize;

    for (body, headline) in bodies.iter().zip(headlines) {
        let body_ids     = vectorize_tokens(body, word_to_idx);
        let headline_ids = vectorize_tokens(headline, word_to_idx);

        if body_ids.is_empty() || headline_ids.is_empty() {
            dropped += 1;
            continue;
        }
        out.bodies.push(body_ids);
        out.headlines.push(headline_ids);
    }

    tracing::debug!(
        "Vectorised {} pairs, dropped {} with no known tokens",
        out.len(),
        dropped
    );
    Ok(out)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mapping::{create_mapping_dicts, VocabFilter};
    use crate::test_support::{headline_fixture, tokens};

    #[test]
    fn test_vectorize_texts() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let v  = vectorize_texts(&fx.bodies, &fx.headlines, &m.word_to_idx).unwrap();

        assert!(v.bodies.len()    <= fx.bodies.len());
        assert!(v.headlines.len() <= fx.headlines.len());
        for (row, src) in v.bodies.iter().zip(&fx.bodies) {
            assert!(row.len() <= src.len());
        }
    }

    #[test]
    fn test_known_tokens_map_in_order() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let v  = vectorize_texts(&fx.bodies, &fx.headlines, &m.word_to_idx).unwrap();

        assert_eq!(v.len(), 2);
        assert_eq!(m.decode(&v.bodies[0]), "body1 words and stuff");
        assert_eq!(m.decode(&v.headlines[1]), "parrots ?");
    }

    #[test]
    fn test_unknown_tokens_are_dropped() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let bodies    = vec![tokens(&["body1", "zzz", "words"])];
        let headlines = vec![tokens(&["?", "qqq"])];
        let v = vectorize_texts(&bodies, &headlines, &m.word_to_idx).unwrap();

        assert_eq!(m.decode(&v.bodies[0]), "body1 words");
        assert_eq!(v.headlines[0].len(), 1);
    }

    #[test]
    fn test_empty_documents_drop_their_pair() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let bodies    = vec![tokens(&["zzz"]), tokens(&["more"]), tokens(&["body2"])];
        let headlines = vec![tokens(&["?"]), tokens(&["nope"]), tokens(&["parrots"])];
        let v = vectorize_texts(&bodies, &headlines, &m.word_to_idx).unwrap();

        assert_eq!(v.len(), 1);
        assert_eq!(m.decode(&v.bodies[0]), "body2");
        assert_eq!(m.decode(&v.headlines[0]), "parrots");
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let err = vectorize_texts(&[tokens(&["a"])], &[], &HashMap::new()).unwrap_err();
        assert!(matches!(err, PrepError::LengthMismatch { bodies: 1, headlines: 0 }));
    }
}
