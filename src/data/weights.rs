// ============================================================
// Layer 4 — Embedding Weight Generator
// ============================================================
// Assembles the (vocab_size, dim) matrix used to initialise an
// embedding layer. Row i holds the vector of the word whose
// index is i, so the matrix depends only on the index mapping,
// never on HashMap iteration order.
//
// A mapping with gaps or shared indices would leave rows
// unfilled, so those are rejected instead of silently
// producing zero rows.

use std::collections::HashMap;

use ndarray::Array2;

use crate::error::{PrepError, Result};

pub fn gen_embedding_weights(
    word_to_idx:    &HashMap<String, usize>,
    word_to_vector: &HashMap<String, Vec<f32>>,
) -> Result<Array2<f32>> {
    let vocab_size = word_to_idx.len();
    if vocab_size == 0 {
        return Ok(Array2::zeros((0, 0)));
    }

    // Order rows by index first: duplicate detection and error
    // messages then come out the same on every run.
    let mut rows: Vec<(usize, &str)> = word_to_idx
        .iter()
        .map(|(w, &i)| (i, w.as_str()))
        .collect();
    rows.sort_unstable();

    for pair in rows.windows(2) {
        let ((a, first), (b, second)) = (pair[0], pair[1]);
        if a == b {
            return Err(PrepError::DuplicateIndex {
                index:  a,
                first:  first.to_string(),
                second: second.to_string(),
            });
        }
    }

    // Indices are sorted and distinct, so the range is dense
    // exactly when the largest index is vocab_size - 1.
    if let Some(&(index, word)) = rows.iter().find(|(i, _)| *i >= vocab_size) {
        return Err(PrepError::NonDenseIndex {
            word: word.to_string(),
            index,
            len: vocab_size,
        });
    }

    let first_word = rows[0].1;
    let dim = word_to_vector
        .get(first_word)
        .ok_or_else(|| PrepError::MissingVector(first_word.to_string()))?
        .len();

    let mut weights = Array2::<f32>::zeros((vocab_size, dim));
    for (index, word) in rows {
        let vector = word_to_vector
            .get(word)
            .ok_or_else(|| PrepError::MissingVector(word.to_string()))?;
        if vector.len() != dim {
            return Err(PrepError::DimensionMismatch {
                word:     word.to_string(),
                expected: dim,
                found:    vector.len(),
            });
        }
        weights
            .row_mut(index)
            .iter_mut()
            .zip(vector)
            .for_each(|(dst, &src)| *dst = src);
    }

    tracing::debug!("Embedding weights: {} x {}", vocab_size, dim);
    Ok(weights)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mapping::{create_mapping_dicts, VocabFilter};
    use crate::domain::traits::EmbeddingModel;
    use crate::test_support::headline_fixture;

    fn maps(pairs: &[(&str, usize, Vec<f32>)]) -> (HashMap<String, usize>, HashMap<String, Vec<f32>>) {
        let idx = pairs.iter().map(|(w, i, _)| (w.to_string(), *i)).collect();
        let vec = pairs.iter().map(|(w, _, v)| (w.to_string(), v.clone())).collect();
        (idx, vec)
    }

    #[test]
    fn test_gen_embedding_weights() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let w  = gen_embedding_weights(&m.word_to_idx, &m.word_to_vector).unwrap();

        assert_eq!(w.nrows(), m.word_to_idx.len());
        assert_eq!(w.ncols(), fx.vocab().len());
        assert_eq!(w.ncols(), fx.model.dimension());
    }

    #[test]
    fn test_row_i_is_vector_of_word_i() {
        let fx = headline_fixture();
        let m  = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let w  = gen_embedding_weights(&m.word_to_idx, &m.word_to_vector).unwrap();

        for (word, &i) in &m.word_to_idx {
            assert_eq!(w.row(i).to_vec(), m.word_to_vector[word]);
        }
    }

    #[test]
    fn test_rows_keyed_by_index_not_insertion() {
        let (idx, vec) = maps(&[("b", 1, vec![2.0, 2.0]), ("a", 0, vec![1.0, 1.0])]);
        let w = gen_embedding_weights(&idx, &vec).unwrap();
        assert_eq!(w, ndarray::array![[1.0f32, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn test_gap_in_indices_is_an_error() {
        let (idx, vec) = maps(&[("a", 0, vec![1.0]), ("b", 2, vec![2.0])]);
        let err = gen_embedding_weights(&idx, &vec).unwrap_err();
        assert!(matches!(err, PrepError::NonDenseIndex { index: 2, len: 2, .. }));
    }

    #[test]
    fn test_shared_index_is_an_error() {
        let (idx, vec) = maps(&[("a", 0, vec![1.0]), ("b", 0, vec![2.0])]);
        let err = gen_embedding_weights(&idx, &vec).unwrap_err();
        assert!(matches!(err, PrepError::DuplicateIndex { index: 0, .. }));
    }

    #[test]
    fn test_missing_vector_is_an_error() {
        let (idx, mut vec) = maps(&[("a", 0, vec![1.0]), ("b", 1, vec![2.0])]);
        vec.remove("b");
        let err = gen_embedding_weights(&idx, &vec).unwrap_err();
        assert!(matches!(err, PrepError::MissingVector(w) if w == "b"));
    }

    #[test]
    fn test_ragged_vectors_are_an_error() {
        let (idx, vec) = maps(&[("a", 0, vec![1.0, 0.0]), ("b", 1, vec![2.0])]);
        let err = gen_embedding_weights(&idx, &vec).unwrap_err();
        assert!(matches!(err, PrepError::DimensionMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_empty_mapping_gives_empty_matrix() {
        let w = gen_embedding_weights(&HashMap::new(), &HashMap::new()).unwrap();
        assert_eq!(w.dim(), (0, 0));
    }
}
