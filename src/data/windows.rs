// ============================================================
// Layer 4 — Window Formatter
// ============================================================
// Slices each body/headline pair into fixed-length training
// windows for a next-word headline model.
//
// Each pair forms one continuous sequence, body ++ headline.
// Windows of `maxlen` indices are read from the body part at
// offsets 0, step, 2*step, ... and the window at offset i is
// labelled with headline token i (sequence position
// len(body) + i), one-hot encoded over the vocabulary.
//
// Example with maxlen=2, step=1:
//   body     = body1 words and stuff
//   headline = words ?
//
//   X[0] = body1 words   y[0] = one_hot(words)
//   X[1] = words and     y[1] = one_hot(?)
//
// A window is emitted while i < len(headline) and
// i + maxlen <= len(body). A pair with fewer than maxlen + 1
// tokens in total therefore yields no windows.
//
// Reference: Rust Book §8 (Slices)

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// One (window, next-token) row, used for splitting and batching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSample {
    pub input:  Vec<usize>,
    pub target: usize,
}

/// Window inputs `x` (num_windows, maxlen) and one-hot
/// targets `y` (num_windows, vocab_size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingWindows {
    pub x: Array2<usize>,
    pub y: Array2<f32>,
}

impl TrainingWindows {
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.x.nrows() == 0
    }

    pub fn vocab_size(&self) -> usize {
        self.y.ncols()
    }

    /// Index of the 1.0 entry in target row `row`
    pub fn target_index(&self, row: usize) -> Option<usize> {
        if row >= self.y.nrows() {
            return None;
        }
        one_hot_index(self.y.row(row))
    }

    /// Split the matrices back into per-row samples.
    /// Rows whose target has no 1.0 entry are dropped with a warning.
    pub fn into_samples(self) -> Vec<WindowSample> {
        (0..self.len())
            .filter_map(|r| match self.target_index(r) {
                Some(target) => Some(WindowSample { input: self.x.row(r).to_vec(), target }),
                None => {
                    tracing::warn!("Dropping window {} with no one-hot target", r);
                    None
                }
            })
            .collect()
    }

    /// Rebuild the matrix form from samples.
    pub fn from_samples(samples: &[WindowSample], maxlen: usize, vocab_size: usize) -> Result<Self> {
        let mut x = Array2::<usize>::zeros((samples.len(), maxlen));
        let mut y = Array2::<f32>::zeros((samples.len(), vocab_size));

        for (r, s) in samples.iter().enumerate() {
            if s.input.len() != maxlen {
                return Err(PrepError::InvalidWindow(format!(
                    "sample {r} has {} indices, expected {maxlen}",
                    s.input.len()
                )));
            }
            if s.target >= vocab_size {
                return Err(PrepError::IndexOutOfVocab { index: s.target, vocab_size });
            }
            x.row_mut(r).iter_mut().zip(&s.input).for_each(|(d, &v)| *d = v);
            y[[r, s.target]] = 1.0;
        }

        Ok(Self { x, y })
    }
}

fn one_hot_index(row: ArrayView1<'_, f32>) -> Option<usize> {
    row.iter().position(|&v| v == 1.0)
}

pub fn format_inputs(
    bodies:     &[Vec<usize>],
    headlines:  &[Vec<usize>],
    vocab_size: usize,
    maxlen:     usize,
    step:       usize,
) -> Result<TrainingWindows> {
    if maxlen == 0 {
        return Err(PrepError::InvalidWindow("maxlen must be at least 1".into()));
    }
    if step == 0 {
        return Err(PrepError::InvalidWindow("step must be at least 1".into()));
    }
    if bodies.len() != headlines.len() {
        return Err(PrepError::LengthMismatch {
            bodies:    bodies.len(),
            headlines: headlines.len(),
        });
    }

    let mut samples = Vec::new();
    for (body, headline) in bodies.iter().zip(headlines) {
        let sequence: Vec<usize> = body.iter().chain(headline).copied().collect();
        let target_start = body.len();

        for i in (0..headline.len()).step_by(step) {
            if i + maxlen > body.len() {
                break;
            }
            let target = sequence[target_start + i];
            if target >= vocab_size {
                return Err(PrepError::IndexOutOfVocab { index: target, vocab_size });
            }
            samples.push(WindowSample {
                input: sequence[i..i + maxlen].to_vec(),
                target,
            });
        }
    }

    tracing::debug!(
        "Formatted {} windows from {} pairs (maxlen={}, step={})",
        samples.len(),
        bodies.len(),
        maxlen,
        step
    );
    TrainingWindows::from_samples(&samples, maxlen, vocab_size)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mapping::{create_mapping_dicts, VocabFilter};
    use crate::data::vectorizer::vectorize_texts;
    use crate::test_support::headline_fixture;

    #[test]
    fn test_format_inputs() {
        let fx = headline_fixture();
        let vocab_size = fx.vocab().len();
        let m = create_mapping_dicts(&fx.model, VocabFilter::Full);
        let v = vectorize_texts(&fx.bodies, &fx.headlines, &m.word_to_idx).unwrap();

        let w = format_inputs(&v.bodies, &v.headlines, vocab_size, 2, 1).unwrap();

        assert_eq!(w.x.dim(), (4, 2));
        assert_eq!(w.y.dim(), (4, vocab_size));

        let decoded: Vec<String> = w.x.rows().into_iter().map(|r| m.decode(r.iter())).collect();
        assert_eq!(decoded, vec!["body1 words", "words and", "body2 more", "more words"]);

        let targets: Vec<&str> = (0..4)
            .map(|r| m.word_at(w.target_index(r).unwrap()).unwrap())
            .collect();
        assert_eq!(targets, vec!["words", "?", "parrots", "?"]);
    }

    #[test]
    fn test_targets_are_exact_one_hot() {
        let w = format_inputs(&[vec![0, 1, 2]], &[vec![3, 4]], 5, 2, 1).unwrap();
        for row in w.y.rows() {
            assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
            assert_eq!(row.iter().filter(|&&v| v == 0.0).count(), 4);
        }
    }

    #[test]
    fn test_step_skips_offsets() {
        let body     = vec![0, 1, 2, 3, 4, 5];
        let headline = vec![6, 7, 8, 9];
        let w = format_inputs(&[body], &[headline], 10, 2, 2).unwrap();

        assert_eq!(w.len(), 2);
        assert_eq!(w.x.row(0).to_vec(), vec![0, 1]);
        assert_eq!(w.x.row(1).to_vec(), vec![2, 3]);
        assert_eq!(w.target_index(0), Some(6));
        assert_eq!(w.target_index(1), Some(8));
    }

    #[test]
    fn test_short_pairs_contribute_nothing() {
        // body shorter than maxlen: no window fits
        let w = format_inputs(&[vec![0]], &[vec![1, 2]], 3, 2, 1).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.x.dim(), (0, 2));
        assert_eq!(w.y.dim(), (0, 3));
    }

    #[test]
    fn test_windows_stop_at_end_of_body() {
        let w = format_inputs(&[vec![0, 1, 2]], &[vec![3, 4, 5, 6]], 7, 2, 1).unwrap();
        // offsets 0 and 1 fit in a 3-token body, offset 2 does not
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            format_inputs(&[], &[], 3, 0, 1),
            Err(PrepError::InvalidWindow(_))
        ));
        assert!(matches!(
            format_inputs(&[], &[], 3, 2, 0),
            Err(PrepError::InvalidWindow(_))
        ));
        assert!(matches!(
            format_inputs(&[vec![0]], &[], 3, 1, 1),
            Err(PrepError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_target_outside_vocab_is_an_error() {
        let err = format_inputs(&[vec![0, 1]], &[vec![9]], 3, 2, 1).unwrap_err();
        assert!(matches!(err, PrepError::IndexOutOfVocab { index: 9, vocab_size: 3 }));
    }

    #[test]
    fn test_samples_convert_both_ways() {
        let w = format_inputs(&[vec![0, 1, 2]], &[vec![3, 4]], 5, 2, 1).unwrap();
        let samples = w.clone().into_samples();
        assert_eq!(samples[1], WindowSample { input: vec![1, 2], target: 4 });

        let back = TrainingWindows::from_samples(&samples, 2, 5).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn test_rows_without_target_are_dropped() {
        let mut w = format_inputs(&[vec![0, 1, 2]], &[vec![3, 4]], 5, 2, 1).unwrap();
        w.y.row_mut(0).fill(0.0);

        let samples = w.into_samples();
        assert_eq!(samples, vec![WindowSample { input: vec![1, 2], target: 4 }]);
    }
}
