// ============================================================
// Layer 4 — Window Batcher
// ============================================================
// Implements burn's Batcher trait so window samples can be fed
// to a burn DataLoader.
//
//   Input:  Vec of N WindowSamples, each with `maxlen` indices
//   Output: WindowBatch with
//             inputs          [N, maxlen]      Int
//             targets         [N]              Int    (class index)
//             targets_one_hot [N, vocab_size]  Float  (exact one-hot)
//
// Every sample from one formatter call has the same length,
// so the inputs can be flattened and reshaped without padding.
//
// Precondition: every input index and target is below
// vocab_size. Samples from format_inputs always satisfy it;
// debug builds assert it, release builds leave the one-hot row
// of an out-of-range target empty.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::windows::WindowSample;

#[derive(Debug, Clone)]
pub struct WindowBatch<B: Backend> {
    pub inputs:          Tensor<B, 2, Int>,
    pub targets:         Tensor<B, 1, Int>,
    pub targets_one_hot: Tensor<B, 2>,
}

#[derive(Clone, Debug)]
pub struct WindowBatcher<B: Backend> {
    pub device:     B::Device,
    pub vocab_size: usize,
}

impl<B: Backend> WindowBatcher<B> {
    pub fn new(device: B::Device, vocab_size: usize) -> Self {
        Self { device, vocab_size }
    }
}

/// Indices below vocab_size always fit: the one-hot buffer
/// alone needs vocab_size floats of memory.
fn to_int(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl<B: Backend> Batcher<WindowSample, WindowBatch<B>> for WindowBatcher<B> {
    fn batch(&self, items: Vec<WindowSample>) -> WindowBatch<B> {
        let batch_size = items.len();
        let maxlen     = items.first().map_or(0, |s| s.input.len());

        debug_assert!(
            items.iter().all(|s| s.target < self.vocab_size
                && s.input.iter().all(|&x| x < self.vocab_size)),
            "window index outside vocabulary of {}",
            self.vocab_size
        );

        // ── Flatten window indices ────────────────────────────────────────────
        let input_flat: Vec<i64> = items
            .iter()
            .flat_map(|s| s.input.iter().map(|&x| to_int(x)))
            .collect();

        let targets: Vec<i64> = items.iter().map(|s| to_int(s.target)).collect();

        // ── One-hot rows ──────────────────────────────────────────────────────
        let mut one_hot = vec![0.0f32; batch_size * self.vocab_size];
        for (row, s) in items.iter().enumerate() {
            if s.target < self.vocab_size {
                one_hot[row * self.vocab_size + s.target] = 1.0;
            }
        }

        let inputs = Tensor::<B, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device
        ).reshape([batch_size, maxlen]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device
        );

        let targets_one_hot = Tensor::<B, 1>::from_floats(
            one_hot.as_slice(), &self.device
        ).reshape([batch_size, self.vocab_size]);

        WindowBatch { inputs, targets, targets_one_hot }
    }
}
