use burn::data::dataset::Dataset;

use crate::data::windows::{TrainingWindows, WindowSample};

/// Window samples exposed through burn's Dataset trait so a
/// DataLoader can index and shuffle them.
pub struct WindowDataset {
    samples:    Vec<WindowSample>,
    vocab_size: usize,
}

impl WindowDataset {
    pub fn new(samples: Vec<WindowSample>, vocab_size: usize) -> Self {
        Self { samples, vocab_size }
    }

    pub fn from_windows(windows: TrainingWindows) -> Self {
        let vocab_size = windows.vocab_size();
        Self::new(windows.into_samples(), vocab_size)
    }

    pub fn vocab_size(&self) -> usize { self.vocab_size }
}

impl Dataset<WindowSample> for WindowDataset {
    fn get(&self, index: usize) -> Option<WindowSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
