// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores everything a preparation run produces.
//
// Output directory layout:
//   out/
//     prepare_config.json      ← options the run used
//     vocab.json               ← word_to_idx + idx_to_word
//     embedding_weights.json   ← (vocab_size, dim) matrix
//     train_windows.json       ← X / one-hot y for training
//     val_windows.json         ← X / one-hot y for validation
//     summary.json             ← counts for a quick sanity check
//
// Why save the config next to the data?
//   A training run must use the same vocabulary, window length
//   and embedding file the windows were built with. Keeping the
//   config beside the arrays makes a prepared directory
//   self-describing.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use ndarray::Array2;
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::application::prepare_use_case::{PrepSummary, PrepareConfig};
use crate::data::windows::TrainingWindows;
use crate::domain::mappings::VocabMappings;

const CONFIG_FILE:  &str = "prepare_config.json";
const VOCAB_FILE:   &str = "vocab.json";
const WEIGHTS_FILE: &str = "embedding_weights.json";
const TRAIN_FILE:   &str = "train_windows.json";
const VAL_FILE:     &str = "val_windows.json";
const SUMMARY_FILE: &str = "summary.json";

/// Which half of a split a window file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSplit {
    Train,
    Validation,
}

impl WindowSplit {
    fn file_name(self) -> &'static str {
        match self {
            WindowSplit::Train      => TRAIN_FILE,
            WindowSplit::Validation => VAL_FILE,
        }
    }
}

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create the store, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<()> {
        self.write_json(CONFIG_FILE, cfg)
    }

    pub fn load_config(&self) -> Result<PrepareConfig> {
        self.read_json(CONFIG_FILE)
    }

    /// Only the index tables are written; vectors live in the
    /// weight matrix.
    pub fn save_mappings(&self, mappings: &VocabMappings) -> Result<()> {
        self.write_json(VOCAB_FILE, mappings)
    }

    pub fn load_mappings(&self) -> Result<VocabMappings> {
        self.read_json(VOCAB_FILE)
    }

    pub fn save_weights(&self, weights: &Array2<f32>) -> Result<()> {
        self.write_json(WEIGHTS_FILE, weights)
    }

    pub fn load_weights(&self) -> Result<Array2<f32>> {
        self.read_json(WEIGHTS_FILE)
    }

    pub fn save_windows(&self, split: WindowSplit, windows: &TrainingWindows) -> Result<()> {
        self.write_json(split.file_name(), windows)
    }

    pub fn load_windows(&self, split: WindowSplit) -> Result<TrainingWindows> {
        self.read_json(split.file_name())
    }

    pub fn save_summary(&self, summary: &PrepSummary) -> Result<()> {
        self.write_json(SUMMARY_FILE, summary)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Cannot serialise '{name}'"))?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Saved '{}'", path.display());
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read '{}'. Has 'prepare' been run for this directory?",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse '{}'", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::windows::format_inputs;

    #[test]
    fn test_config_round_trips() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("nested/out")).unwrap();

        let cfg = PrepareConfig { maxlen: 7, seed: 99, ..PrepareConfig::default() };
        store.save_config(&cfg).unwrap();
        assert_eq!(store.load_config().unwrap(), cfg);
    }

    #[test]
    fn test_mappings_and_weights_persist() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let mut m = VocabMappings::default();
        m.push("hello", &[0.5, 1.5]);
        m.push("world", &[2.5, 3.5]);
        store.save_mappings(&m).unwrap();
        let back = store.load_mappings().unwrap();
        assert_eq!(back.word_to_idx, m.word_to_idx);
        assert_eq!(back.idx_to_word, m.idx_to_word);

        let w = ndarray::array![[0.5f32, 1.5], [2.5, 3.5]];
        store.save_weights(&w).unwrap();
        assert_eq!(store.load_weights().unwrap(), w);
    }

    #[test]
    fn test_windows_persist_per_split() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let w = format_inputs(&[vec![0, 1, 2]], &[vec![3, 4]], 5, 2, 1).unwrap();
        store.save_windows(WindowSplit::Train, &w).unwrap();

        assert_eq!(store.load_windows(WindowSplit::Train).unwrap(), w);
        assert!(store.load_windows(WindowSplit::Validation).is_err());
    }
}
