// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Reads a prepared output directory back and decodes windows
// into words, e.g.
//
//   body1 words  →  words
//   words and    →  ?
//
// Useful for checking a preparation run by eye before
// spending GPU time on it.

use anyhow::{anyhow, Result};

use crate::domain::mappings::VocabMappings;
use crate::infra::artifact_store::{ArtifactStore, WindowSplit};

/// One decoded window
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWindow {
    pub input:  String,
    pub target: String,
}

pub struct InspectUseCase {
    store: ArtifactStore,
}

impl InspectUseCase {
    pub fn new(output_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self { store: ArtifactStore::new(output_dir)? })
    }

    /// Decode up to `limit` windows of `split`.
    pub fn decode(&self, split: WindowSplit, limit: usize) -> Result<Vec<DecodedWindow>> {
        let mappings = self.store.load_mappings()?;
        let windows  = self.store.load_windows(split)?;

        (0..windows.len().min(limit))
            .map(|r| {
                let target = windows
                    .target_index(r)
                    .ok_or_else(|| anyhow!("window {r} has no one-hot target"))?;
                Ok(DecodedWindow {
                    input:  mappings.decode(windows.x.row(r).iter()),
                    target: word_or_placeholder(&mappings, target),
                })
            })
            .collect()
    }
}

fn word_or_placeholder(mappings: &VocabMappings, idx: usize) -> String {
    mappings
        .word_at(idx)
        .map_or_else(|| format!("<{idx}>"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::windows::format_inputs;

    #[test]
    fn test_decodes_saved_windows() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let mut m = VocabMappings::default();
        for w in ["the", "cat", "sat", "down"] {
            m.push(w, &[0.0]);
        }
        store.save_mappings(&m).unwrap();
        let windows = format_inputs(&[vec![0, 1, 2]], &[vec![3]], 4, 2, 1).unwrap();
        store.save_windows(WindowSplit::Train, &windows).unwrap();

        let decoded = InspectUseCase::new(dir.path()).unwrap()
            .decode(WindowSplit::Train, 10)
            .unwrap();
        assert_eq!(decoded, vec![DecodedWindow {
            input:  "the cat".to_string(),
            target: "down".to_string(),
        }]);
    }

    #[test]
    fn test_missing_artifacts_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let res = InspectUseCase::new(dir.path()).unwrap().decode(WindowSplit::Train, 1);
        assert!(res.is_err());
    }
}
