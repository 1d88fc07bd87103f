// ============================================================
// Layer 3 — Article Domain Types
// ============================================================
// An Article is one raw training example for headline
// generation: the body text and the headline written for it.
//
// After tokenisation a whole corpus becomes a TokenizedCorpus,
// two parallel collections where bodies[i] belongs to
// headlines[i]. Every later pipeline stage relies on that
// positional pairing.

use serde::{Deserialize, Serialize};

/// A raw article loaded from disk, before tokenisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Where the article came from (file name and line),
    /// kept for log messages
    #[serde(default)]
    pub source: String,

    pub body: String,

    pub headline: String,
}

impl Article {
    pub fn new(
        source:   impl Into<String>,
        body:     impl Into<String>,
        headline: impl Into<String>,
    ) -> Self {
        Self {
            source:   source.into(),
            body:     body.into(),
            headline: headline.into(),
        }
    }
}

/// Tokenised bodies and headlines, paired by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizedCorpus {
    pub bodies:    Vec<Vec<String>>,
    pub headlines: Vec<Vec<String>>,
}

impl TokenizedCorpus {
    /// Number of body/headline pairs
    pub fn len(&self) -> usize {
        self.bodies.len().min(self.headlines.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&mut self, body: Vec<String>, headline: Vec<String>) {
        self.bodies.push(body);
        self.headlines.push(headline);
    }
}
