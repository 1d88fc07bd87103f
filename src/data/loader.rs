// ============================================================
// Layer 4 — Article Loader
// ============================================================
// Loads body/headline articles from a JSON Lines file:
//
//   {"body": "Parrots are talkative birds ...", "headline": "Parrots talk?"}
//   {"body": "...", "headline": "..."}
//
// One object per line keeps very large scraped corpora
// streamable and lets a single bad line be skipped instead of
// failing the whole file.
//
// Reference: serde_json documentation (from_str)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessor;
use crate::domain::article::{Article, TokenizedCorpus};
use crate::domain::traits::ArticleSource;

/// Reads articles from a `.jsonl` file.
/// Implements the ArticleSource trait from Layer 3.
pub struct JsonlArticleLoader {
    path: PathBuf,
}

impl JsonlArticleLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn source_name(&self, line_no: usize) -> String {
        let file = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        format!("{file}:{line_no}")
    }
}

impl ArticleSource for JsonlArticleLoader {
    fn load_all(&self) -> Result<Vec<Article>> {
        let path: &Path = &self.path;

        // A missing corpus is not fatal: an empty corpus simply
        // yields empty outputs downstream.
        if !path.exists() {
            tracing::warn!(
                "Corpus file '{}' does not exist — returning empty corpus",
                path.display()
            );
            return Ok(Vec::new());
        }

        let file = File::open(path)
            .with_context(|| format!("Cannot open corpus '{}'", path.display()))?;

        let mut articles = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line_no = i + 1;
            let line = line
                .with_context(|| format!("Cannot read line {line_no} of '{}'", path.display()))?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Article>(&line) {
                Ok(mut article) => {
                    if article.body.trim().is_empty() || article.headline.trim().is_empty() {
                        tracing::debug!("Skipping line {}: empty body or headline", line_no);
                        continue;
                    }
                    if article.source.is_empty() {
                        article.source = self.source_name(line_no);
                    }
                    articles.push(article);
                }
                // Log a warning but continue — don't fail on one bad line
                Err(e) => {
                    tracing::warn!("Skipping line {} of '{}': {}", line_no, path.display(), e);
                }
            }
        }

        tracing::info!("Loaded {} articles from '{}'", articles.len(), path.display());
        Ok(articles)
    }
}

/// Tokenise every article's body and headline.
/// Bodies and headlines stay paired by position.
pub fn tokenize_articles(articles: &[Article], preprocessor: &Preprocessor) -> TokenizedCorpus {
    let mut corpus = TokenizedCorpus::default();
    for article in articles {
        corpus.push(
            preprocessor.tokenize(&article.body),
            preprocessor.tokenize(&article.headline),
        );
    }
    corpus
}
