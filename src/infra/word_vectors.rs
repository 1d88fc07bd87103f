// ============================================================
// Layer 6 — Word Vectors
// ============================================================
// In-memory embedding model loaded from the word2vec text
// format, the format gensim, fastText and GloVe tools export:
//
//   10 4                     ← "<vocab_size> <dimension>"
//   body1 0.12 -0.30 0.05 0.91
//   words 0.44 0.10 -0.72 0.03
//   ...
//
// Words keep the order they appear in the file. That order is
// the "native vocabulary order" the mapping builder uses when
// assigning indices.
//
// Vectors live in one Array2<f32>, one row per word, so a
// lookup is a HashMap probe plus a row slice.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use ndarray::Array2;

use crate::domain::traits::EmbeddingModel;
use crate::error::{PrepError, Result};

#[derive(Debug, Clone)]
pub struct WordVectors {
    words:   Vec<String>,
    index:   HashMap<String, usize>,
    vectors: Array2<f32>,
}

impl WordVectors {
    /// Build a model from `(word, vector)` pairs.
    /// Words keep the order of the iterator.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut words = Vec::new();
        let mut index = HashMap::new();
        let mut flat  = Vec::new();
        let mut dim   = None;

        for (word, vector) in entries {
            let word = word.into();
            if vector.is_empty() {
                return Err(PrepError::EmptyVector(word));
            }
            let expected = *dim.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(PrepError::DimensionMismatch {
                    word,
                    expected,
                    found: vector.len(),
                });
            }
            if index.contains_key(&word) {
                return Err(PrepError::DuplicateWord(word));
            }
            index.insert(word.clone(), words.len());
            words.push(word);
            flat.extend(vector);
        }

        let dim = dim.unwrap_or(0);
        let vectors = Array2::from_shape_vec((words.len(), dim), flat).map_err(|e| {
            PrepError::Format { line: 0, message: e.to_string() }
        })?;

        Ok(Self { words, index, vectors })
    }

    /// Parse the word2vec text format from any reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| PrepError::Format { line: 1, message: "missing header".into() })??;
        let (count, dim) = parse_header(&header)?;

        let mut entries = Vec::with_capacity(count);
        for (i, line) in lines.enumerate() {
            let line_no = i + 2;
            let line    = line?;
            let mut parts = line.split_whitespace();

            // Blank lines (e.g. a trailing newline) are not entries
            let Some(word) = parts.next() else { continue };

            let vector = parts
                .map(|s| {
                    s.parse::<f32>().map_err(|e| PrepError::Format {
                        line:    line_no,
                        message: format!("bad value '{s}' for '{word}': {e}"),
                    })
                })
                .collect::<Result<Vec<f32>>>()?;

            if vector.len() != dim {
                return Err(PrepError::Format {
                    line:    line_no,
                    message: format!("'{word}' has {} values, header says {dim}", vector.len()),
                });
            }
            entries.push((word.to_string(), vector));
        }

        if entries.len() != count {
            return Err(PrepError::Format {
                line:    1,
                message: format!("header declares {count} words, found {}", entries.len()),
            });
        }

        Self::from_entries(entries)
    }

    /// Load a word2vec text file from disk.
    pub fn load_text(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot open word vectors '{}'", path.display()))?;

        let model = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Cannot parse word vectors '{}'", path.display()))?;

        tracing::info!(
            "Loaded {} word vectors (dim={}) from '{}'",
            model.len(),
            model.dimension(),
            path.display()
        );
        Ok(model)
    }

    /// Write the model in word2vec text format, words in native order.
    pub fn save_text(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "{} {}", self.len(), self.dimension())?;
        for (word, row) in self.words.iter().zip(self.vectors.rows()) {
            write!(w, "{word}")?;
            for v in row.iter() {
                write!(w, " {v}")?;
            }
            writeln!(w)?;
        }
        w.flush()?;

        tracing::debug!("Saved {} word vectors to '{}'", self.len(), path.display());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The full vector matrix in native word order
    pub fn vectors(&self) -> &Array2<f32> {
        &self.vectors
    }
}

impl EmbeddingModel for WordVectors {
    fn vocabulary(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }

    fn vector(&self, word: &str) -> Option<&[f32]> {
        let row = *self.index.get(word)?;
        // Rows of a standard-layout Array2 are contiguous
        self.vectors.row(row).to_slice()
    }

    fn dimension(&self) -> usize {
        self.vectors.ncols()
    }

    fn vocab_len(&self) -> usize {
        self.words.len()
    }
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let bad = |message: String| PrepError::Format { line: 1, message };

    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(bad(format!("expected '<count> <dim>', got '{header}'")));
    }
    let count = fields[0]
        .parse::<usize>()
        .map_err(|e| bad(format!("bad word count '{}': {e}", fields[0])))?;
    let dim = fields[1]
        .parse::<usize>()
        .map_err(|e| bad(format!("bad dimension '{}': {e}", fields[1])))?;
    Ok((count, dim))
}
