// Shared test fixtures. Every call builds fresh data so no test
// can observe another test's mutations.

use crate::infra::word_vectors::WordVectors;

pub(crate) struct Fixture {
    pub bodies:    Vec<Vec<String>>,
    pub headlines: Vec<Vec<String>>,
    pub model:     WordVectors,
}

pub(crate) fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Two short articles and a word-vector model whose vocabulary
/// is exactly the words they use, in first-seen order:
/// body1 words and stuff ? body2 more parrots are talkative
pub(crate) fn headline_fixture() -> Fixture {
    let sentences = [
        tokens(&["body1", "words", "and", "stuff", "words", "?"]),
        tokens(&["body2", "more", "words", "parrots", "are", "talkative", "parrots", "?"]),
    ];

    let mut vocab: Vec<String> = Vec::new();
    for word in sentences.iter().flatten() {
        if !vocab.contains(word) {
            vocab.push(word.clone());
        }
    }

    // One vector component per vocabulary word keeps the
    // dimension equal to the vocabulary size (10)
    let dim = vocab.len();
    let entries = vocab.iter().enumerate().map(|(i, w)| {
        let v = (0..dim).map(|j| (i * dim + j) as f32 * 0.01).collect::<Vec<f32>>();
        (w.clone(), v)
    });
    let model = WordVectors::from_entries(entries).expect("fixture vectors are valid");

    Fixture {
        bodies: vec![
            tokens(&["body1", "words", "and", "stuff"]),
            tokens(&["body2", "more", "words", "parrots", "are", "talkative"]),
        ],
        headlines: vec![tokens(&["words", "?"]), tokens(&["parrots", "?"])],
        model,
    }
}

impl Fixture {
    /// Distinct words across bodies and headlines
    pub fn vocab(&self) -> std::collections::HashSet<String> {
        self.bodies
            .iter()
            .chain(self.headlines.iter())
            .flatten()
            .cloned()
            .collect()
    }
}
