// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Turns raw article text into the token lists the rest of the
// pipeline works with.
//
// Scraped article text often contains:
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Byte order marks left over from file concatenation
//   - Tabs, carriage returns and other control characters
//   - Punctuation glued to words ("talkative?", "(AP)")
//
// The embedding model knows "talkative" and "?" as two separate
// words, so punctuation at either end of a word is split off
// into its own token. Punctuation inside a word ("don't",
// "U.S.", "e-mail") is left alone.
//
// Tokenising steps (applied in order):
//   1. Map Unicode whitespace variants and control chars to space
//   2. Optionally lowercase
//   3. Split on whitespace
//   4. Peel leading/trailing punctuation into separate tokens
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    lowercase: bool,
}

impl Preprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase every token. Only useful when the embedding
    /// model itself was trained on lowercased text.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Normalise whitespace and control characters, collapsing
    /// runs of whitespace into one space.
    pub fn clean(&self, text: &str) -> String {
        let mapped: String = text
            .chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect();

        let joined = mapped.split_whitespace().collect::<Vec<_>>().join(" ");
        if self.lowercase {
            joined.to_lowercase()
        } else {
            joined
        }
    }

    /// Split text into word and punctuation tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);
        let mut tokens = Vec::new();

        for word in cleaned.split(' ').filter(|w| !w.is_empty()) {
            split_edge_punctuation(word, &mut tokens);
        }

        tokens
    }
}

/// Push `word` into `out`, with any leading and trailing
/// punctuation characters emitted as one token each.
fn split_edge_punctuation(word: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();

    let start = chars
        .iter()
        .position(|c| !is_punct(*c))
        .unwrap_or(chars.len());

    // Word made only of punctuation ("--", "?!"): one token per char
    if start == chars.len() {
        out.extend(chars.iter().map(|c| c.to_string()));
        return;
    }

    let end = chars
        .iter()
        .rposition(|c| !is_punct(*c))
        .map_or(start, |p| p + 1);

    out.extend(chars[..start].iter().map(|c| c.to_string()));
    out.push(chars[start..end].iter().collect());
    out.extend(chars[end..].iter().map(|c| c.to_string()));
}

fn is_punct(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '“' | '”' | '‘' | '’' | '—' | '–' | '…')
}
