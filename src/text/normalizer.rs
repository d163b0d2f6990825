// Normalizer — raw text to a sequence of English stems.
//
// Lowercases, turns everything that is not an ASCII letter or whitespace into
// a separator, drops short tokens, and stems what is left with the Snowball
// English algorithm. Stop words are NOT removed here; the vectorizer layers
// its own list on top.

use std::fmt;
use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer};

/// Tokens shorter than this are dropped before stemming.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// Stemming tokenizer shared by the vectorizer and the keyword extractor.
///
/// Cheap to clone: the stemmer sits behind an `Arc`.
#[derive(Clone)]
pub struct Normalizer {
    stemmer: Arc<Stemmer>,
    pub min_token_length: usize,
}

impl Normalizer {
    pub fn new(min_token_length: usize) -> Self {
        Self {
            stemmer: Arc::new(Stemmer::create(Algorithm::English)),
            min_token_length,
        }
    }

    /// Turn `text` into its stem sequence, in original order.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| token.len() >= self.min_token_length)
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("algorithm", &"snowball-english")
            .field("min_token_length", &self.min_token_length)
            .finish()
    }
}
