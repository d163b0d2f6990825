// TF-IDF vectorizer.
//
// Fitting runs every document through the normalizer, drops stems found in
// the stop list, and builds a sorted vocabulary. Weights use the smoothed
// idf that the common toolkits default to:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//
// and each row of raw-count tf * idf is L2 normalized. Queries are projected
// into the same space with the fitted vocabulary and idf.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::PipelineError;
use crate::text::normalizer::Normalizer;
use crate::text::stop_words::StopWordSource;

/// Explicit vectorizer configuration: which tokenizer and which stop list.
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    pub normalizer: Normalizer,
    pub stop_words: HashSet<String>,
}

impl VectorizerConfig {
    pub fn new(source: StopWordSource, min_token_length: usize) -> Self {
        Self {
            normalizer: Normalizer::new(min_token_length),
            stop_words: source.load(),
        }
    }
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            normalizer: Normalizer::default(),
            stop_words: StopWordSource::Builtin.load(),
        }
    }
}

/// Document x vocabulary weight table. Column order follows `vocabulary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdfMatrix {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, doc: usize) -> Option<&[f64]> {
        self.rows.get(doc).map(|r| r.as_slice())
    }

    /// Weight of `stem` in document `doc`; zero for unknown stems or rows.
    pub fn weight(&self, doc: usize, stem: &str) -> f64 {
        match (self.row(doc), self.vocabulary.binary_search_by(|v| v.as_str().cmp(stem))) {
            (Some(row), Ok(col)) => row[col],
            _ => 0.0,
        }
    }
}

/// Unfitted vectorizer. `fit` consumes it and yields a `FittedVectorizer`.
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    config: VectorizerConfig,
}

impl Vectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Normalize `text` and drop stop-listed stems.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.config
            .normalizer
            .normalize(text)
            .into_iter()
            .filter(|stem| !self.config.stop_words.contains(stem))
            .collect()
    }

    /// Learn vocabulary and idf from `documents` and weight every document.
    pub fn fit(self, documents: &[String]) -> Result<FittedVectorizer, PipelineError> {
        let analyzed: Vec<Vec<String>> = documents.iter().map(|d| self.analyze(d)).collect();

        let vocabulary: Vec<String> = analyzed
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if documents.is_empty() || vocabulary.is_empty() {
            return Err(PipelineError::EmptyVocabulary {
                documents: documents.len(),
            });
        }

        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, stem)| (stem.clone(), i))
            .collect();

        // Document frequency: count each stem once per document
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &analyzed {
            let seen: HashSet<usize> = tokens.iter().filter_map(|t| index.get(t).copied()).collect();
            for col in seen {
                df[col] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<f64>> = analyzed
            .iter()
            .map(|tokens| weigh(tokens, &index, &idf))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vectorizer"
        );

        Ok(FittedVectorizer {
            vectorizer: self,
            index,
            idf,
            matrix: TfIdfMatrix { vocabulary, rows },
        })
    }
}

/// A vectorizer bound to one document collection.
#[derive(Debug, Clone)]
pub struct FittedVectorizer {
    vectorizer: Vectorizer,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
    matrix: TfIdfMatrix,
}

impl FittedVectorizer {
    pub fn matrix(&self) -> &TfIdfMatrix {
        &self.matrix
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.matrix.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn config(&self) -> &VectorizerConfig {
        self.vectorizer.config()
    }

    /// Column of `stem` in the vocabulary, if it survived fitting.
    pub fn column(&self, stem: &str) -> Option<usize> {
        self.index.get(stem).copied()
    }

    /// Project `text` into the fitted space. Unknown stems are ignored.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let tokens = self.vectorizer.analyze(text);
        weigh(&tokens, &self.index, &self.idf)
    }
}

/// Raw-count tf times idf, L2 normalized. An all-zero row stays zero.
fn weigh(tokens: &[String], index: &HashMap<String, usize>, idf: &[f64]) -> Vec<f64> {
    let mut row = vec![0.0; idf.len()];
    for token in tokens {
        if let Some(&col) = index.get(token) {
            row[col] += 1.0;
        }
    }
    for (weight, idf) in row.iter_mut().zip(idf) {
        *weight *= idf;
    }
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in &mut row {
            *weight /= norm;
        }
    }
    row
}
