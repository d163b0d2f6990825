// Single-shot scoring pipeline.
//
//   raw text -> normalize -> fit/transform -> rank -> keywords -> mnemonics
//
// Every call builds its own vectorizer; nothing is shared between runs.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::mnemonic;
use crate::scoring::keywords::extract_keywords;
use crate::scoring::relevance::rank;
use crate::scoring::vectorizer::{TfIdfMatrix, Vectorizer, VectorizerConfig};

/// Example documents used when the user supplies none.
pub const DEFAULT_DOCUMENTS: &str =
    "The dog barks loudly.\nThe cat meows at night.\nThe dog and the cat play together.";

/// Example question used when the user supplies none.
pub const DEFAULT_QUESTION: &str = "Who is playing?";

/// A keyword and the sentence generated for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mnemonic {
    pub keyword: String,
    pub sentence: String,
}

/// Everything a shell needs to render one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub question: String,
    pub documents: Vec<String>,
    pub matrix: TfIdfMatrix,
    pub scores: Vec<f64>,
    pub best_index: usize,
    pub best_document: String,
    pub best_score: f64,
    pub keywords: Vec<String>,
    pub mnemonics: Vec<Mnemonic>,
}

impl Report {
    /// Display label of the best document, e.g. `Doc 3`.
    pub fn best_label(&self) -> String {
        document_label(self.best_index)
    }

    pub fn has_matches(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// 1-based display label for the document at `index`.
pub fn document_label(index: usize) -> String {
    format!("Doc {}", index + 1)
}

/// One document per non-blank line, trimmed.
pub fn split_documents(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the whole pipeline over raw document text and a question.
pub fn run<R: Rng + ?Sized>(
    documents_text: &str,
    question: &str,
    config: VectorizerConfig,
    rng: &mut R,
) -> Result<Report, PipelineError> {
    let documents = split_documents(documents_text);
    if documents.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let normalizer = config.normalizer.clone();
    let fitted = Vectorizer::new(config).fit(&documents)?;
    let query = fitted.transform(question);

    let ranking = rank(&query, fitted.matrix()).ok_or(PipelineError::EmptyInput)?;
    debug!(scores = ?ranking.scores, "Ranked documents");

    let best_row = fitted.matrix().rows[ranking.best_index].as_slice();
    let keywords = extract_keywords(&normalizer, question, &fitted, best_row);

    let mnemonics: Vec<Mnemonic> = keywords
        .iter()
        .map(|keyword| Mnemonic {
            keyword: keyword.clone(),
            sentence: mnemonic::generate(keyword, rng),
        })
        .collect();

    info!(
        documents = documents.len(),
        vocabulary = fitted.vocabulary().len(),
        best = ranking.best_index + 1,
        score = ranking.best_score,
        keywords = keywords.len(),
        "Scored question against documents"
    );

    Ok(Report {
        question: question.to_string(),
        best_document: documents[ranking.best_index].clone(),
        documents,
        matrix: fitted.matrix().clone(),
        scores: ranking.scores,
        best_index: ranking.best_index,
        best_score: ranking.best_score,
        keywords,
        mnemonics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::{render_all, seeded_rng};

    #[test]
    fn test_split_documents() {
        let docs = split_documents("  first line \n\n   \nsecond\r\n");
        assert_eq!(docs, vec!["first line", "second"]);
    }

    #[test]
    fn test_default_scenario() {
        let report = run(
            DEFAULT_DOCUMENTS,
            DEFAULT_QUESTION,
            VectorizerConfig::default(),
            &mut seeded_rng(Some(1)),
        )
        .unwrap();
        assert_eq!(report.best_index, 2);
        assert_eq!(report.best_document, "The dog and the cat play together.");
        assert_eq!(report.best_label(), "Doc 3");
        assert!(report.best_score > 0.0);
        assert_eq!(report.keywords, vec!["play"]);
        assert_eq!(report.mnemonics.len(), 1);
        assert!(render_all("play").contains(&report.mnemonics[0].sentence));
    }

    #[test]
    fn test_no_shared_words() {
        let report = run(
            "Hello world.",
            "Goodbye.",
            VectorizerConfig::default(),
            &mut seeded_rng(Some(1)),
        )
        .unwrap();
        assert_eq!(report.best_index, 0);
        assert_eq!(report.best_score, 0.0);
        assert!(!report.has_matches());
        assert!(report.mnemonics.is_empty());
    }

    #[test]
    fn test_blank_input() {
        let err = run("\n   \n", "anything", VectorizerConfig::default(), &mut seeded_rng(None))
            .unwrap_err();
        assert_eq!(err, PipelineError::EmptyInput);
    }

    #[test]
    fn test_stop_word_only_documents() {
        let err = run("The and the.\nA an I", "dog", VectorizerConfig::default(), &mut seeded_rng(None))
            .unwrap_err();
        assert_eq!(err, PipelineError::EmptyVocabulary { documents: 2 });
    }
}
