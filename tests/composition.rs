// Composition tests — the whole pipeline from raw text to report.
//
//   split -> fit -> transform -> rank -> keywords -> mnemonics
//
// No network or filesystem access; mnemonic selection is seeded.

use tfidf_humor::error::PipelineError;
use tfidf_humor::mnemonic::{render_all, seeded_rng};
use tfidf_humor::output::{format_score, truncate_chars};
use tfidf_humor::pipeline::{run, DEFAULT_DOCUMENTS, DEFAULT_QUESTION};
use tfidf_humor::scoring::vectorizer::VectorizerConfig;
use tfidf_humor::text::stop_words::StopWordSource;

#[test]
fn default_example_finds_the_playing_document() {
    let report = run(
        DEFAULT_DOCUMENTS,
        DEFAULT_QUESTION,
        VectorizerConfig::default(),
        &mut seeded_rng(Some(3)),
    )
    .unwrap();

    assert_eq!(report.documents.len(), 3);
    assert_eq!(report.best_index, 2);
    assert_eq!(report.best_document, "The dog and the cat play together.");
    assert!(report.best_score > 0.0);
    assert_eq!(report.scores[0], 0.0);
    assert_eq!(report.scores[1], 0.0);
    assert!(report.keywords.contains(&"play".to_string()));

    for m in &report.mnemonics {
        assert!(render_all(&m.keyword).contains(&m.sentence));
    }
}

#[test]
fn no_direct_matches() {
    let report = run(
        "Hello world.",
        "Goodbye.",
        VectorizerConfig::default(),
        &mut seeded_rng(Some(3)),
    )
    .unwrap();
    assert_eq!(report.best_score, 0.0);
    assert!(report.keywords.is_empty());
    assert!(report.mnemonics.is_empty());
    assert!(!report.has_matches());
}

#[test]
fn blank_documents_are_rejected_before_vectorizing() {
    let err = run("", "Who?", VectorizerConfig::default(), &mut seeded_rng(None)).unwrap_err();
    assert_eq!(err, PipelineError::EmptyInput);
    assert_eq!(err.to_string(), "Enter at least one document.");
}

#[test]
fn stop_word_documents_warn_instead_of_crashing() {
    let err = run("The.\nAnd the", "dog", VectorizerConfig::default(), &mut seeded_rng(None))
        .unwrap_err();
    assert!(matches!(err, PipelineError::EmptyVocabulary { documents: 2 }));
}

#[test]
fn disabling_stop_words_lets_function_words_match() {
    let config = VectorizerConfig::new(StopWordSource::None, 2);
    let report = run("the dog\nthe cat", "Is it the cat?", config, &mut seeded_rng(Some(1))).unwrap();
    assert_eq!(report.best_index, 1);
    assert_eq!(report.keywords, vec!["the", "cat"]);
}

#[test]
fn report_serializes_to_json() {
    let report = run(
        DEFAULT_DOCUMENTS,
        DEFAULT_QUESTION,
        VectorizerConfig::default(),
        &mut seeded_rng(Some(9)),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["best_index"], 2);
    assert_eq!(json["keywords"][0], "play");
    assert_eq!(json["matrix"]["rows"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["matrix"]["vocabulary"].as_array().unwrap().len(),
        report.matrix.vocabulary.len()
    );
    assert_eq!(json["mnemonics"][0]["keyword"], "play");
}

#[test]
fn display_helpers() {
    assert_eq!(format_score(0.70710678), "0.707");
    assert_eq!(format_score(0.0), "0.000");
    assert_eq!(truncate_chars("abcdef", 3), "abc...");
    assert_eq!(truncate_chars("café", 10), "café");
}
