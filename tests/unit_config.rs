// Unit tests for environment-driven configuration.

use std::collections::HashMap;

use tfidf_humor::config::Config;
use tfidf_humor::text::stop_words::StopWordSource;

fn load(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn unset_environment_uses_defaults() {
    assert_eq!(load(&[]).unwrap(), Config::default());
}

#[test]
fn values_are_parsed() {
    let config = load(&[
        ("TFIDF_HUMOR_STOP_WORDS", "iso"),
        ("TFIDF_HUMOR_MIN_TOKEN_LENGTH", "3"),
        ("TFIDF_HUMOR_SEED", "42"),
        ("TFIDF_HUMOR_BIND", "0.0.0.0"),
        ("TFIDF_HUMOR_PORT", "8080"),
    ])
    .unwrap();
    assert_eq!(config.stop_words, StopWordSource::Iso);
    assert_eq!(config.min_token_length, 3);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.bind, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.vectorizer_config().normalizer.min_token_length, 3);
}

#[test]
fn invalid_values_are_errors() {
    assert!(load(&[("TFIDF_HUMOR_STOP_WORDS", "klingon")]).is_err());
    assert!(load(&[("TFIDF_HUMOR_SEED", "soon")]).is_err());
    assert!(load(&[("TFIDF_HUMOR_PORT", "99999")]).is_err());
}
