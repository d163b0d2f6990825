use std::env;

use anyhow::{Context, Result};

use crate::scoring::vectorizer::VectorizerConfig;
use crate::text::normalizer::DEFAULT_MIN_TOKEN_LENGTH;
use crate::text::stop_words::StopWordSource;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stop list for vocabulary building (TFIDF_HUMOR_STOP_WORDS)
    pub stop_words: StopWordSource,
    /// Shortest token kept by the normalizer (TFIDF_HUMOR_MIN_TOKEN_LENGTH)
    pub min_token_length: usize,
    /// Fixed seed for mnemonic selection (TFIDF_HUMOR_SEED)
    pub seed: Option<u64>,
    /// Web server bind address (TFIDF_HUMOR_BIND)
    pub bind: String,
    /// Web server port (TFIDF_HUMOR_PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: StopWordSource::Builtin,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            seed: None,
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults;
    /// set-but-invalid values are an error rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("TFIDF_HUMOR_STOP_WORDS") {
            config.stop_words = raw
                .parse()
                .map_err(|e: String| anyhow::anyhow!("TFIDF_HUMOR_STOP_WORDS: {e}"))?;
        }
        if let Some(raw) = lookup("TFIDF_HUMOR_MIN_TOKEN_LENGTH") {
            config.min_token_length = raw
                .trim()
                .parse()
                .with_context(|| format!("TFIDF_HUMOR_MIN_TOKEN_LENGTH is not a number: {raw}"))?;
        }
        if let Some(raw) = lookup("TFIDF_HUMOR_SEED") {
            config.seed = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("TFIDF_HUMOR_SEED is not a number: {raw}"))?,
            );
        }
        if let Some(raw) = lookup("TFIDF_HUMOR_BIND") {
            config.bind = raw;
        }
        if let Some(raw) = lookup("TFIDF_HUMOR_PORT") {
            config.port = raw
                .trim()
                .parse()
                .with_context(|| format!("TFIDF_HUMOR_PORT is not a valid port: {raw}"))?;
        }

        Ok(config)
    }

    /// Fresh vectorizer configuration for one run.
    pub fn vectorizer_config(&self) -> VectorizerConfig {
        VectorizerConfig::new(self.stop_words, self.min_token_length)
    }
}
