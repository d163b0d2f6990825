// Text normalization — tokenization, stemming, and stop-word lists.

pub mod normalizer;
pub mod stop_words;
