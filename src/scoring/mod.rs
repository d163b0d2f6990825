// Relevance scoring — TF-IDF weighting, cosine ranking, keyword matching.

pub mod keywords;
pub mod relevance;
pub mod vectorizer;
