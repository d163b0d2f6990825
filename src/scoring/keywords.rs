// Keyword extraction — query stems that carry weight in the best document.
//
// The raw query is re-normalized WITHOUT the stop-word filter. Stop-word
// stems still drop out because they never made it into the vocabulary.

use super::vectorizer::FittedVectorizer;
use crate::text::normalizer::Normalizer;

/// Query stems present in the vocabulary with positive weight in `best_row`.
///
/// Keeps query order and duplicates. Empty when nothing matches.
pub fn extract_keywords(
    normalizer: &Normalizer,
    query: &str,
    fitted: &FittedVectorizer,
    best_row: &[f64],
) -> Vec<String> {
    normalizer
        .normalize(query)
        .into_iter()
        .filter(|stem| {
            fitted
                .column(stem)
                .and_then(|col| best_row.get(col))
                .is_some_and(|&weight| weight > 0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::vectorizer::Vectorizer;

    fn fit(lines: &[&str]) -> FittedVectorizer {
        let docs: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        Vectorizer::default().fit(&docs).unwrap()
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let fitted = fit(&["dogs chase cats", "birds sing"]);
        let row = fitted.matrix().row(0).unwrap().to_vec();
        let kw = extract_keywords(&Normalizer::default(), "cat dog cat bird", &fitted, &row);
        assert_eq!(kw, vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_stop_words_fall_out_via_vocabulary() {
        let fitted = fit(&["the dog plays"]);
        let row = fitted.matrix().row(0).unwrap().to_vec();
        let kw = extract_keywords(&Normalizer::default(), "Who is playing with the dog?", &fitted, &row);
        assert_eq!(kw, vec!["play", "dog"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let fitted = fit(&["Hello world."]);
        let row = fitted.matrix().row(0).unwrap().to_vec();
        assert!(extract_keywords(&Normalizer::default(), "Goodbye.", &fitted, &row).is_empty());
    }
}
