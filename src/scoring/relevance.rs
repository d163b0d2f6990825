// Cosine-similarity ranking of documents against a query vector.

use serde::Serialize;

use super::vectorizer::TfIdfMatrix;

/// Outcome of ranking every document against one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub best_index: usize,
    pub best_score: f64,
    pub scores: Vec<f64>,
}

/// Cosine of the angle between `a` and `b`.
///
/// Zero when either vector has zero norm (an all-stop-word query, say).
/// Clamped to [0, 1] since TF-IDF weights are non-negative and rounding can
/// nudge identical vectors just past 1.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Score every row of `matrix` against `query` and pick the best.
///
/// Ties go to the lowest index. Returns `None` only for a matrix with no rows.
pub fn rank(query: &[f64], matrix: &TfIdfMatrix) -> Option<Ranking> {
    let scores: Vec<f64> = matrix
        .rows
        .iter()
        .map(|row| cosine_similarity(query, row))
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(best_index, best_score)| Ranking {
        best_index,
        best_score,
        scores,
    })
}
