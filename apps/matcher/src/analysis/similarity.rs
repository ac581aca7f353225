//! Similarity Scorer: cosine similarity in a two-document TF-IDF space.

use tracing::debug;

use crate::analysis::vectorizer::{fit_transform, VectorizerConfig};
use crate::errors::MatchError;

/// Similarity of two normalized texts as a percentage in [0, 100], rounded
/// to two decimals. Empty or term-less input scores 0.0.
pub fn score_similarity(normalized_a: &str, normalized_b: &str) -> f64 {
    match cosine_similarity(normalized_a, normalized_b) {
        Ok(cosine) => round2(cosine * 100.0).clamp(0.0, 100.0),
        Err(e) => {
            debug!("Similarity recovered as 0.0: {e}");
            0.0
        }
    }
}

fn cosine_similarity(a: &str, b: &str) -> Result<f64, MatchError> {
    if a.trim().is_empty() || b.trim().is_empty() {
        return Err(MatchError::DegenerateSimilarityInput);
    }

    let model = fit_transform(&VectorizerConfig::default(), &[a, b])?;
    let (row_a, row_b) = (&model.rows[0], &model.rows[1]);

    let dot: f64 = row_a.iter().zip(row_b).map(|(x, y)| x * y).sum();
    let norm_a = row_a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = row_b.iter().map(|y| y * y).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(MatchError::DegenerateSimilarityInput);
    }
    Ok(dot / (norm_a * norm_b))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
