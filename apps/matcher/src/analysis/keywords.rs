//! Keyword Ranker: TF-IDF over unigrams and bigrams of one normalized text.
//!
//! The model is fitted on the single input document, so idf is 1 for every
//! term and weights reduce to normalized in-document frequency.

use crate::analysis::vectorizer::{fit_transform, VectorizerConfig};
use crate::config::MatchConfig;
use crate::models::{Keyword, KeywordSet};

/// Ranks the `top_n` most significant terms of `normalized_text` using the
/// default settings (English stop words, 500-term vocabulary).
pub fn rank_keywords(normalized_text: &str, top_n: usize) -> KeywordSet {
    rank_keywords_with(normalized_text, top_n, &MatchConfig::default())
}

/// Ranks keywords with explicit settings.
///
/// Only terms with positive weight are returned, strongest first. Equal
/// weights keep vocabulary (lexicographic) order.
pub fn rank_keywords_with(normalized_text: &str, top_n: usize, config: &MatchConfig) -> KeywordSet {
    let vectorizer = VectorizerConfig {
        ngram_range: (1, 2),
        stop_words: config.stop_words.clone(),
        max_features: Some(config.max_features),
    };

    let model = match fit_transform(&vectorizer, &[normalized_text]) {
        Ok(model) => model,
        Err(_) => return KeywordSet::default(),
    };

    let mut ranked: Vec<Keyword> = model
        .vocabulary
        .into_iter()
        .zip(model.rows[0].iter().copied())
        .filter(|(_, weight)| *weight > 0.0)
        .map(|(term, weight)| Keyword { term, weight })
        .collect();

    // stable sort: ties stay in vocabulary order
    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked.truncate(top_n);

    KeywordSet::new(ranked)
}
