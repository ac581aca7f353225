//! TF-IDF vectorizer. Built fresh for every ranking or similarity call and
//! dropped when the call returns; nothing here is shared between analyses.

use std::collections::{BTreeMap, HashMap};

use crate::analysis::stop_words::StopWords;
use crate::errors::MatchError;

/// How a vectorizer turns text into terms.
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    /// Inclusive n-gram range, e.g. `(1, 2)` for unigrams and bigrams.
    pub ngram_range: (usize, usize),
    pub stop_words: StopWords,
    /// Keep only the most frequent terms across the fitted documents.
    pub max_features: Option<usize>,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 1),
            stop_words: StopWords::none(),
            max_features: None,
        }
    }
}

/// Output of a fit: a lexicographically ordered vocabulary and one
/// L2-normalized weight row per input document.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

/// Splits normalized text into terms.
///
/// A term is a run of ASCII letters and digits. A run holding a letter keeps
/// trailing `+`/`#` when nothing alphanumeric follows them (`c++`, `c#`).
/// Any other symbol separates terms, so `node+react` gives `node` and `react`
/// and `5+` gives `5`. Terms shorter than two characters are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut chars = chunk.char_indices().peekable();
        while let Some(&(start, c)) = chars.peek() {
            if !c.is_ascii_alphanumeric() {
                chars.next();
                continue;
            }

            let mut end = start;
            let mut has_letter = false;
            while let Some((i, c)) = chars.next_if(|&(_, c)| c.is_ascii_alphanumeric()) {
                has_letter |= c.is_ascii_alphabetic();
                end = i + c.len_utf8();
            }

            let mut suffix_end = end;
            while let Some((i, _)) = chars.next_if(|&(_, c)| matches!(c, '+' | '#')) {
                suffix_end = i + 1;
            }
            let separated = chars.peek().map_or(true, |&(_, c)| !c.is_ascii_alphanumeric());
            let token_end = if has_letter && separated { suffix_end } else { end };

            let token = &chunk[start..token_end];
            if token.chars().count() >= 2 {
                tokens.push(token);
            }
        }
    }
    tokens
}

/// Fits a TF-IDF model over `documents` and returns their weight rows.
///
/// Weight = raw count × (ln((1 + n) / (1 + df)) + 1), each row L2-normalized.
/// Fails with `DegenerateSimilarityInput` when no document yields a term.
pub fn fit_transform(
    config: &VectorizerConfig,
    documents: &[&str],
) -> Result<TfidfModel, MatchError> {
    let counts: Vec<HashMap<String, usize>> =
        documents.iter().map(|doc| count_terms(config, doc)).collect();

    // term -> (total count, document frequency), ordered by term
    let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for doc_counts in &counts {
        for (term, &count) in doc_counts {
            let entry = stats.entry(term.as_str()).or_insert((0, 0));
            entry.0 += count;
            entry.1 += 1;
        }
    }

    if stats.is_empty() {
        return Err(MatchError::DegenerateSimilarityInput);
    }

    let mut kept: Vec<(&str, (usize, usize))> = stats.into_iter().collect();
    if let Some(limit) = config.max_features {
        if kept.len() > limit {
            // stable: equal totals keep lexicographic order
            kept.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
            kept.truncate(limit);
            kept.sort_by(|a, b| a.0.cmp(b.0));
        }
    }

    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = kept
        .iter()
        .map(|(_, (_, df))| ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0)
        .collect();

    let rows = counts
        .iter()
        .map(|doc_counts| {
            let mut row: Vec<f64> = kept
                .iter()
                .zip(&idf)
                .map(|((term, _), idf)| {
                    doc_counts.get(*term).copied().unwrap_or(0) as f64 * idf
                })
                .collect();
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|w| *w /= norm);
            }
            row
        })
        .collect();

    Ok(TfidfModel {
        vocabulary: kept.into_iter().map(|(term, _)| term.to_string()).collect(),
        rows,
    })
}

fn count_terms(config: &VectorizerConfig, text: &str) -> HashMap<String, usize> {
    let tokens: Vec<&str> = tokenize(text)
        .into_iter()
        .filter(|t| !config.stop_words.contains(t))
        .collect();

    let (min_n, max_n) = config.ngram_range;
    let mut counts = HashMap::new();
    for n in min_n.max(1)..=max_n {
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}
