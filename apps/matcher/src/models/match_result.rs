use serde::{Deserialize, Serialize};

/// Most keywords reported in either list of a `MatchResult`.
pub const MAX_DISPLAY_KEYWORDS: usize = 15;

/// Outcome of one résumé / job-description analysis.
///
/// `match_score` is a percentage in [0, 100] with two decimals. Both keyword
/// lists hold at most `MAX_DISPLAY_KEYWORDS` distinct, non-empty terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: f64,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub summary: String,
}
