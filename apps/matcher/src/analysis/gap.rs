//! Gap Analyzer: which of the job's keywords the résumé covers.

use serde::{Deserialize, Serialize};

use crate::analysis::keywords::rank_keywords_with;
use crate::config::MatchConfig;
use crate::models::match_result::MAX_DISPLAY_KEYWORDS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordGaps {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Compares the ranked keywords of two already-normalized texts.
///
/// Job keywords are walked in rank order (descending job-side weight, ties
/// in vocabulary order); each lands in `matched` when the résumé's keyword
/// set holds it too, otherwise in `missing`. Both lists are cut to
/// `MAX_DISPLAY_KEYWORDS`, so the strongest job terms are the ones shown.
pub fn analyze_gaps(
    resume_normalized: &str,
    job_normalized: &str,
    config: &MatchConfig,
) -> KeywordGaps {
    let resume_keywords = rank_keywords_with(resume_normalized, config.keyword_top_n, config);
    let job_keywords = rank_keywords_with(job_normalized, config.keyword_top_n, config);

    let (matched, missing): (Vec<&str>, Vec<&str>) = job_keywords
        .terms()
        .partition(|term| resume_keywords.contains(term));

    KeywordGaps {
        matched: for_display(matched),
        missing: for_display(missing),
    }
}

fn for_display(terms: Vec<&str>) -> Vec<String> {
    terms
        .into_iter()
        .take(MAX_DISPLAY_KEYWORDS)
        .map(str::to_string)
        .collect()
}
