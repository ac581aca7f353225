//! Match Orchestrator: validates inputs and runs the analysis stages.
//!
//! `TfidfMatchAnalyzer` holds only immutable configuration; every model it
//! uses is built inside the call. Share it behind an `Arc<dyn MatchAnalyzer>`
//! across as many workers as needed.

use tracing::info;

use crate::analysis::extractor::{DocumentExtractor, PdfExtractor};
use crate::analysis::gap::analyze_gaps;
use crate::analysis::similarity::score_similarity;
use crate::analysis::summary::generate_summary;
use crate::config::MatchConfig;
use crate::errors::MatchError;
use crate::models::{Document, MatchResult};

/// Minimum extracted résumé length, in characters.
pub const MIN_RESUME_CHARS: usize = 50;
/// Minimum job-description length, in characters.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 20;

/// Scores a résumé document against a job description.
pub trait MatchAnalyzer: Send + Sync {
    fn analyze(&self, document: &[u8], job_description: &str)
        -> Result<MatchResult, MatchError>;
}

pub struct TfidfMatchAnalyzer<E = PdfExtractor> {
    extractor: E,
    config: MatchConfig,
}

impl TfidfMatchAnalyzer<PdfExtractor> {
    pub fn new(config: MatchConfig) -> Self {
        Self::with_extractor(PdfExtractor, config)
    }
}

impl Default for TfidfMatchAnalyzer<PdfExtractor> {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl<E: DocumentExtractor> TfidfMatchAnalyzer<E> {
    pub fn with_extractor(extractor: E, config: MatchConfig) -> Self {
        Self { extractor, config }
    }
}

impl<E: DocumentExtractor> MatchAnalyzer for TfidfMatchAnalyzer<E> {
    fn analyze(
        &self,
        document: &[u8],
        job_description: &str,
    ) -> Result<MatchResult, MatchError> {
        let resume = Document::from_raw(self.extractor.extract(document)?);

        let resume_chars = resume.char_count();
        if resume_chars < MIN_RESUME_CHARS {
            return Err(MatchError::InsufficientResumeText {
                chars: resume_chars,
                min: MIN_RESUME_CHARS,
            });
        }

        let job = Document::from_raw(job_description);
        let job_chars = job.char_count();
        if job_chars < MIN_JOB_DESCRIPTION_CHARS {
            return Err(MatchError::InsufficientJobDescription {
                chars: job_chars,
                min: MIN_JOB_DESCRIPTION_CHARS,
            });
        }

        let match_score = score_similarity(resume.normalized(), job.normalized());
        let gaps = analyze_gaps(resume.normalized(), job.normalized(), &self.config);
        let summary = generate_summary(match_score, gaps.missing.len());

        info!(
            match_score,
            matched = gaps.matched.len(),
            missing = gaps.missing.len(),
            "Analysis complete"
        );

        Ok(MatchResult {
            match_score,
            missing_keywords: gaps.missing,
            matched_keywords: gaps.matched,
            summary,
        })
    }
}

/// Analyzes a PDF résumé against a job description with default settings.
pub fn analyze(document: &[u8], job_description: &str) -> Result<MatchResult, MatchError> {
    TfidfMatchAnalyzer::<PdfExtractor>::default().analyze(document, job_description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{build_test_pdf, PlainTextExtractor};
    use crate::analysis::summary::MatchTier;
    use crate::models::match_result::MAX_DISPLAY_KEYWORDS;
    use std::collections::HashSet;
    use std::sync::Arc;

    const RESUME: &str = "Experienced Python developer skilled in React, Docker, and PostgreSQL \
        with five years of industry experience building web applications.";
    const JOB: &str = "We need a Python developer with React, Docker, Kubernetes, and AWS \
        experience for a senior role.";

    fn text_analyzer() -> TfidfMatchAnalyzer<PlainTextExtractor> {
        TfidfMatchAnalyzer::with_extractor(PlainTextExtractor, MatchConfig::default())
    }

    #[test]
    fn test_end_to_end_example() {
        let result = text_analyzer().analyze(RESUME.as_bytes(), JOB).unwrap();

        for skill in ["python", "react", "docker"] {
            assert!(result.matched_keywords.contains(&skill.to_string()));
        }
        for skill in ["kubernetes", "aws"] {
            assert!(result.missing_keywords.contains(&skill.to_string()));
        }
        assert!(result.match_score > 0.0);
        let tier = MatchTier::from_score(result.match_score);
        assert!(result.summary.starts_with(tier.label()));
        assert_eq!(
            result.summary,
            generate_summary(result.match_score, result.missing_keywords.len())
        );
    }

    #[test]
    fn test_result_invariants() {
        let result = text_analyzer().analyze(RESUME.as_bytes(), JOB).unwrap();
        assert!((0.0..=100.0).contains(&result.match_score));
        assert!(result.matched_keywords.len() <= MAX_DISPLAY_KEYWORDS);
        assert!(result.missing_keywords.len() <= MAX_DISPLAY_KEYWORDS);
        let matched: HashSet<&String> = result.matched_keywords.iter().collect();
        assert!(result.missing_keywords.iter().all(|k| !matched.contains(k)));
    }

    #[test]
    fn test_resume_length_boundary() {
        let fifty = "abcdefghij".repeat(5);
        let forty_nine = &fifty[..49];

        let err = text_analyzer()
            .analyze(forty_nine.as_bytes(), JOB)
            .unwrap_err();
        assert_eq!(err, MatchError::InsufficientResumeText { chars: 49, min: 50 });

        assert!(text_analyzer().analyze(fifty.as_bytes(), JOB).is_ok());
    }

    #[test]
    fn test_resume_length_counts_characters() {
        // 25 two-byte characters: 50 bytes but only 25 characters
        let resume = "é".repeat(25);
        let err = text_analyzer().analyze(resume.as_bytes(), JOB).unwrap_err();
        assert_eq!(err, MatchError::InsufficientResumeText { chars: 25, min: 50 });
    }

    #[test]
    fn test_empty_resume_is_insufficient() {
        let err = text_analyzer().analyze(b"   \n ", JOB).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_RESUME_TEXT");
    }

    #[test]
    fn test_blank_pdf_page_is_insufficient() {
        let err = analyze(&build_test_pdf(&[""]), JOB).unwrap_err();
        assert!(matches!(
            err,
            MatchError::InsufficientResumeText { chars: 0, .. }
        ));
    }

    #[test]
    fn test_job_description_length_boundary() {
        let err = text_analyzer()
            .analyze(RESUME.as_bytes(), &"x".repeat(19))
            .unwrap_err();
        assert_eq!(
            err,
            MatchError::InsufficientJobDescription { chars: 19, min: 20 }
        );
        assert!(text_analyzer()
            .analyze(RESUME.as_bytes(), &"x".repeat(20))
            .is_ok());
    }

    #[test]
    fn test_resume_is_validated_before_job_description() {
        let err = text_analyzer().analyze(b"short", "tiny").unwrap_err();
        assert!(matches!(err, MatchError::InsufficientResumeText { .. }));
    }

    #[test]
    fn test_extraction_error_comes_first() {
        let analyzer = TfidfMatchAnalyzer::<PdfExtractor>::default();
        let err = analyzer.analyze(b"not a pdf", "tiny").unwrap_err();
        assert!(matches!(err, MatchError::Extraction(_)));
    }

    #[test]
    fn test_unrelated_documents_score_low() {
        let resume = "Pastry chef specialising in sourdough, laminated doughs and \
            French patisserie for boutique bakeries.";
        let result = text_analyzer().analyze(resume.as_bytes(), JOB).unwrap();
        assert!(result.matched_keywords.is_empty());
        assert!(result.summary.starts_with("Low match"));
    }

    #[test]
    fn test_pdf_end_to_end() {
        let pdf = build_test_pdf(&[
            "Experienced Python developer skilled in React and Docker",
            "Five years building web applications with PostgreSQL",
        ]);
        let result = analyze(&pdf, JOB).unwrap();
        assert!(result.matched_keywords.contains(&"python".to_string()));
        assert!(result.missing_keywords.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_shared_analyzer_across_threads() {
        let analyzer: Arc<dyn MatchAnalyzer> = Arc::new(text_analyzer());
        let expected = analyzer.analyze(RESUME.as_bytes(), JOB).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.analyze(RESUME.as_bytes(), JOB).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
