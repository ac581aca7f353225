//! Batch intake: reads résumé files from disk and analyzes them concurrently
//! against one job description, one blocking task per file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::extractor::{PdfExtractor, PlainTextExtractor};
use crate::analysis::orchestrator::{MatchAnalyzer, TfidfMatchAnalyzer};
use crate::config::MatchConfig;
use crate::errors::{ErrorBody, MatchError};
use crate::models::MatchResult;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Only PDF and plain-text resumes are supported, got '{0}'")]
    Unsupported(String),

    #[error("File size exceeds the {limit} byte limit ({size} bytes)")]
    TooLarge { size: u64, limit: u64 },

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Analysis worker failed: {0}")]
    Worker(String),
}

impl IntakeError {
    pub fn code(&self) -> &'static str {
        match self {
            IntakeError::Unsupported(_) => "UNSUPPORTED_DOCUMENT",
            IntakeError::TooLarge { .. } => "DOCUMENT_TOO_LARGE",
            IntakeError::Read { .. } => "READ_ERROR",
            IntakeError::Match(e) => e.code(),
            IntakeError::Worker(_) => "INTERNAL_ERROR",
        }
    }

    /// Error payload for a failed report. Engine errors keep their own body.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            IntakeError::Match(e) => e.to_body(),
            other => ErrorBody {
                code: other.code().to_string(),
                message: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Chooses the extractor by file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Outcome for one résumé file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub resume_file: String,
    pub success: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl AnalysisReport {
    fn from_outcome(path: &Path, outcome: Result<MatchResult, IntakeError>) -> Self {
        let resume_file = path.display().to_string();
        match outcome {
            Ok(result) => AnalysisReport {
                resume_file,
                success: true,
                result: Some(result),
                error: None,
            },
            Err(e) => {
                warn!("Analysis of {resume_file} failed: {e}");
                AnalysisReport {
                    resume_file,
                    success: false,
                    result: None,
                    error: Some(e.to_body()),
                }
            }
        }
    }
}

/// Runs analyses for many files. Cloning shares the underlying analyzers.
#[derive(Clone)]
pub struct BatchRunner {
    pdf: Arc<dyn MatchAnalyzer>,
    text: Arc<dyn MatchAnalyzer>,
    max_document_bytes: u64,
}

impl BatchRunner {
    pub fn new(config: MatchConfig, max_document_bytes: u64) -> Self {
        Self {
            pdf: Arc::new(TfidfMatchAnalyzer::with_extractor(PdfExtractor, config.clone())),
            text: Arc::new(TfidfMatchAnalyzer::with_extractor(PlainTextExtractor, config)),
            max_document_bytes,
        }
    }

    /// Analyzes every file; reports come back in input order.
    pub async fn run(&self, paths: &[PathBuf], job_description: &str) -> Vec<AnalysisReport> {
        let job: Arc<str> = Arc::from(job_description);

        let handles: Vec<_> = paths
            .iter()
            .cloned()
            .map(|path| {
                let runner = self.clone();
                let job = Arc::clone(&job);
                tokio::spawn(async move {
                    let outcome = runner.analyze_file(&path, job).await;
                    AnalysisReport::from_outcome(&path, outcome)
                })
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (handle, path) in handles.into_iter().zip(paths) {
            let report = match handle.await {
                Ok(report) => report,
                Err(e) => AnalysisReport::from_outcome(path, Err(IntakeError::Worker(e.to_string()))),
            };
            reports.push(report);
        }

        info!(
            total = reports.len(),
            succeeded = reports.iter().filter(|r| r.success).count(),
            "Batch complete"
        );
        reports
    }

    async fn analyze_file(&self, path: &Path, job: Arc<str>) -> Result<MatchResult, IntakeError> {
        let kind = DocumentKind::from_path(path)
            .ok_or_else(|| IntakeError::Unsupported(path.display().to_string()))?;

        let read_error = |source| IntakeError::Read {
            path: path.display().to_string(),
            source,
        };
        let size = tokio::fs::metadata(path).await.map_err(read_error)?.len();
        if size > self.max_document_bytes {
            return Err(IntakeError::TooLarge {
                size,
                limit: self.max_document_bytes,
            });
        }
        let bytes = tokio::fs::read(path).await.map_err(read_error)?;

        let analyzer = match kind {
            DocumentKind::Pdf => Arc::clone(&self.pdf),
            DocumentKind::PlainText => Arc::clone(&self.text),
        };

        // CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || analyzer.analyze(&bytes, &job))
            .await
            .map_err(|e| IntakeError::Worker(e.to_string()))?
            .map_err(IntakeError::from)
    }
}
