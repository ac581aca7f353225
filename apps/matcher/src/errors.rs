use serde::Serialize;
use thiserror::Error;

/// Error kinds produced by the matching engine.
///
/// Every variant except `DegenerateSimilarityInput` is terminal for the
/// current analysis. `DegenerateSimilarityInput` never leaves the similarity
/// scorer; it is recovered there as a zero score.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("Error extracting document text: {0}")]
    Extraction(String),

    #[error(
        "Could not extract sufficient text from the resume ({chars} characters, at least {min} required). Ensure it is a valid text-based document."
    )]
    InsufficientResumeText { chars: usize, min: usize },

    #[error(
        "Job description is too short ({chars} characters, at least {min} required). Please provide a detailed job description."
    )]
    InsufficientJobDescription { chars: usize, min: usize },

    #[error("Similarity input has no usable terms")]
    DegenerateSimilarityInput,
}

impl MatchError {
    /// Stable machine-readable code for callers that surface errors to users.
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::Extraction(_) => "EXTRACTION_ERROR",
            MatchError::InsufficientResumeText { .. } => "INSUFFICIENT_RESUME_TEXT",
            MatchError::InsufficientJobDescription { .. } => "INSUFFICIENT_JOB_DESCRIPTION",
            MatchError::DegenerateSimilarityInput => "DEGENERATE_SIMILARITY_INPUT",
        }
    }

    /// True when the failure is caused by what the end user supplied.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, MatchError::DegenerateSimilarityInput)
    }

    /// Error body in the `{ "code", "message" }` shape callers serialize.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
