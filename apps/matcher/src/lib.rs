//! Résumé / job-description matching engine.
//!
//! ```no_run
//! let pdf = std::fs::read("resume.pdf").unwrap();
//! let result = matcher::analyze(&pdf, "Senior Rust engineer with tokio and Kubernetes experience").unwrap();
//! println!("{} -> {}", result.match_score, result.summary);
//! ```

pub mod analysis;
pub mod batch;
pub mod config;
pub mod errors;
pub mod models;

pub use analysis::keywords::rank_keywords;
pub use analysis::orchestrator::{analyze, MatchAnalyzer, TfidfMatchAnalyzer};
pub use analysis::similarity::score_similarity;
pub use config::MatchConfig;
pub use errors::MatchError;
pub use models::{Document, Keyword, KeywordSet, MatchResult};
