// Matching engine: extraction, normalization, keyword ranking, similarity,
// gap analysis, summaries and the orchestrator that sequences them.
// Every stage is a pure, synchronous transformation over in-memory text.

pub mod extractor;
pub mod gap;
pub mod keywords;
pub mod normalizer;
pub mod orchestrator;
pub mod similarity;
pub mod stop_words;
pub mod summary;
pub mod vectorizer;
