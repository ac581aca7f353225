use anyhow::{bail, Context, Result};

use crate::analysis::stop_words::StopWords;

/// Default cap on distinct terms in a keyword-ranking vocabulary.
pub const DEFAULT_MAX_FEATURES: usize = 500;
/// Default number of keywords ranked per document for gap analysis.
pub const DEFAULT_KEYWORD_TOP_N: usize = 40;
/// Largest résumé file accepted for analysis: 5 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Tunables of the matching engine. Immutable once built and shared freely
/// between concurrent analyses.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_features: usize,
    pub keyword_top_n: usize,
    pub stop_words: StopWords,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            keyword_top_n: DEFAULT_KEYWORD_TOP_N,
            stop_words: StopWords::english(),
        }
    }
}

/// Command-line configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub max_document_bytes: u64,
    pub matching: MatchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_features = parse_or(&lookup, "MATCHER_MAX_FEATURES", DEFAULT_MAX_FEATURES)?;
        if max_features == 0 {
            bail!("MATCHER_MAX_FEATURES must be greater than zero");
        }
        let keyword_top_n = parse_or(&lookup, "MATCHER_KEYWORD_TOP_N", DEFAULT_KEYWORD_TOP_N)?;

        let stop_words = match lookup("MATCHER_STOP_WORDS").as_deref() {
            None | Some("english") => StopWords::english(),
            Some("none") => StopWords::none(),
            Some(other) => {
                bail!("MATCHER_STOP_WORDS must be 'english' or 'none', got '{other}'")
            }
        };

        Ok(Config {
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_document_bytes: parse_or(
                &lookup,
                "MAX_DOCUMENT_BYTES",
                DEFAULT_MAX_DOCUMENT_BYTES,
            )?,
            matching: MatchConfig {
                max_features,
                keyword_top_n,
                stop_words,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
