use crate::analysis::normalizer::normalize;

/// A unit of text in both of its states. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    normalized: String,
}

impl Document {
    /// Normalizes `raw` exactly once and keeps both forms.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Length of the raw text in characters.
    pub fn char_count(&self) -> usize {
        self.raw.chars().count()
    }
}
