use serde::{Deserialize, Serialize};

/// A ranked term and its weight in the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

/// Keywords of one document, strongest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<Keyword>);

impl KeywordSet {
    pub fn new(keywords: Vec<Keyword>) -> Self {
        Self(keywords)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.0.iter()
    }

    /// Terms in rank order, weights dropped.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|k| k.term.as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.iter().any(|k| k.term == term)
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a Keyword;
    type IntoIter = std::slice::Iter<'a, Keyword>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
