// Translation dictionary types - the flat term mapping and its error taxonomy

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat mapping from source-language term to target-language term.
///
/// Terms are case-sensitive and unique. The persisted form is a flat JSON
/// object with string values; nested objects, arrays or numbers fail to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    terms: BTreeMap<String, String>,
}

/// Error types for dictionary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DictionaryError {
    /// Persisted source could not be read
    #[error("Failed to load dictionary: {0}")]
    LoadError(String),
    /// Persisted source is not a flat string-to-string mapping
    #[error("Failed to parse dictionary: {0}")]
    ParseError(String),
    /// Term not present in the dictionary
    #[error("Term '{0}' not found")]
    NotFound(String),
    /// Term rejected before insertion
    #[error("Invalid term: {0}")]
    InvalidTerm(String),
    /// Failed to persist the dictionary
    #[error("Failed to persist dictionary: {0}")]
    PersistenceError(String),
}

impl TranslationDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from its persisted JSON form
    pub fn from_json(content: &str) -> Result<Self, DictionaryError> {
        serde_json::from_str(content).map_err(|e| DictionaryError::ParseError(e.to_string()))
    }

    /// Serialize to pretty-printed JSON, terms in sorted order
    pub fn to_json_pretty(&self) -> Result<String, DictionaryError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DictionaryError::PersistenceError(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up the translation for an exact, case-sensitive term
    pub fn get(&self, term: &str) -> Option<&str> {
        self.terms.get(term).map(String::as_str)
    }

    /// Iterate terms in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Terms ordered by descending character count.
    ///
    /// Ties keep lexicographic order so the substitution order is stable
    /// across runs.
    pub fn terms_longest_first(&self) -> Vec<(&str, &str)> {
        let mut terms: Vec<(&str, &str)> = self.iter().collect();
        terms.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        terms
    }

    pub(crate) fn insert(&mut self, term: String, translation: String) -> Option<String> {
        self.terms.insert(term, translation)
    }

    pub(crate) fn remove(&mut self, term: &str) -> Option<String> {
        self.terms.remove(term)
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            terms: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
