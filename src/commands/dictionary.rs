// Dictionary commands for maintaining the persisted translation file
// Maps DictionaryError to user-facing messages

use crate::dictionary::{DictionaryError, DictionaryStore};
use serde::Serialize;
use std::path::Path;

/// One term as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntryInfo {
    pub term: String,
    pub translation: String,
}

impl std::fmt::Display for DictionaryEntryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.term, self.translation)
    }
}

/// Map DictionaryError to user-friendly error messages
fn to_user_error(error: DictionaryError) -> String {
    match error {
        DictionaryError::NotFound(term) => format!("Term '{}' not found in dictionary", term),
        DictionaryError::InvalidTerm(msg) => format!("Invalid term: {}", msg),
        DictionaryError::PersistenceError(msg) => format!("Failed to save dictionary: {}", msg),
        DictionaryError::LoadError(msg) => format!("Failed to load dictionary: {}", msg),
        DictionaryError::ParseError(msg) => {
            format!("Dictionary file is not a flat JSON object of strings: {}", msg)
        }
    }
}

/// Open the dictionary file for editing; a missing file opens empty
pub fn open_dictionary_store(path: &Path) -> Result<DictionaryStore, String> {
    DictionaryStore::open(path.to_path_buf()).map_err(to_user_error)
}

/// List all terms, sorted by term
pub fn list_dictionary_entries(store: &DictionaryStore) -> Vec<DictionaryEntryInfo> {
    store
        .list()
        .into_iter()
        .map(|(term, translation)| DictionaryEntryInfo {
            term: term.to_string(),
            translation: translation.to_string(),
        })
        .collect()
}

/// Add a term or replace its translation, persisting the change
///
/// # Returns
/// The previous translation when the term was replaced
pub fn add_dictionary_entry(
    store: &mut DictionaryStore,
    term: &str,
    translation: String,
) -> Result<Option<String>, String> {
    if translation.is_empty() {
        return Err("Translation cannot be empty".to_string());
    }

    let previous = store.insert(term, translation).map_err(to_user_error)?;
    match &previous {
        Some(old) => crate::info!("Replaced dictionary term '{}' (was '{}')", term.trim(), old),
        None => crate::info!("Added dictionary term '{}'", term.trim()),
    }
    Ok(previous)
}

/// Remove a term, persisting the change
///
/// # Returns
/// The translation that was removed
pub fn remove_dictionary_entry(store: &mut DictionaryStore, term: &str) -> Result<String, String> {
    let removed = store.remove(term).map_err(to_user_error)?;
    crate::info!("Removed dictionary term '{}'", term);
    Ok(removed)
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
