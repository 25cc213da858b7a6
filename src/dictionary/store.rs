// Dictionary store - edits the persisted translation dictionary file
// The running translator never reloads; this store is for offline maintenance
// of the file the loader reads on its next start.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{DictionaryError, TranslationDictionary};

/// Store for translation terms with file-based persistence
#[derive(Debug)]
pub struct DictionaryStore {
    /// Terms currently held by the store
    dictionary: TranslationDictionary,
    /// Path to persistence file
    path: PathBuf,
}

impl DictionaryStore {
    /// Create an empty store bound to the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            dictionary: TranslationDictionary::new(),
            path,
        }
    }

    /// Create a store and load whatever the file currently holds
    pub fn open(path: PathBuf) -> Result<Self, DictionaryError> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load terms from the persistence file
    ///
    /// A missing file leaves the store empty.
    pub fn load(&mut self) -> Result<(), DictionaryError> {
        crate::debug!("Loading dictionary store from {:?}", self.path);

        if !self.path.exists() {
            crate::debug!("No dictionary file found, starting with empty store");
            self.dictionary = TranslationDictionary::new();
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| DictionaryError::LoadError(e.to_string()))?;
        self.dictionary = TranslationDictionary::from_json(&content)?;

        crate::info!("Loaded {} dictionary terms", self.dictionary.len());
        Ok(())
    }

    /// Persist terms to the file using atomic write (temp file + rename)
    fn save(&self) -> Result<(), DictionaryError> {
        crate::debug!(
            "Persisting {} dictionary terms to {:?}",
            self.dictionary.len(),
            self.path
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| DictionaryError::PersistenceError(e.to_string()))?;
            }
        }

        let content = self.dictionary.to_json_pretty()?;
        let temp_path = self.path.with_extension("tmp");

        let mut file = File::create(&temp_path).map_err(|e| {
            DictionaryError::PersistenceError(format!("Failed to create temp file: {}", e))
        })?;

        // From here on every failure removes the temp file
        let written = file
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write: {}", e))
            .and_then(|_| file.sync_all().map_err(|e| format!("Failed to sync: {}", e)));
        drop(file);

        let renamed = written.and_then(|_| {
            fs::rename(&temp_path, &self.path).map_err(|e| format!("Failed to rename: {}", e))
        });
        if let Err(message) = renamed {
            let _ = fs::remove_file(&temp_path);
            return Err(DictionaryError::PersistenceError(message));
        }

        crate::debug!("Dictionary terms persisted successfully");
        Ok(())
    }

    /// All terms in lexicographic order
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.dictionary.iter().collect()
    }

    /// Get the translation for a term
    pub fn get(&self, term: &str) -> Option<&str> {
        self.dictionary.get(term)
    }

    /// Read-only view of the held terms
    pub fn dictionary(&self) -> &TranslationDictionary {
        &self.dictionary
    }

    /// Add a term or replace its translation.
    ///
    /// Surrounding whitespace is trimmed from the term since a padded term
    /// could never match on word boundaries.
    ///
    /// # Returns
    /// The previous translation when the term already existed
    #[must_use = "this returns a Result that should be handled"]
    pub fn insert(
        &mut self,
        term: &str,
        translation: String,
    ) -> Result<Option<String>, DictionaryError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DictionaryError::InvalidTerm(
                "term cannot be empty".to_string(),
            ));
        }

        let previous = self.dictionary.insert(term.to_string(), translation);
        if let Err(e) = self.save() {
            // Keep memory in step with disk
            match &previous {
                Some(old) => {
                    self.dictionary.insert(term.to_string(), old.clone());
                }
                None => {
                    self.dictionary.remove(term);
                }
            }
            return Err(e);
        }
        Ok(previous)
    }

    /// Remove a term
    ///
    /// # Returns
    /// The translation that was removed
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(&mut self, term: &str) -> Result<String, DictionaryError> {
        let removed = self
            .dictionary
            .remove(term)
            .ok_or_else(|| DictionaryError::NotFound(term.to_string()))?;

        if let Err(e) = self.save() {
            self.dictionary.insert(term.to_string(), removed);
            return Err(e);
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
