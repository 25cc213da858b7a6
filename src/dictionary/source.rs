// Dictionary sources - where the loader reads the persisted mapping from
// The file source is used in production; the static source backs fixtures and embedding

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DictionaryError, TranslationDictionary};

/// Backend trait for reading a translation dictionary.
///
/// Implementations perform one complete read per call; memoization is the
/// loader's job, not the source's.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Read and parse the dictionary.
    async fn fetch(&self) -> Result<TranslationDictionary, DictionaryError>;

    /// Human-readable origin used in log lines.
    fn describe(&self) -> String;
}

/// Dictionary stored as a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<TranslationDictionary, DictionaryError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DictionaryError::LoadError(format!("{}: {}", self.path.display(), e)))?;

        TranslationDictionary::from_json(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    dictionary: TranslationDictionary,
}

impl StaticSource {
    pub fn new(dictionary: TranslationDictionary) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl DictionarySource for StaticSource {
    async fn fetch(&self) -> Result<TranslationDictionary, DictionaryError> {
        Ok(self.dictionary.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory dictionary ({} terms)", self.dictionary.len())
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
