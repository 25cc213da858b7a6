// Dictionary loader - reads the translation dictionary once and memoizes it
// Concurrent first callers share a single in-flight load, whether it succeeds or
// fails. A failed load is not memoized, so the next call reads the source again.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use super::{DictionaryError, DictionarySource, FileSource, StaticSource, TranslationDictionary};

/// Lazily-initialized, memoized dictionary.
///
/// Once a load succeeds the dictionary is never reloaded or mutated for the
/// lifetime of the loader. Callers get it through a shared [`Arc`].
pub struct DictionaryLoader {
    source: Box<dyn DictionarySource>,
    cached: OnceCell<Arc<TranslationDictionary>>,
    /// Held while a load is in flight; stores the error of the last failed attempt
    attempt: Mutex<Option<DictionaryError>>,
    /// Bumped under `attempt` each time a load fails
    failures: AtomicU64,
}

impl DictionaryLoader {
    /// Create a loader that reads from the given source on first use
    pub fn new(source: impl DictionarySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cached: OnceCell::new(),
            attempt: Mutex::new(None),
            failures: AtomicU64::new(0),
        }
    }

    /// Create a loader backed by a JSON file
    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Create a loader that already holds `dictionary` and never reads storage
    pub fn preloaded(dictionary: TranslationDictionary) -> Self {
        let cached = Arc::new(dictionary);
        Self {
            source: Box::new(StaticSource::new((*cached).clone())),
            cached: OnceCell::new_with(Some(cached)),
            attempt: Mutex::new(None),
            failures: AtomicU64::new(0),
        }
    }

    /// Whether a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.cached.initialized()
    }

    /// Get the dictionary, loading it on first call.
    ///
    /// Callers that arrive while a load is in flight wait for it and share
    /// its outcome, including its error.
    ///
    /// # Errors
    /// Returns the source's error when the load fails. Nothing is cached in
    /// that case and the next call starts a new load.
    pub async fn try_get(&self) -> Result<Arc<TranslationDictionary>, DictionaryError> {
        if let Some(dictionary) = self.cached.get() {
            return Ok(dictionary.clone());
        }

        let failures_seen = self.failures.load(Ordering::Acquire);
        let mut last_error = self.attempt.lock().await;

        if let Some(dictionary) = self.cached.get() {
            return Ok(dictionary.clone());
        }
        // An attempt failed while we waited for it
        if self.failures.load(Ordering::Acquire) != failures_seen {
            if let Some(e) = last_error.as_ref() {
                return Err(e.clone());
            }
        }

        crate::debug!("Loading translation dictionary from {}", self.source.describe());
        match self.source.fetch().await {
            Ok(dictionary) => {
                crate::info!("Loaded {} translation terms", dictionary.len());
                let dictionary = Arc::new(dictionary);
                // Only this holder of `attempt` can set the cell
                let _ = self.cached.set(dictionary.clone());
                *last_error = None;
                Ok(dictionary)
            }
            Err(e) => {
                *last_error = Some(e.clone());
                self.failures.fetch_add(1, Ordering::Release);
                Err(e)
            }
        }
    }

    /// Get the dictionary, degrading to an empty mapping when the load fails.
    ///
    /// The failure is logged and the next call retries the load.
    pub async fn get(&self) -> Arc<TranslationDictionary> {
        match self.try_get().await {
            Ok(dictionary) => dictionary,
            Err(e) => {
                crate::warn!("Translation dictionary unavailable, using empty mapping: {}", e);
                Arc::new(TranslationDictionary::new())
            }
        }
    }
}

impl std::fmt::Debug for DictionaryLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryLoader")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
