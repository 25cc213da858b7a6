// Translator - the translation entry point
// Obtains the dictionary through the loader on first use, compiles the substitution
// engine once, then applies it to every request.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::{SubstitutionEngine, SubstitutionMode};
use crate::config::TranslatorConfig;
use crate::dictionary::{DictionaryLoader, TranslationDictionary};

/// Offline dictionary translator
///
/// The dictionary and the compiled engine are memoized after the first
/// successful load. While the dictionary cannot be loaded every call is the
/// identity transform and the next call retries the load.
pub struct Translator {
    loader: Arc<DictionaryLoader>,
    mode: SubstitutionMode,
    engine: OnceCell<Arc<SubstitutionEngine>>,
}

impl Translator {
    /// Create a translator over a (possibly shared) loader
    pub fn new(loader: Arc<DictionaryLoader>, mode: SubstitutionMode) -> Self {
        Self {
            loader,
            mode,
            engine: OnceCell::new(),
        }
    }

    /// Create a translator reading the dictionary file named by the config
    pub fn from_config(config: &TranslatorConfig) -> Self {
        Self::new(
            Arc::new(DictionaryLoader::from_path(config.dictionary_path.clone())),
            config.mode,
        )
    }

    /// Create a translator over a fixed dictionary; storage is never read
    pub fn with_dictionary(dictionary: TranslationDictionary, mode: SubstitutionMode) -> Self {
        Self::new(Arc::new(DictionaryLoader::preloaded(dictionary)), mode)
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    pub fn loader(&self) -> &Arc<DictionaryLoader> {
        &self.loader
    }

    async fn engine(&self) -> Arc<SubstitutionEngine> {
        match self.loader.try_get().await {
            Ok(dictionary) => self
                .engine
                .get_or_init(|| async {
                    Arc::new(SubstitutionEngine::new(&dictionary, self.mode))
                })
                .await
                .clone(),
            Err(e) => {
                crate::warn!("Translating without dictionary: {}", e);
                Arc::new(SubstitutionEngine::empty(self.mode))
            }
        }
    }

    /// Translate text by dictionary substitution.
    ///
    /// Never fails: when the dictionary is unavailable the input comes back
    /// unchanged. Every call, even with empty text, goes through the loader.
    pub async fn translate(&self, text: &str) -> String {
        let engine = self.engine().await;
        let translated = engine.substitute(text);
        crate::trace!("Translated {} chars -> {} chars", text.len(), translated.len());
        translated
    }

    /// Translate a JSON value from a dynamically-typed caller.
    ///
    /// Strings are translated; every other value passes through unchanged.
    pub async fn translate_value(&self, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.translate(&text).await),
            other => other,
        }
    }

    /// Blocking variant of [`Translator::translate`] for synchronous callers
    pub fn translate_blocking(&self, text: &str) -> String {
        crate::util::run_async(self.translate(text))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("loader", &self.loader)
            .field("mode", &self.mode)
            .field("engine_ready", &self.engine.initialized())
            .finish()
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
