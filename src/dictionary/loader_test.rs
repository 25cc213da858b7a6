// Tests for DictionaryLoader
// Test cases:
// - Successful load is memoized: the source is read exactly once
// - Failed load degrades to an empty mapping and is retried on the next call
// - Concurrent first callers share one in-flight load
// - Preloaded loader never touches its source
// - A file changed after the first load is not picked up

use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Source that counts fetches and returns a configurable result
struct CountingSource {
    calls: Arc<AtomicUsize>,
    result: Arc<Mutex<Result<TranslationDictionary, DictionaryError>>>,
    delay: Duration,
}

impl CountingSource {
    fn new(
        result: Result<TranslationDictionary, DictionaryError>,
    ) -> (
        Self,
        Arc<AtomicUsize>,
        Arc<Mutex<Result<TranslationDictionary, DictionaryError>>>,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let result = Arc::new(Mutex::new(result));
        (
            Self {
                calls: calls.clone(),
                result: result.clone(),
                delay: Duration::ZERO,
            },
            calls,
            result,
        )
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl DictionarySource for CountingSource {
    async fn fetch(&self) -> Result<TranslationDictionary, DictionaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.lock().unwrap().clone()
    }

    fn describe(&self) -> String {
        "counting source".to_string()
    }
}

fn sample_dictionary() -> TranslationDictionary {
    [("Bau", "Construction")].into_iter().collect()
}

#[tokio::test]
async fn test_successful_load_is_memoized() {
    let (source, calls, _) = CountingSource::new(Ok(sample_dictionary()));
    let loader = DictionaryLoader::new(source);

    assert!(!loader.is_loaded());
    let first = loader.get().await;
    let second = loader.get().await;
    let third = loader.try_get().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(loader.is_loaded());
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &third));
    assert_eq!(first.get("Bau"), Some("Construction"));
}

#[tokio::test]
async fn test_failed_load_degrades_to_empty_and_retries() {
    let (source, calls, result) =
        CountingSource::new(Err(DictionaryError::LoadError("missing".to_string())));
    let loader = DictionaryLoader::new(source);

    assert!(loader.get().await.is_empty());
    assert!(loader.get().await.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert!(!loader.is_loaded());

    // Once the source recovers the next call loads and memoizes
    *result.lock().unwrap() = Ok(sample_dictionary());
    assert_eq!(loader.get().await.get("Bau"), Some("Construction"));
    assert!(loader.get().await.get("Bau").is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_try_get_surfaces_the_error() {
    let (source, _, _) =
        CountingSource::new(Err(DictionaryError::ParseError("bad json".to_string())));
    let loader = DictionaryLoader::new(source);

    let result = loader.try_get().await;

    assert_eq!(result, Err(DictionaryError::ParseError("bad json".to_string())));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_callers_share_one_load() {
    let (source, calls, _) = CountingSource::new(Ok(sample_dictionary()));
    let loader = Arc::new(DictionaryLoader::new(
        source.with_delay(Duration::from_millis(50)),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.get().await })
        })
        .collect();

    for handle in handles {
        let dictionary = handle.await.unwrap();
        assert_eq!(dictionary.get("Bau"), Some("Construction"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_preloaded_loader_is_already_loaded() {
    let loader = DictionaryLoader::preloaded(sample_dictionary());

    assert!(loader.is_loaded());
    assert_eq!(loader.get().await.get("Bau"), Some("Construction"));
}

#[tokio::test]
async fn test_file_changes_after_load_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dictionary.json");
    std::fs::write(&path, r#"{"Bau": "Construction"}"#).unwrap();

    let loader = DictionaryLoader::from_path(&path);
    assert_eq!(loader.get().await.get("Bau"), Some("Construction"));

    std::fs::write(&path, r#"{"Bau": "Building"}"#).unwrap();
    assert_eq!(loader.get().await.get("Bau"), Some("Construction"));
}

#[tokio::test]
async fn test_missing_file_yields_empty_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let loader = DictionaryLoader::from_path(temp_dir.path().join("missing.json"));

    assert!(loader.get().await.is_empty());
    assert!(!loader.is_loaded());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_callers_share_one_failed_load() {
    let (source, calls, result) =
        CountingSource::new(Err(DictionaryError::LoadError("missing".to_string())));
    let loader = Arc::new(DictionaryLoader::new(
        source.with_delay(Duration::from_millis(100)),
    ));

    let start = std::time::Instant::now();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.try_get().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.await.unwrap(),
            Err(DictionaryError::LoadError("missing".to_string()))
        );
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(start.elapsed() < Duration::from_millis(400));
    assert!(!loader.is_loaded());

    // A later call starts a fresh attempt
    *result.lock().unwrap() = Ok(sample_dictionary());
    assert_eq!(loader.get().await.get("Bau"), Some("Construction"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_get_degrades_to_empty_on_shared_failure() {
    let (source, calls, _) =
        CountingSource::new(Err(DictionaryError::ParseError("bad json".to_string())));
    let loader = Arc::new(DictionaryLoader::new(
        source.with_delay(Duration::from_millis(50)),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let loader = loader.clone();
            tokio::spawn(async move { loader.get().await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_empty());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
