// Offline dictionary translator
// Replaces whole-word dictionary terms in text, longest term first, using a
// dictionary that is loaded once and memoized for the lifetime of the loader.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod translator;
mod util;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{ConfigError, ConfigOverrides, TranslatorConfig};
pub use dictionary::{
    DictionaryError, DictionaryLoader, DictionarySource, DictionaryStore, FileSource,
    StaticSource, TranslationDictionary,
};
pub use translator::{SubstitutionEngine, SubstitutionMode, Translator};
