//! Shared utilities for the translator backend.
//!
//! - `runtime`: Tokio runtime helpers for async-to-sync bridges

mod runtime;

pub use runtime::run_async;
