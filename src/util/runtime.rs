//! Tokio runtime helpers for async-to-sync bridges.
//!
//! Lets synchronous callers drive the async translator whether or not a Tokio
//! runtime is already running on the current thread.

use tokio::runtime::{Builder, Handle, RuntimeFlavor};

/// Run an async future to completion from synchronous code.
///
/// Handles three scenarios:
/// 1. Inside a multi-thread runtime: uses `block_in_place` to block on the future.
/// 2. Inside a current-thread runtime, where `block_in_place` is not allowed:
///    drives the future on a scoped helper thread with its own runtime.
/// 3. No runtime available: creates a temporary one to run the future.
///
/// # Panics
/// Panics if a temporary runtime cannot be created, or re-raises a panic from
/// the future.
///
/// # Example
/// ```ignore
/// use crate::util::run_async;
///
/// let text = run_async(translator.translate("Der Bau"));
/// ```
pub fn run_async<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T> + Send,
    T: Send,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| handle.block_on(future))
        }
        Ok(_) => std::thread::scope(|scope| {
            match scope.spawn(|| block_on_fresh(future)).join() {
                Ok(value) => value,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }),
        Err(_) => block_on_fresh(future),
    }
}

fn block_on_fresh<F>(future: F) -> F::Output
where
    F: std::future::Future,
{
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime for async operation");
    rt.block_on(future)
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
