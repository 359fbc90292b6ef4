//! # Emitter configuration.
//!
//! Provides [`Config`] the settings fixed at emitter construction.
//!
//! Config is used in two ways:
//! 1. **Direct**: `Emitter::new(config)`
//! 2. **Builder**: `Emitter::builder().sync(true).build()`
//!
//! ## Sentinel values
//! - `max_concurrent = 0` → unlimited (no semaphore created)
//! - `runtime = None` → spawn on the runtime current at `emit` time

use tokio::runtime::Handle;

/// Configuration for an emitter instance.
///
/// ## Field semantics
/// - `sync`: dispatch mode (`false` = concurrent, one task per listener)
/// - `max_concurrent`: cap on listener invocations running at once (`0` = unlimited)
/// - `runtime`: where background work is spawned (`None` = ambient runtime)
///
/// ## Notes
/// All fields are public for flexibility. Prefer using helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Sequential dispatch.
    ///
    /// - `true`: listeners of one emission run one after another on a single
    ///   background task, each completing before the next starts
    /// - `false`: every listener of an emission runs as its own task, no mutual ordering
    pub sync: bool,

    /// Maximum number of listener invocations running concurrently.
    ///
    /// - `0` = unlimited (no semaphore)
    /// - `n > 0` = at most `n` listeners run simultaneously
    ///
    /// Applied across all emissions of one emitter. Waiting for a permit happens
    /// in the background, never inside `emit`.
    pub max_concurrent: usize,

    /// Runtime used to spawn dispatch and listener tasks.
    ///
    /// Set it when `emit` may be called from threads outside any tokio runtime.
    pub runtime: Option<Handle>,
}

impl Config {
    /// Returns the concurrency limit as an `Option`.
    ///
    /// - `None` → unlimited (no semaphore)
    /// - `Some(n)` → at most `n` concurrent listener invocations
    #[inline]
    pub fn concurrency_limit(&self) -> Option<usize> {
        if self.max_concurrent == 0 {
            None
        } else {
            Some(self.max_concurrent)
        }
    }

    /// Resolves the runtime to spawn on: the configured handle, else the current one.
    pub(crate) fn runtime_handle(&self) -> Option<Handle> {
        self.runtime.clone().or_else(|| Handle::try_current().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_concurrent_and_unbounded() {
        let cfg = Config::default();
        assert!(!cfg.sync);
        assert_eq!(cfg.concurrency_limit(), None);
        assert!(cfg.runtime.is_none());
    }

    #[test]
    fn test_concurrency_limit_sentinel() {
        let cfg = Config {
            max_concurrent: 4,
            ..Config::default()
        };
        assert_eq!(cfg.concurrency_limit(), Some(4));
    }

    #[test]
    fn test_no_runtime_outside_tokio() {
        assert!(Config::default().runtime_handle().is_none());
    }
}
