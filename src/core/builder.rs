use std::marker::PhantomData;

use tokio::runtime::Handle;

use super::{config::Config, emitter::Emitter};

/// Builder for constructing an [`Emitter`] with optional settings.
#[derive(Debug)]
pub struct EmitterBuilder<T> {
    cfg: Config,
    _payload: PhantomData<fn(T)>,
}

impl<T> EmitterBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// Creates a new builder starting from the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            _payload: PhantomData,
        }
    }

    /// Selects sequential dispatch: listeners of one emission run one after another.
    pub fn sync(mut self, sync: bool) -> Self {
        self.cfg.sync = sync;
        self
    }

    /// Caps listener invocations running at once (`0` = unlimited).
    pub fn max_concurrent(mut self, n: usize) -> Self {
        self.cfg.max_concurrent = n;
        self
    }

    /// Spawns background work on `handle` instead of the runtime current at `emit` time.
    pub fn runtime(mut self, handle: Handle) -> Self {
        self.cfg.runtime = Some(handle);
        self
    }

    /// Builds the emitter.
    pub fn build(self) -> Emitter<T> {
        Emitter::new(self.cfg)
    }
}
