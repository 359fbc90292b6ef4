//! # LogListener — simple payload printer
//!
//! A minimal listener that logs every payload it receives through `tracing`.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! INFO emitvisor::listeners::log: event="user.created" payload=UserEvent { id: "1" }
//! INFO emitvisor::listeners::log: event="user.deleted" payload=UserEvent { id: "2" } ctx_cancelled=true
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::events::Event;
use crate::listeners::Listen;

/// Payload logging listener.
///
/// Carries the event label it was registered for, since listeners are not told
/// which event triggered them.
#[derive(Debug)]
pub struct LogListener<T> {
    event: Event,
    _payload: PhantomData<fn(T)>,
}

impl<T> LogListener<T> {
    /// Construct a new [`LogListener`] tagging output with `event`.
    #[must_use]
    pub fn new(event: impl Into<Event>) -> Self {
        Self {
            event: event.into(),
            _payload: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Listen<T> for LogListener<T>
where
    T: Debug + Send + Sync + 'static,
{
    async fn on_event(&self, ctx: CancellationToken, payload: Arc<T>) {
        if ctx.is_cancelled() {
            tracing::info!(event = %self.event, payload = ?payload, ctx_cancelled = true);
        } else {
            tracing::info!(event = %self.event, payload = ?payload);
        }
    }

    fn name(&self) -> &str {
        "LogListener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logs_without_panicking_on_cancelled_context() {
        let l = LogListener::<u32>::new("numbers");
        let ctx = CancellationToken::new();
        ctx.cancel();

        l.on_event(ctx, Arc::new(7)).await;
        assert_eq!(l.name(), "LogListener");
    }
}
