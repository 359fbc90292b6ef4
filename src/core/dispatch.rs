//! # Deliver one emission to its listeners.
//!
//! A [`Dispatch`] carries everything one `emit` call captured: the event label,
//! the listener snapshot, the context and the shared payload. It always runs on a
//! background task spawned by the emitter.
//!
//! ## Flow
//! ```text
//! Sequential (sync = true):
//!   dispatch task ──► invoke(l1) ──► invoke(l2) ──► ... ──► invoke(lN)
//!                     (each awaited before the next starts)
//!
//! Concurrent (sync = false):
//!   dispatch task ──┬─► spawn invoke(l1)
//!                   ├─► spawn invoke(l2)      (no mutual ordering)
//!                   └─► spawn invoke(lN)
//! ```
//!
//! ## Rules
//! - The context is forwarded verbatim; cancellation is never checked here
//! - Every listener gets a clone of the same `Arc<T>`
//! - A panic is caught per invocation and logged; the next listener still runs
//! - With a semaphore, each invocation holds one permit while it runs
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a listener uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::core::registry::Snapshot;
use crate::events::Event;
use crate::listeners::ListenerRef;

/// One captured emission.
pub(crate) struct Dispatch<T> {
    pub(crate) event: Event,
    pub(crate) listeners: Snapshot<T>,
    pub(crate) ctx: CancellationToken,
    pub(crate) payload: Arc<T>,
    pub(crate) semaphore: Option<Arc<Semaphore>>,
}

impl<T> Dispatch<T>
where
    T: Send + Sync + 'static,
{
    /// Invokes every listener in registration order, awaiting each one.
    pub(crate) async fn run_sequential(self) {
        for listener in self.listeners.iter() {
            invoke(
                &self.event,
                listener,
                self.ctx.clone(),
                Arc::clone(&self.payload),
                self.semaphore.as_ref(),
            )
            .await;
        }
    }

    /// Spawns one tracked task per listener and returns without waiting for them.
    pub(crate) fn fan_out(self, tracker: &TaskTracker, handle: &Handle) {
        for listener in self.listeners.iter() {
            let listener = Arc::clone(listener);
            let event = self.event.clone();
            let ctx = self.ctx.clone();
            let payload = Arc::clone(&self.payload);
            let semaphore = self.semaphore.clone();

            tracker.spawn_on(
                async move { invoke(&event, &listener, ctx, payload, semaphore.as_ref()).await },
                handle,
            );
        }
    }
}

/// Runs a single listener invocation with panic isolation.
async fn invoke<T>(
    event: &Event,
    listener: &ListenerRef<T>,
    ctx: CancellationToken,
    payload: Arc<T>,
    semaphore: Option<&Arc<Semaphore>>,
) where
    T: Send + Sync + 'static,
{
    // The semaphore is never closed; a failed acquire just runs unbounded.
    let _permit = match semaphore {
        Some(sem) => Arc::clone(sem).acquire_owned().await.ok(),
        None => None,
    };

    // Building the future is guarded too: a hand-written impl may panic before returning it.
    let fut = async { listener.on_event(ctx, payload).await };
    if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
        tracing::error!(
            event = %event,
            listener = listener.name(),
            panic = %panic_message(&*panic_err),
            "listener panicked"
        );
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        let s: Box<dyn Any + Send> = Box::new("static boom");
        assert_eq!(panic_message(&*s), "static boom");

        let s: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(&*s), "owned boom");

        let s: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(&*s), "unknown panic");
    }
}
