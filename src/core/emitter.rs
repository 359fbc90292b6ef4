//! # Emitter: listener registration and fire-and-forget dispatch.
//!
//! The [`Emitter`] owns the event → listeners registry, the configuration fixed at
//! construction, and a [`TaskTracker`] over every background task it spawns.
//!
//! ## High-level architecture
//! ```text
//! on(event, listener) ──► Registry (append, copy-on-write)
//!
//! emit(ctx, event, payload)
//!   ├─ snapshot = Registry.snapshot(event)      (none → trace, return)
//!   ├─ handle   = cfg.runtime or current         (none → warn, return)
//!   └─ tracker.spawn_on(dispatch task)           (returns immediately)
//!            │
//!            ├─ sync = true  ─► Dispatch::run_sequential()
//!            └─ sync = false ─► Dispatch::fan_out()  ──► one task per listener
//!
//! drain(grace)
//!   └─ tracker.close() → timeout(grace, tracker.wait()) → tracker.reopen()
//! ```
//!
//! ## Rules
//! - `on` and `emit` never fail and never wait on listeners.
//! - Listeners registered after the snapshot do not see that emission.
//! - Separate emissions are unordered relative to each other in both modes.
//! - Clones share registrations, configuration and in-flight tracking.
//! - Resource ceiling: one task per listener per emission, unbounded unless
//!   `max_concurrent` is set.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use emitvisor::{Emitter, Event};
//!
//! const USER_CREATED: Event = Event::from_static("user.created");
//!
//! #[derive(Debug)]
//! struct UserEvent {
//!     id: String,
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = Emitter::<UserEvent>::builder().sync(true).build();
//!
//!     emitter
//!         .on_fn(USER_CREATED, |_ctx: CancellationToken, ev: Arc<UserEvent>| async move {
//!             println!("user created: {}", ev.id);
//!         })
//!         .on_fn("user.deleted", |_ctx: CancellationToken, ev: Arc<UserEvent>| async move {
//!             println!("user deleted: {}", ev.id);
//!         });
//!
//!     emitter.emit(CancellationToken::new(), USER_CREATED, UserEvent { id: "1".into() });
//!     emitter.drain(Duration::from_secs(1)).await?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Semaphore};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::core::builder::EmitterBuilder;
use crate::core::config::Config;
use crate::core::dispatch::Dispatch;
use crate::core::registry::Registry;
use crate::error::EmitterError;
use crate::events::Event;
use crate::listeners::{ListenerFn, ListenerRef};

struct Inner<T> {
    cfg: Config,
    registry: Registry<T>,
    tracker: TaskTracker,
    semaphore: Option<Arc<Semaphore>>,
    /// Serializes `drain` calls; a drain reopens the tracker another drain may be waiting on.
    draining: Mutex<()>,
}

/// Reopens a closed tracker when dropped.
struct ReopenOnDrop<'a>(&'a TaskTracker);

impl Drop for ReopenOnDrop<'_> {
    fn drop(&mut self) {
        self.0.reopen();
    }
}

/// Typed in-process event emitter.
///
/// Generic over one payload type `T`, shared by every listener of the instance.
/// Cheap to clone (`Arc`-backed).
pub struct Emitter<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Emitter<T>
where
    T: Send + Sync + 'static,
{
    /// Creates an emitter with an empty registry.
    pub fn new(cfg: Config) -> Self {
        let semaphore = cfg.concurrency_limit().map(Semaphore::new).map(Arc::new);
        Self {
            inner: Arc::new(Inner {
                cfg,
                registry: Registry::new(),
                tracker: TaskTracker::new(),
                semaphore,
                draining: Mutex::new(()),
            }),
        }
    }

    /// Returns a builder with the default configuration.
    pub fn builder() -> EmitterBuilder<T> {
        EmitterBuilder::new(Config::default())
    }

    /// Registers `listener` for `event`, after any listeners already registered.
    ///
    /// Returns `&self` to allow chaining.
    pub fn on(&self, event: impl Into<Event>, listener: ListenerRef<T>) -> &Self {
        self.on_many(event, [listener])
    }

    /// Registers several listeners for `event`, in iteration order.
    pub fn on_many<I>(&self, event: impl Into<Event>, listeners: I) -> &Self
    where
        I: IntoIterator<Item = ListenerRef<T>>,
    {
        let event = event.into();
        let label = event.clone();
        let total = self.inner.registry.append(event, listeners);
        tracing::trace!(event = %label, total, "listeners registered");
        self
    }

    /// Registers an async closure for `event`; the listener is named after the event.
    pub fn on_fn<F, Fut>(&self, event: impl Into<Event>, f: F) -> &Self
    where
        F: Fn(CancellationToken, Arc<T>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let event = event.into();
        let listener: ListenerRef<T> = ListenerFn::arc(event.to_string(), f);
        self.on(event, listener)
    }

    /// Emits `event` with `payload` to every listener registered right now.
    ///
    /// Returns immediately; listeners run on background tasks. Each receives a clone
    /// of `ctx` and the same shared payload. Emitting an event without listeners is
    /// a no-op, as is emitting with no runtime available.
    pub fn emit(&self, ctx: CancellationToken, event: impl Into<Event>, payload: T) {
        let event = event.into();
        let Some(listeners) = self.inner.registry.snapshot(event.as_str()) else {
            tracing::trace!(event = %event, "no listeners");
            return;
        };
        let Some(handle) = self.inner.cfg.runtime_handle() else {
            tracing::warn!(
                event = %event,
                listeners = listeners.len(),
                "no tokio runtime available; emission dropped"
            );
            return;
        };
        tracing::debug!(
            event = %event,
            listeners = listeners.len(),
            sync = self.inner.cfg.sync,
            "dispatching"
        );

        let dispatch = Dispatch {
            event,
            listeners,
            ctx,
            payload: Arc::new(payload),
            semaphore: self.inner.semaphore.clone(),
        };

        if self.inner.cfg.sync {
            self.inner
                .tracker
                .spawn_on(dispatch.run_sequential(), &handle);
        } else {
            let tracker = self.inner.tracker.clone();
            let spawn_handle = handle.clone();
            self.inner.tracker.spawn_on(
                async move { dispatch.fan_out(&tracker, &spawn_handle) },
                &handle,
            );
        }
    }

    /// Waits until all background work spawned so far has finished.
    ///
    /// Work spawned by that work (listeners emitting again) is waited for as well.
    /// Emission keeps working during and after a drain.
    ///
    /// ### Errors
    /// [`EmitterError::GraceExceeded`] if tasks are still running after `grace`.
    pub async fn drain(&self, grace: Duration) -> Result<(), EmitterError> {
        let tracker = &self.inner.tracker;
        let waited = tokio::time::timeout(grace, async {
            let _guard = self.inner.draining.lock().await;
            tracker.close();
            // Declared after `_guard`, so the tracker reopens before the lock is released,
            // on completion and on timeout alike.
            let _reopen = ReopenOnDrop(tracker);
            tracker.wait().await;
        })
        .await;

        match waited {
            Ok(()) => Ok(()),
            Err(_elapsed) => {
                let in_flight = tracker.len();
                tracing::warn!(?grace, in_flight, "drain grace exceeded");
                Err(EmitterError::GraceExceeded { grace, in_flight })
            }
        }
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.inner.registry.count(event)
    }

    /// Events with at least one listener, sorted by label.
    pub fn events(&self) -> Vec<Event> {
        self.inner.registry.events()
    }

    /// Returns `true` if listeners of one emission run sequentially.
    pub fn is_sync(&self) -> bool {
        self.inner.cfg.sync
    }

    /// Number of background tasks (dispatch and listener) currently alive.
    pub fn in_flight(&self) -> usize {
        self.inner.tracker.len()
    }

    /// Configuration this emitter was built with.
    pub fn config(&self) -> &Config {
        &self.inner.cfg
    }
}

impl<T> Default for Emitter<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<T> fmt::Debug for Emitter<T>
where
    T: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("sync", &self.inner.cfg.sync)
            .field("max_concurrent", &self.inner.cfg.max_concurrent)
            .field("events", &self.events())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}
