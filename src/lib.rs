//! # emitvisor
//!
//! **Emitvisor** is a small typed in-process event emitter for tokio applications.
//!
//! Callers register listeners against string-named events, then emit an event with a
//! payload; every listener registered for that event is invoked on a background task.
//! `emit` is fire-and-forget: it never waits for listeners to start or finish.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     on("user.created", l1)   on("user.created", l2)   on("user.deleted", l3)
//!              │                        │                        │
//!              ▼                        ▼                        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Emitter<T>                                                       │
//! │  - Registry  (Event → [listeners], registration order)            │
//! │  - Config    (sync / max_concurrent / runtime)                    │
//! │  - TaskTracker (every dispatch and listener task)                 │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        │ emit(ctx, "user.created", payload)
//!        ▼
//!   snapshot [l1, l2] ──► spawn dispatch task ──► return to caller
//!                                │
//!             sync = true        │        sync = false (default)
//!        ┌───────────────────────┴──────────────────────┐
//!        ▼                                              ▼
//!   l1(ctx, payload).await                   spawn l1(ctx, payload)
//!   l2(ctx, payload).await                   spawn l2(ctx, payload)
//!   (strict registration order)              (no mutual ordering)
//! ```
//!
//! ### Guarantees
//! - Listener order within one event is registration order; `on` appends.
//! - In sync mode, each listener of an emission completes before the next starts.
//! - In the default mode, listeners of an emission run concurrently.
//! - Separate emissions are never ordered relative to each other.
//! - The context ([`CancellationToken`](tokio_util::sync::CancellationToken)) is forwarded
//!   verbatim; observing cancellation is the listener's job.
//! - A panicking listener is caught and logged; siblings and the caller are unaffected.
//! - Emitting an event nobody listens to is a silent no-op.
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                      |
//! |-------------------|--------------------------------------------------------------|-----------------------------------------|
//! | **Emitter**       | Register listeners, emit typed payloads, drain in-flight work.| [`Emitter`], [`Event`]                 |
//! | **Listeners**     | Async callbacks as closures or trait impls.                  | [`Listen`], [`ListenerFn`], [`ListenerRef`] |
//! | **Configuration** | Dispatch mode, concurrency cap, runtime handle.              | [`EmitterConfig`], [`EmitterBuilder`]   |
//! | **Errors**        | Typed error for bounded waits.                               | [`EmitterError`]                        |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogListener` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use emitvisor::{Emitter, ListenerFn, ListenerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = Emitter::<String>::builder().sync(true).build();
//!
//!     let greet: ListenerRef<String> = ListenerFn::arc("greet", |ctx: CancellationToken, name: Arc<String>| async move {
//!         if ctx.is_cancelled() { return; }
//!         println!("Hello, {name}!");
//!     });
//!
//!     emitter.on("greet", greet);
//!     emitter.emit(CancellationToken::new(), "greet", "world".to_string());
//!
//!     // Wait for background listeners before exiting.
//!     emitter.drain(Duration::from_secs(1)).await?;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod listeners;

// ---- Public re-exports ----

pub use self::core::{Config as EmitterConfig, Emitter, EmitterBuilder};
pub use error::EmitterError;
pub use events::Event;
pub use listeners::{Listen, ListenerFn, ListenerRef};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
