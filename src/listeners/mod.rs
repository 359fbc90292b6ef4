//! # Listeners invoked by the emitter.
//!
//! This module provides the [`Listen`] trait and the function-backed [`ListenerFn`].
//! The common handle type is [`ListenerRef`], an `Arc<dyn Listen<T>>` that the
//! emitter keeps alive for as long as the emitter itself lives.
//!
//! ## Listener kinds
//! - **Closures**: [`ListenerFn`] wraps `Fn(CancellationToken, Arc<T>) -> impl Future`
//! - **Types**: implement [`Listen`] directly when the listener carries state
//! - **Built-in**: `LogListener` (feature `logging`) logs payloads via `tracing`

mod listener;
mod listener_fn;
#[cfg(feature = "logging")]
mod log;

pub use listener::{Listen, ListenerRef};
pub use listener_fn::ListenerFn;
#[cfg(feature = "logging")]
pub use log::LogListener;
