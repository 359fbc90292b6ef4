//! # Listener trait.
//!
//! Provides [`Listen`] the extension point for reacting to emitted events.
//!
//! Each invocation gets:
//! - **The emission context**: the [`CancellationToken`] passed to `emit`, forwarded verbatim
//! - **The shared payload**: one `Arc<T>` per emission, the same allocation for every listener
//! - **Panic isolation**: a panic is caught, logged, and does not reach siblings or the emitter
//!
//! ## Architecture
//! ```text
//! Emitter::emit(ctx, event, payload)
//!     └─► dispatch task ──► listener.on_event(ctx.clone(), Arc::clone(&payload))
//!                       └─► panic caught → tracing::error!
//! ```
//!
//! ## Rules
//! - The emitter never checks the context; observing cancellation is the listener's job.
//! - Listeners cannot report failures to the emitter; use your own side channel.
//! - Listeners run outside every emitter lock and may call back into `on`/`emit`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use emitvisor::Listen;
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Listen<String> for Audit {
//!     async fn on_event(&self, ctx: CancellationToken, payload: Arc<String>) {
//!         if ctx.is_cancelled() {
//!             return;
//!         }
//!         let _ = payload.len();
//!     }
//!
//!     fn name(&self) -> &str { "audit" }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Shared handle to a listener.
pub type ListenerRef<T> = Arc<dyn Listen<T>>;

/// Callback invoked with the emission context and payload.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor for long stretches.
/// - Handle errors internally; the emitter does not observe them.
/// - Payload mutation needs interior mutability and races with sibling listeners
///   in concurrent mode.
#[async_trait]
pub trait Listen<T>: Send + Sync + 'static {
    /// Handles one emission.
    ///
    /// Called from a background task, never in the caller of `emit`.
    async fn on_event(&self, ctx: CancellationToken, payload: Arc<T>);

    /// Returns the listener name used in diagnostics.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose; override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
