//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(CancellationToken, Arc<T>) -> Fut`, producing a fresh
//! future per invocation. Shared state goes behind an explicit `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use emitvisor::{ListenerFn, ListenerRef};
//!
//! let l: ListenerRef<u64> = ListenerFn::arc("printer", |_ctx: CancellationToken, n: Arc<u64>| async move {
//!     println!("got {n}");
//! });
//!
//! assert_eq!(l.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::listeners::listener::Listen;

/// Function-backed listener implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<T, F, Fut> Listen<T> for ListenerFn<F>
where
    T: Send + Sync + 'static,
    F: Fn(CancellationToken, Arc<T>) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_event(&self, ctx: CancellationToken, payload: Arc<T>) {
        (self.f)(ctx, payload).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[tokio::test]
    async fn test_closure_receives_payload_and_context() {
        let seen = Arc::new(AtomicU64::new(0));
        let seen_in = Arc::clone(&seen);

        let l = ListenerFn::new("adder", move |ctx: CancellationToken, n: Arc<u64>| {
            let seen = Arc::clone(&seen_in);
            async move {
                if ctx.is_cancelled() {
                    seen.fetch_add(100, Ordering::SeqCst);
                }
                seen.fetch_add(*n, Ordering::SeqCst);
            }
        });

        let ctx = CancellationToken::new();
        Listen::<u64>::on_event(&l, ctx.clone(), Arc::new(2)).await;
        ctx.cancel();
        Listen::<u64>::on_event(&l, ctx, Arc::new(3)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 105);
        assert_eq!(Listen::<u64>::name(&l), "adder");
    }
}
