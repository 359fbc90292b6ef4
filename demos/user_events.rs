//! # User Events Example
//!
//! Registers listeners for user lifecycle events and emits one of each.
//!
//! Shows:
//! - Event constants declared with `Event::from_static`
//! - Chained registration, including two listeners for one event
//! - A custom `Listen` impl next to closures and the built-in `LogListener`
//! - Draining background work before exit
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example user_events --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use emitvisor::{Emitter, Event, Listen, ListenerFn, ListenerRef, LogListener};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

const USER_CREATED: Event = Event::from_static("user.created");
const USER_DELETED: Event = Event::from_static("user.deleted");
const USER_UPDATED: Event = Event::from_static("user.updated");

#[derive(Debug)]
struct UserEvent {
    id: String,
}

struct UpdateCounter {
    updates: AtomicU64,
}

#[async_trait]
impl Listen<UserEvent> for UpdateCounter {
    async fn on_event(&self, _ctx: CancellationToken, ev: Arc<UserEvent>) {
        let n = self.updates.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(user = %ev.id, n, "making some actions with user");
    }

    fn name(&self) -> &str {
        "update-counter"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ctx = CancellationToken::new();
    let emitter = Emitter::<UserEvent>::default();

    let counter = Arc::new(UpdateCounter {
        updates: AtomicU64::new(0),
    });
    let on_updated: ListenerRef<UserEvent> =
        ListenerFn::arc("updated", |_ctx: CancellationToken, ev: Arc<UserEvent>| async move {
            tracing::info!(user = %ev.id, "user updated");
        });

    emitter
        .on_fn(USER_CREATED, |_ctx: CancellationToken, ev: Arc<UserEvent>| async move {
            tracing::info!(user = %ev.id, "user created");
        })
        .on_fn(USER_DELETED, |_ctx: CancellationToken, ev: Arc<UserEvent>| async move {
            tracing::info!(user = %ev.id, "user deleted");
        })
        .on_many(USER_UPDATED, [on_updated, counter.clone() as ListenerRef<UserEvent>])
        .on(USER_UPDATED, Arc::new(LogListener::<UserEvent>::new(USER_UPDATED)));

    emitter.emit(ctx.clone(), USER_CREATED, UserEvent { id: "1".into() });
    emitter.emit(ctx.clone(), USER_DELETED, UserEvent { id: "2".into() });
    emitter.emit(ctx.clone(), USER_UPDATED, UserEvent { id: "3".into() });
    emitter.emit(ctx, "user.archived", UserEvent { id: "4".into() });

    emitter.drain(Duration::from_secs(1)).await?;
    println!("updates seen: {}", counter.updates.load(Ordering::Relaxed));
    Ok(())
}
