//! # Listener registry.
//!
//! Maps each [`Event`] to the ordered sequence of listeners registered for it.
//!
//! ## Rules
//! - Registration appends; order within one event is registration order
//! - Nothing is ever removed
//! - Unknown events resolve to an empty sequence
//! - Sequences are copy-on-write: a snapshot taken by `emit` is an `Arc` clone and
//!   is never affected by later registrations
//! - The price is paid on `append`: it copies the event's whole slice, so registering
//!   `n` listeners one call at a time is O(n²); `on_many` batches into a single copy
//! - The lock is held only for map access, never across `.await` or listener calls

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::events::Event;
use crate::listeners::ListenerRef;

/// Immutable view of one event's listeners at a point in time.
pub(crate) type Snapshot<T> = Arc<[ListenerRef<T>]>;

/// Event → listeners mapping shared by all clones of an emitter.
pub(crate) struct Registry<T> {
    listeners: RwLock<HashMap<Event, Snapshot<T>>>,
}

impl<T> Registry<T>
where
    T: Send + Sync + 'static,
{
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
        }
    }

    /// Appends `added` to the sequence for `event`, creating it if absent.
    ///
    /// Returns the sequence length after the append.
    pub(crate) fn append<I>(&self, event: Event, added: I) -> usize
    where
        I: IntoIterator<Item = ListenerRef<T>>,
    {
        let added: Vec<ListenerRef<T>> = added.into_iter().collect();
        // A panic cannot leave the map half-updated, so a poisoned lock is still usable.
        let mut map = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let slot = map.entry(event).or_insert_with(|| Arc::from(Vec::new()));
        if added.is_empty() {
            return slot.len();
        }
        let mut next = Vec::with_capacity(slot.len() + added.len());
        next.extend(slot.iter().cloned());
        next.extend(added);
        *slot = Arc::from(next);
        slot.len()
    }

    /// Returns the listeners registered for `event` right now.
    pub(crate) fn snapshot(&self, event: &str) -> Option<Snapshot<T>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event)
            .filter(|s| !s.is_empty())
            .cloned()
    }

    /// Number of listeners registered for `event`.
    pub(crate) fn count(&self, event: &str) -> usize {
        self.snapshot(event).map_or(0, |s| s.len())
    }

    /// Events with at least one listener, sorted by label.
    pub(crate) fn events(&self) -> Vec<Event> {
        let mut out: Vec<Event> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, s)| !s.is_empty())
            .map(|(ev, _)| ev.clone())
            .collect();
        out.sort();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::ListenerFn;
    use tokio_util::sync::CancellationToken;

    fn named(name: &'static str) -> ListenerRef<u32> {
        ListenerFn::arc(name, |_ctx: CancellationToken, _n: Arc<u32>| async {})
    }

    fn names(s: &Snapshot<u32>) -> Vec<String> {
        s.iter().map(|l| l.name().to_string()).collect()
    }

    #[test]
    fn test_append_preserves_order_across_calls() {
        let reg = Registry::new();
        reg.append(Event::from("e"), [named("l1")]);
        reg.append(Event::from("e"), [named("l2"), named("l3")]);

        let snap = reg.snapshot("e").expect("listeners registered");
        assert_eq!(names(&snap), ["l1", "l2", "l3"]);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_append() {
        let reg = Registry::new();
        reg.append(Event::from("e"), [named("l1")]);
        let before = reg.snapshot("e").expect("listeners registered");

        reg.append(Event::from("e"), [named("l2")]);

        assert_eq!(before.len(), 1);
        assert_eq!(reg.count("e"), 2);
    }

    #[test]
    fn test_unknown_and_empty_events() {
        let reg = Registry::<u32>::new();
        assert!(reg.snapshot("missing").is_none());

        reg.append(Event::from("empty"), Vec::new());
        assert!(reg.snapshot("empty").is_none());
        assert_eq!(reg.count("empty"), 0);
        assert!(reg.events().is_empty());
    }

    #[test]
    fn test_events_sorted() {
        let reg = Registry::new();
        reg.append(Event::from("b"), [named("x")]);
        reg.append(Event::from("a"), [named("y")]);
        assert_eq!(reg.events(), [Event::from("a"), Event::from("b")]);
    }
}
