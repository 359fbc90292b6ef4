//! Event labels.
//!
//! ## Contents
//! - [`Event`] string label used as the registry key
//!
//! See `core/mod.rs` for how labels map to listeners.

mod event;

pub use event::Event;
