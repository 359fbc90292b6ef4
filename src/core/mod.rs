//! Emitter core: registration, configuration and dispatch.
//!
//! The public API from this module is [`Emitter`], [`EmitterBuilder`] and [`Config`].
//!
//! Internal modules:
//! - [`registry`]: event → listeners map with copy-on-write snapshots;
//! - [`dispatch`]: runs one emission sequentially or fans it out, with panic isolation;
//! - [`emitter`]: public handle tying registry, config and task tracking together.

mod builder;
mod config;
mod dispatch;
mod emitter;
mod registry;

pub use builder::EmitterBuilder;
pub use config::Config;
pub use emitter::Emitter;
