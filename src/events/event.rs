//! # Event labels.
//!
//! An [`Event`] names a category of occurrence (`"user.created"`, `"order.paid"`, ...).
//! It is an opaque string label: no validation is performed and any value,
//! including the empty string, is a legal event name.
//!
//! Labels are cheap to clone. Static labels borrow their text and can be declared
//! as constants with [`Event::from_static`]; dynamic labels own a `String`.
//!
//! ## Example
//! ```rust
//! use emitvisor::Event;
//!
//! const USER_CREATED: Event = Event::from_static("user.created");
//!
//! let dynamic = Event::from(format!("user.{}", "created"));
//! assert_eq!(USER_CREATED, dynamic);
//! assert_eq!(USER_CREATED.as_str(), "user.created");
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

/// String label identifying a category of occurrence.
///
/// Equality, ordering and hashing follow the underlying text, so a borrowed
/// and an owned label with the same text are the same event.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Event(Cow<'static, str>);

impl Event {
    /// Creates a label from a static string; usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a label from anything string-like.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Event {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Event {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Event {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl From<&Event> for Event {
    fn from(ev: &Event) -> Self {
        ev.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_borrowed_and_owned_labels_are_equal() {
        let a = Event::from_static("user.created");
        let b = Event::from(String::from("user.created"));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "user.created");
    }

    #[test]
    fn test_empty_label_is_legal() {
        let ev = Event::from("");
        assert_eq!(ev.as_str(), "");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Event::from("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }
}
