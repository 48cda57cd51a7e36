//! Atom person construct.

use std::fmt;

/// An Atom person construct (RFC 4287 §3.2), used for `atom:author`.
///
/// Only the `atom:name` child is carried; the optional `atom:uri` and
/// `atom:email` children are never emitted by the feed pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    /// Human-readable name of the person.
    pub name: String,
}

impl Person {
    /// Creates a person with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
