//! Atom document types.
//!
//! This module defines the feed and entry model for subscription stream
//! pages, the content value projection, and the conformance checks the
//! serializers run before writing.

mod conformance;
mod content;
mod entry;
mod feed;
mod link;
mod namespace;
mod person;

pub use conformance::{
    ConformanceViolation, check_entry, check_feed, check_link, check_person,
};
pub use content::{XmlNode, content_nodes};
pub use entry::Entry;
pub use feed::Feed;
pub use link::Link;
pub use namespace::{APPLICATION_XML, ATOM_NS, ATOM_PREFIX, ATOM_PUB_NS};
pub use person::Person;
