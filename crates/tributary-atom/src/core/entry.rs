//! Atom entry element.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use tributary_core::error::CoreError;
use tributary_core::types::EventRecord;

use super::link::Link;
use super::person::Person;
use crate::error::{AtomError, AtomResult};

/// An Atom entry (RFC 4287 §4.1.2) describing one event in a stream.
///
/// Entries serialize their children in a fixed order: title, id, updated,
/// author, summary, links, then content. The optional [`EventRecord`] holds
/// the event descriptor used by JSON projections and HTTP headers; it is
/// not written into the XML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    /// Entry title, conventionally `<event number>@<stream>`.
    pub title: Option<String>,
    /// Entry id, the canonical event URI.
    pub id: Option<String>,
    /// RFC 3339 timestamp of the event.
    pub updated: Option<String>,
    /// Entry author.
    pub author: Option<Person>,
    /// Entry summary, conventionally the event type.
    pub summary: Option<String>,
    /// Entry links in document order.
    pub links: Vec<Link>,
    /// Event descriptor attached by the read side, never serialized here.
    pub event: Option<EventRecord>,
    content: Option<Value>,
}

impl Entry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Sets the id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Sets the updated timestamp, stored as canonical RFC 3339 UTC text.
    pub fn set_updated(&mut self, updated: DateTime<Utc>) {
        self.updated = Some(updated.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    /// Sets the author by name.
    pub fn set_author(&mut self, name: impl Into<String>) {
        self.author = Some(Person::new(name));
    }

    /// Sets the summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    /// Appends a link.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Sets the inline content.
    ///
    /// ## Summary
    /// Content can be set at most once; later document mutations must not
    /// silently replace an embedded payload. `Value::Null` is rejected
    /// because it would consume the one write while embedding nothing.
    ///
    /// ## Errors
    /// Returns [`AtomError::ContentAlreadySet`] if content was already set,
    /// or an invalid-argument error for a `Value::Null` payload.
    pub fn set_content(&mut self, content: Value) -> AtomResult<()> {
        if content.is_null() {
            return Err(CoreError::InvalidArgument("entry content must not be null").into());
        }
        if self.content.is_some() {
            return Err(AtomError::ContentAlreadySet);
        }
        self.content = Some(content);
        Ok(())
    }

    /// Returns the inline content, if set.
    #[must_use]
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }
}
