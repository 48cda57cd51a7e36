//! Atom feed element.

use chrono::{DateTime, SecondsFormat, Utc};

use super::entry::Entry;
use super::link::Link;
use super::person::Person;

/// An Atom feed (RFC 4287 §4.1.1) holding one page of a subscription stream.
///
/// Children serialize in a fixed order: title, id, updated, author, links,
/// then entries. The stream id, self URL, head-of-stream flag, and entity
/// tag feed the HTTP layer (headers and paging) and are never written into
/// the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    /// Feed title.
    pub title: Option<String>,
    /// Feed id, the canonical page URI.
    pub id: Option<String>,
    /// RFC 3339 timestamp of the most recent event on the page.
    pub updated: Option<String>,
    /// Feed author.
    pub author: Option<Person>,
    /// Feed links in document order.
    pub links: Vec<Link>,
    /// Entries in document order.
    pub entries: Vec<Entry>,
    /// Stream the page was read from.
    pub stream_id: Option<String>,
    /// Canonical URL of this page.
    pub self_url: Option<String>,
    /// Whether the page contains the head of the stream.
    pub head_of_stream: bool,
    /// Entity tag for conditional requests.
    pub etag: Option<String>,
}

impl Feed {
    /// Creates an empty feed.
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

    /// Appends a link.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Sets the source stream id.
    pub fn set_stream_id(&mut self, stream_id: impl Into<String>) {
        self.stream_id = Some(stream_id.into());
    }

    /// Sets the canonical page URL.
    pub fn set_self_url(&mut self, self_url: impl Into<String>) {
        self.self_url = Some(self_url.into());
    }

    /// Marks whether this page contains the stream head.
    pub fn set_head_of_stream(&mut self, head_of_stream: bool) {
        self.head_of_stream = head_of_stream;
    }

    /// Sets the entity tag.
    pub fn set_etag(&mut self, etag: impl Into<String>) {
        self.etag = Some(etag.into());
    }

    /// Returns the self link, if one was added.
    #[must_use]
    pub fn self_link(&self) -> Option<&Link> {
        self.links.iter().find(|link| link.has_rel("self"))
    }
}
