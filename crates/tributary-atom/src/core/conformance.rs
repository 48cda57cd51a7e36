//! RFC 4287 conformance checks run before serialization.
//!
//! Serializers call these before writing the first event, so a failed check
//! never leaves partial output behind.

use std::fmt;

use super::entry::Entry;
use super::feed::Feed;
use super::link::Link;
use super::person::Person;

/// A violation of an RFC 4287 document rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConformanceViolation {
    /// Construct the rule applies to (`feed`, `entry`, `link`, or `author`).
    pub construct: &'static str,
    /// The violated rule, in the RFC's wording.
    pub rule: &'static str,
}

impl ConformanceViolation {
    /// Creates a violation for a construct and rule.
    #[must_use]
    pub const fn new(construct: &'static str, rule: &'static str) -> Self {
        Self { construct, rule }
    }

    /// Feed without a title.
    #[must_use]
    pub const fn feed_title() -> Self {
        Self::new(
            "feed",
            "atom:feed elements MUST contain exactly one atom:title element.",
        )
    }

    /// Feed without an id.
    #[must_use]
    pub const fn feed_id() -> Self {
        Self::new(
            "feed",
            "atom:feed elements MUST contain exactly one atom:id element.",
        )
    }

    /// Feed without an updated timestamp.
    #[must_use]
    pub const fn feed_updated() -> Self {
        Self::new(
            "feed",
            "atom:feed elements MUST contain exactly one atom:updated element.",
        )
    }

    /// Feed without an author.
    #[must_use]
    pub const fn feed_author() -> Self {
        Self::new(
            "feed",
            "atom:feed elements MUST contain one or more atom:author elements.",
        )
    }

    /// Feed without any links.
    #[must_use]
    pub const fn feed_self_link() -> Self {
        Self::new(
            "feed",
            "atom:feed elements SHOULD contain one atom:link element with a rel attribute value of \"self\".",
        )
    }

    /// Entry without a title.
    #[must_use]
    pub const fn entry_title() -> Self {
        Self::new(
            "entry",
            "atom:entry elements MUST contain exactly one atom:title element.",
        )
    }

    /// Entry without an id.
    #[must_use]
    pub const fn entry_id() -> Self {
        Self::new(
            "entry",
            "atom:entry elements MUST contain exactly one atom:id element.",
        )
    }

    /// Entry without an updated timestamp.
    #[must_use]
    pub const fn entry_updated() -> Self {
        Self::new(
            "entry",
            "atom:entry elements MUST contain exactly one atom:updated element.",
        )
    }

    /// Entry without an author.
    #[must_use]
    pub const fn entry_author() -> Self {
        Self::new(
            "entry",
            "atom:entry elements MUST contain one or more atom:author elements.",
        )
    }

    /// Entry without a summary.
    #[must_use]
    pub const fn entry_summary() -> Self {
        Self::new(
            "entry",
            "atom:entry elements MUST contain exactly one atom:summary element.",
        )
    }

    /// Link without an href.
    #[must_use]
    pub const fn link_href() -> Self {
        Self::new(
            "link",
            "atom:link elements MUST have an href attribute, whose value MUST be an IRI reference.",
        )
    }

    /// Person construct without a name.
    #[must_use]
    pub const fn person_name() -> Self {
        Self::new(
            "author",
            "Person constructs MUST contain exactly one atom:name element.",
        )
    }
}

impl fmt::Display for ConformanceViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule)
    }
}

impl std::error::Error for ConformanceViolation {}

/// Checks a feed document, including its nested entries.
///
/// ## Summary
/// Runs the mandatory-field checks in a fixed order: the feed's own title,
/// id, updated, author, and link presence, then the author name, each
/// link's href, and finally each nested entry. The first failed check wins.
///
/// ## Errors
/// Returns the first [`ConformanceViolation`] found.
pub fn check_feed(feed: &Feed) -> Result<(), ConformanceViolation> {
    if is_blank(feed.title.as_deref()) {
        return Err(ConformanceViolation::feed_title());
    }
    if is_blank(feed.id.as_deref()) {
        return Err(ConformanceViolation::feed_id());
    }
    if is_blank(feed.updated.as_deref()) {
        return Err(ConformanceViolation::feed_updated());
    }
    let Some(author) = &feed.author else {
        return Err(ConformanceViolation::feed_author());
    };
    if feed.links.is_empty() {
        return Err(ConformanceViolation::feed_self_link());
    }
    check_person(author)?;
    for link in &feed.links {
        check_link(link)?;
    }
    for entry in &feed.entries {
        check_entry(entry)?;
    }
    Ok(())
}

/// Checks a single entry.
///
/// ## Summary
/// Runs the mandatory-field checks in a fixed order: title, id, updated,
/// author, summary, then the author name and each link's href. The first
/// failed check wins.
///
/// ## Errors
/// Returns the first [`ConformanceViolation`] found.
pub fn check_entry(entry: &Entry) -> Result<(), ConformanceViolation> {
    if is_blank(entry.title.as_deref()) {
        return Err(ConformanceViolation::entry_title());
    }
    if is_blank(entry.id.as_deref()) {
        return Err(ConformanceViolation::entry_id());
    }
    if is_blank(entry.updated.as_deref()) {
        return Err(ConformanceViolation::entry_updated());
    }
    let Some(author) = &entry.author else {
        return Err(ConformanceViolation::entry_author());
    };
    if is_blank(entry.summary.as_deref()) {
        return Err(ConformanceViolation::entry_summary());
    }
    check_person(author)?;
    for link in &entry.links {
        check_link(link)?;
    }
    Ok(())
}

/// Checks a link element.
///
/// ## Errors
/// Returns a [`ConformanceViolation`] if the href is empty.
pub fn check_link(link: &Link) -> Result<(), ConformanceViolation> {
    if link.href.is_empty() {
        return Err(ConformanceViolation::link_href());
    }
    Ok(())
}

/// Checks a person construct.
///
/// ## Errors
/// Returns a [`ConformanceViolation`] if the name is empty.
pub fn check_person(person: &Person) -> Result<(), ConformanceViolation> {
    if person.name.is_empty() {
        return Err(ConformanceViolation::person_name());
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
