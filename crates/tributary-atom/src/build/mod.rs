//! Atom document XML serialization.
//!
//! Documents are written through quick-xml's event writer in the fixed
//! element order the feed pages use. Conformance checks run before the
//! first writer event, so a violation never produces partial output.

mod content;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::{
    APPLICATION_XML, ATOM_NS, ATOM_PREFIX, Entry, Feed, Link, Person, check_entry, check_feed,
    content_nodes,
};
use crate::error::{AtomError, AtomResult};

/// Serializes a feed document.
///
/// ## Summary
/// Writes `feed[title, id, updated, author, link*, entry*]` with the Atom
/// namespace declared as the default namespace on the root. Nested entries
/// are unprefixed and declare nothing; they inherit the root namespace.
///
/// ## Errors
/// Returns the first [`crate::core::ConformanceViolation`] if a mandatory
/// field is missing, or an error if XML writing fails.
pub fn serialize_feed(feed: &Feed) -> AtomResult<String> {
    check_feed(feed)?;

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("feed");
    root.push_attribute(("xmlns", ATOM_NS));
    writer.write_event(Event::Start(root))?;

    write_text_element(&mut writer, "title", feed.title.as_deref().unwrap_or_default())?;
    write_text_element(&mut writer, "id", feed.id.as_deref().unwrap_or_default())?;
    write_text_element(&mut writer, "updated", feed.updated.as_deref().unwrap_or_default())?;
    if let Some(author) = &feed.author {
        write_author(&mut writer, author, false)?;
    }
    for link in &feed.links {
        write_link(&mut writer, link, false)?;
    }
    for entry in &feed.entries {
        writer.write_event(Event::Start(BytesStart::new("entry")))?;
        write_entry_children(&mut writer, entry, false)?;
        writer.write_event(Event::End(BytesEnd::new("entry")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("feed")))?;

    finish(writer)
}

/// Serializes a standalone entry document.
///
/// ## Summary
/// Writes `entry[title, id, updated, author, summary, link*, content?]`.
/// With `use_prefix` the root is `atom:entry` with an `xmlns:atom`
/// declaration and every Atom element carries the prefix; without it the
/// root is `entry` with the Atom namespace as the default namespace.
///
/// ## Errors
/// Returns the first [`crate::core::ConformanceViolation`] if a mandatory
/// field is missing, or an error if XML writing fails.
pub fn serialize_entry(entry: &Entry, use_prefix: bool) -> AtomResult<String> {
    check_entry(entry)?;

    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new(qualified(use_prefix, "entry"));
    if use_prefix {
        root.push_attribute(("xmlns:atom", ATOM_NS));
    } else {
        root.push_attribute(("xmlns", ATOM_NS));
    }
    writer.write_event(Event::Start(root))?;

    write_entry_children(&mut writer, entry, use_prefix)?;

    writer.write_event(Event::End(BytesEnd::new(qualified(use_prefix, "entry"))))?;

    finish(writer)
}

/// Writes the children of an entry element in document order.
fn write_entry_children<W: std::io::Write>(
    writer: &mut Writer<W>,
    entry: &Entry,
    use_prefix: bool,
) -> AtomResult<()> {
    write_text_element(
        writer,
        &qualified(use_prefix, "title"),
        entry.title.as_deref().unwrap_or_default(),
    )?;
    write_text_element(
        writer,
        &qualified(use_prefix, "id"),
        entry.id.as_deref().unwrap_or_default(),
    )?;
    write_text_element(
        writer,
        &qualified(use_prefix, "updated"),
        entry.updated.as_deref().unwrap_or_default(),
    )?;
    if let Some(author) = &entry.author {
        write_author(writer, author, use_prefix)?;
    }
    write_text_element(
        writer,
        &qualified(use_prefix, "summary"),
        entry.summary.as_deref().unwrap_or_default(),
    )?;
    for link in &entry.links {
        write_link(writer, link, use_prefix)?;
    }
    if let Some(value) = entry.content() {
        let name = qualified(use_prefix, "content");
        let mut elem = BytesStart::new(name.as_str());
        elem.push_attribute(("type", APPLICATION_XML));
        writer.write_event(Event::Start(elem))?;
        // Embedded nodes are namespace-less; in default-namespace documents
        // the top-level embedded elements must opt out with xmlns="".
        content::write_nodes(writer, &content_nodes(value), !use_prefix)?;
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    }
    Ok(())
}

/// Writes an author element wrapping a single name child.
fn write_author<W: std::io::Write>(
    writer: &mut Writer<W>,
    author: &Person,
    use_prefix: bool,
) -> AtomResult<()> {
    let name = qualified(use_prefix, "author");
    writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
    write_text_element(writer, &qualified(use_prefix, "name"), &author.name)?;
    writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    Ok(())
}

/// Writes a link element; absent optional attributes are omitted.
fn write_link<W: std::io::Write>(
    writer: &mut Writer<W>,
    link: &Link,
    use_prefix: bool,
) -> AtomResult<()> {
    let mut elem = BytesStart::new(qualified(use_prefix, "link"));
    elem.push_attribute(("href", link.href.as_str()));
    if let Some(rel) = &link.rel {
        elem.push_attribute(("rel", rel.as_str()));
    }
    if let Some(media_type) = &link.media_type {
        elem.push_attribute(("type", media_type.as_str()));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Writes a simple text element.
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> AtomResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Qualifies an Atom element name for the document's prefix mode.
fn qualified(use_prefix: bool, local: &str) -> String {
    if use_prefix {
        format!("{ATOM_PREFIX}:{local}")
    } else {
        local.to_owned()
    }
}

/// Converts the writer's buffer into the finished document string.
fn finish(writer: Writer<Vec<u8>>) -> AtomResult<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in Atom XML: {}", e);
        AtomError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Invalid UTF-8 in XML output",
        ))
    })
}
