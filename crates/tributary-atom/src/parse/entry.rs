//! Atom entry document parsing.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::{ParseError, ParseResult};
use crate::core::{Entry, Link, Person};

/// The entry child expected next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Title,
    Id,
    Updated,
    Author,
    Summary,
    Links,
}

impl Slot {
    const fn element(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Id => "id",
            Self::Updated => "updated",
            Self::Author => "author",
            Self::Summary => "summary",
            Self::Links => "link",
        }
    }
}

/// The leaf element currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    Title,
    Id,
    Updated,
    Name,
    Summary,
    Link,
}

impl Open {
    const fn element(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Id => "id",
            Self::Updated => "updated",
            Self::Name => "name",
            Self::Summary => "summary",
            Self::Link => "link",
        }
    }

    const fn is_text(self) -> bool {
        !matches!(self, Self::Link)
    }
}

/// Parses a standalone Atom entry document.
///
/// ## Summary
/// Accepts entry documents in prefixed (`atom:entry`) or unprefixed form;
/// elements are matched by local name. The children must appear in the
/// fixed order title, id, updated, author, summary, then any number of
/// links. Links are collected as they appear. Values are not checked for
/// conformance; an empty title parses and fails only on re-serialization.
///
/// ## Errors
/// Returns an error if the XML is malformed, an element is out of order or
/// unknown, a required element is missing, or the entry carries an
/// `atom:content` element, which the reader does not support.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
#[expect(clippy::too_many_lines)]
pub fn parse_entry(xml: &[u8]) -> ParseResult<Entry> {
    tracing::debug!("Parsing Atom entry document");

    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entry = Entry::new();
    let mut root_open = false;
    let mut slot = Slot::Title;
    let mut open: Option<Open> = None;
    let mut in_author = false;
    let mut author_name: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();

                if !root_open {
                    if local_name != "entry" {
                        return Err(ParseError::unexpected_element(&local_name));
                    }
                    root_open = true;
                } else if open.is_some() {
                    return Err(ParseError::unexpected_element(&local_name));
                } else if in_author {
                    if local_name != "name" || author_name.is_some() {
                        return Err(ParseError::unexpected_element(&local_name));
                    }
                    open = Some(Open::Name);
                } else if slot == Slot::Author && local_name == "author" {
                    in_author = true;
                } else if slot == Slot::Links && local_name == "link" {
                    entry.links.push(link_from_attributes(&reader, e)?);
                    open = Some(Open::Link);
                } else {
                    open = Some(match (slot, local_name.as_str()) {
                        (Slot::Title, "title") => Open::Title,
                        (Slot::Id, "id") => Open::Id,
                        (Slot::Updated, "updated") => Open::Updated,
                        (Slot::Summary, "summary") => Open::Summary,
                        _ => return Err(ParseError::unexpected_element(&local_name)),
                    });
                }
            }
            Ok(Event::Empty(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();

                if !root_open {
                    if local_name == "entry" {
                        return Err(ParseError::missing_element("title"));
                    }
                    return Err(ParseError::unexpected_element(&local_name));
                } else if open.is_some() {
                    return Err(ParseError::unexpected_element(&local_name));
                } else if in_author {
                    if local_name != "name" || author_name.is_some() {
                        return Err(ParseError::unexpected_element(&local_name));
                    }
                    author_name = Some(String::new());
                } else if slot == Slot::Links && local_name == "link" {
                    entry.links.push(link_from_attributes(&reader, e)?);
                } else {
                    match (slot, local_name.as_str()) {
                        (Slot::Title, "title") => {
                            entry.title = Some(String::new());
                            slot = Slot::Id;
                        }
                        (Slot::Id, "id") => {
                            entry.id = Some(String::new());
                            slot = Slot::Updated;
                        }
                        (Slot::Updated, "updated") => {
                            entry.updated = Some(String::new());
                            slot = Slot::Author;
                        }
                        (Slot::Author, "author") => {
                            return Err(ParseError::missing_element("name"));
                        }
                        (Slot::Summary, "summary") => {
                            entry.summary = Some(String::new());
                            slot = Slot::Links;
                        }
                        _ => return Err(ParseError::unexpected_element(&local_name)),
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();

                match open {
                    Some(current) if local_name == current.element() => {
                        let value = std::mem::take(&mut text);
                        match current {
                            Open::Title => {
                                entry.title = Some(value);
                                slot = Slot::Id;
                            }
                            Open::Id => {
                                entry.id = Some(value);
                                slot = Slot::Updated;
                            }
                            Open::Updated => {
                                entry.updated = Some(value);
                                slot = Slot::Author;
                            }
                            Open::Name => {
                                author_name = Some(value);
                            }
                            Open::Summary => {
                                entry.summary = Some(value);
                                slot = Slot::Links;
                            }
                            Open::Link => {}
                        }
                        open = None;
                    }
                    None if in_author && local_name == "author" => {
                        let Some(name) = author_name.take() else {
                            return Err(ParseError::missing_element("name"));
                        };
                        entry.author = Some(Person::new(name));
                        in_author = false;
                        slot = Slot::Summary;
                    }
                    None if root_open && !in_author && local_name == "entry" => {
                        if slot == Slot::Links {
                            return Ok(entry);
                        }
                        return Err(ParseError::missing_element(slot.element()));
                    }
                    _ => return Err(ParseError::unexpected_element(&local_name)),
                }
            }
            Ok(Event::Text(ref e)) => {
                if open.is_some_and(Open::is_text) {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&decoded);
                } else {
                    return Err(ParseError::invalid_value("unexpected text content"));
                }
            }
            Ok(Event::CData(ref e)) => {
                if open.is_some_and(Open::is_text) {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&decoded);
                } else {
                    return Err(ParseError::invalid_value("unexpected text content"));
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if open.is_some_and(Open::is_text) {
                    let name = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&resolve_reference(&name)?);
                } else {
                    return Err(ParseError::invalid_value("unexpected entity reference"));
                }
            }
            Ok(Event::Eof) => {
                return Err(if root_open {
                    ParseError::xml("unexpected end of document")
                } else {
                    ParseError::missing_element("entry")
                });
            }
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

/// Parses a standalone author fragment (`<author><name>..</name></author>`).
///
/// ## Errors
/// Returns an error if the XML is malformed, the root element is not an
/// author, or the name element is missing.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_author(xml: &[u8]) -> ParseResult<Person> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut root_open = false;
    let mut in_name = false;
    let mut name: Option<String> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if !root_open {
                    if local_name != "author" {
                        return Err(ParseError::unexpected_element(&local_name));
                    }
                    root_open = true;
                } else if !in_name && name.is_none() && local_name == "name" {
                    in_name = true;
                } else {
                    return Err(ParseError::unexpected_element(&local_name));
                }
            }
            Ok(Event::Empty(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if !root_open && local_name == "author" {
                    return Err(ParseError::missing_element("name"));
                }
                if root_open && !in_name && name.is_none() && local_name == "name" {
                    name = Some(String::new());
                } else {
                    return Err(ParseError::unexpected_element(&local_name));
                }
            }
            Ok(Event::End(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if in_name && local_name == "name" {
                    name = Some(std::mem::take(&mut text));
                    in_name = false;
                } else if root_open && !in_name && local_name == "author" {
                    let Some(name) = name else {
                        return Err(ParseError::missing_element("name"));
                    };
                    return Ok(Person::new(name));
                } else {
                    return Err(ParseError::unexpected_element(&local_name));
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_name {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&decoded);
                } else {
                    return Err(ParseError::invalid_value("unexpected text content"));
                }
            }
            Ok(Event::CData(ref e)) => {
                if in_name {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&decoded);
                } else {
                    return Err(ParseError::invalid_value("unexpected text content"));
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if in_name {
                    let reference = reader.decoder().decode(e.as_ref())?;
                    text.push_str(&resolve_reference(&reference)?);
                } else {
                    return Err(ParseError::invalid_value("unexpected entity reference"));
                }
            }
            Ok(Event::Eof) => {
                return Err(if root_open {
                    ParseError::xml("unexpected end of document")
                } else {
                    ParseError::missing_element("author")
                });
            }
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

/// Parses a standalone link fragment (`<link href=".." rel=".." type=".."/>`).
///
/// ## Errors
/// Returns an error if the XML is malformed, the root element is not a
/// link, or the href attribute is missing.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_link(xml: &[u8]) -> ParseResult<Link> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut link: Option<Link> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if link.is_none() && local_name == "link" {
                    return link_from_attributes(&reader, e);
                }
                return Err(ParseError::unexpected_element(&local_name));
            }
            Ok(Event::Start(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if link.is_none() && local_name == "link" {
                    link = Some(link_from_attributes(&reader, e)?);
                } else {
                    return Err(ParseError::unexpected_element(&local_name));
                }
            }
            Ok(Event::End(ref e)) => {
                let local_name = std::str::from_utf8(e.local_name().as_ref())?.to_owned();
                if local_name == "link" && let Some(link) = link.take() {
                    return Ok(link);
                }
                return Err(ParseError::unexpected_element(&local_name));
            }
            Ok(Event::Text(_) | Event::CData(_) | Event::GeneralRef(_)) => {
                return Err(ParseError::invalid_value("unexpected text content"));
            }
            Ok(Event::Eof) => {
                return Err(if link.is_some() {
                    ParseError::xml("unexpected end of document")
                } else {
                    ParseError::missing_element("link")
                });
            }
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}

/// Reads the `href`, `rel`, and `type` attributes of a link element.
fn link_from_attributes(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> ParseResult<Link> {
    let mut href: Option<String> = None;
    let mut rel: Option<String> = None;
    let mut media_type: Option<String> = None;

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"href" => {
                href = Some(attr.decode_and_unescape_value(reader.decoder())?.into_owned());
            }
            b"rel" => {
                rel = Some(attr.decode_and_unescape_value(reader.decoder())?.into_owned());
            }
            b"type" => {
                media_type = Some(attr.decode_and_unescape_value(reader.decoder())?.into_owned());
            }
            _ => {}
        }
    }

    let Some(href) = href else {
        return Err(ParseError::missing_attribute("href"));
    };

    Ok(Link {
        href,
        rel,
        media_type,
    })
}

/// Resolves a character or predefined entity reference to its text.
fn resolve_reference(reference: &str) -> ParseResult<String> {
    if let Some(digits) = reference.strip_prefix('#') {
        let value = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16)
        } else {
            digits.parse::<u32>()
        }
        .map_err(|err| {
            tracing::warn!(error = ?err, value = %digits, "Invalid numeric character reference");
            ParseError::invalid_value("invalid numeric character reference")
        })?;
        let Some(ch) = char::from_u32(value) else {
            return Err(ParseError::invalid_value(
                "invalid numeric character reference",
            ));
        };
        Ok(ch.to_string())
    } else {
        quick_xml::escape::resolve_predefined_entity(reference)
            .map(str::to_owned)
            .ok_or_else(|| {
                ParseError::invalid_value(format!("unknown entity reference: &{reference};"))
            })
    }
}
