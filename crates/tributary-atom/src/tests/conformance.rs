//! Conformance enforcement tests across the serialize and read paths.

use serde_json::json;
use tributary_core::error::CoreError;

use super::fixtures::{sample_entry, sample_feed};
use crate::build::{serialize_entry, serialize_feed};
use crate::core::{ConformanceViolation, Entry, Feed, Link, Person};
use crate::error::AtomError;
use crate::parse::parse_feed;

fn feed_violation(feed: &Feed) -> ConformanceViolation {
    match serialize_feed(feed).unwrap_err() {
        AtomError::Violation(violation) => violation,
        other => panic!("expected a conformance violation, got {other}"),
    }
}

fn entry_violation(entry: &Entry) -> ConformanceViolation {
    match serialize_entry(entry, false).unwrap_err() {
        AtomError::Violation(violation) => violation,
        other => panic!("expected a conformance violation, got {other}"),
    }
}

#[test]
fn feed_requires_every_mandatory_field() {
    let mut feed = sample_feed();
    feed.title = None;
    assert_eq!(feed_violation(&feed), ConformanceViolation::feed_title());

    let mut feed = sample_feed();
    feed.id = Some(String::new());
    assert_eq!(feed_violation(&feed), ConformanceViolation::feed_id());

    let mut feed = sample_feed();
    feed.updated = None;
    assert_eq!(feed_violation(&feed), ConformanceViolation::feed_updated());

    let mut feed = sample_feed();
    feed.author = None;
    assert_eq!(feed_violation(&feed), ConformanceViolation::feed_author());

    let mut feed = sample_feed();
    feed.links.clear();
    assert_eq!(feed_violation(&feed), ConformanceViolation::feed_self_link());
}

#[test]
fn entry_requires_every_mandatory_field() {
    let mut entry = sample_entry();
    entry.title = None;
    assert_eq!(entry_violation(&entry), ConformanceViolation::entry_title());

    let mut entry = sample_entry();
    entry.id = None;
    assert_eq!(entry_violation(&entry), ConformanceViolation::entry_id());

    let mut entry = sample_entry();
    entry.updated = Some(String::new());
    assert_eq!(entry_violation(&entry), ConformanceViolation::entry_updated());

    let mut entry = sample_entry();
    entry.author = None;
    assert_eq!(entry_violation(&entry), ConformanceViolation::entry_author());

    let mut entry = sample_entry();
    entry.summary = None;
    assert_eq!(entry_violation(&entry), ConformanceViolation::entry_summary());
}

#[test]
fn summary_is_mandatory_for_entries_but_not_feeds() {
    // A feed has no summary at all; its serialization must not demand one.
    let feed = sample_feed();
    assert!(serialize_feed(&feed).is_ok());

    let mut entry = sample_entry();
    entry.summary = None;
    assert!(serialize_entry(&entry, false).is_err());
}

#[test]
fn empty_author_name_is_a_person_violation() {
    let mut feed = sample_feed();
    feed.author = Some(Person::new(""));
    assert_eq!(feed_violation(&feed), ConformanceViolation::person_name());
}

#[test]
fn empty_link_href_is_a_link_violation() {
    let mut entry = sample_entry();
    entry.add_link(Link::new(""));
    assert_eq!(entry_violation(&entry), ConformanceViolation::link_href());
}

#[test]
fn violation_message_names_the_atom_rule() {
    let mut feed = sample_feed();
    feed.author = None;
    let err = serialize_feed(&feed).unwrap_err();
    assert_eq!(
        err.to_string(),
        "atom:feed elements MUST contain one or more atom:author elements."
    );
}

#[test]
fn nested_entry_violation_aborts_the_whole_feed() {
    let mut feed = sample_feed();
    feed.add_entry(sample_entry());
    feed.add_entry(Entry::new());
    assert_eq!(feed_violation(&feed), ConformanceViolation::entry_title());
}

#[test]
fn content_is_write_once_across_the_public_surface() {
    let mut entry = sample_entry();
    entry.set_content(json!({"amount": 3})).unwrap();
    assert!(matches!(
        entry.set_content(json!({"amount": 4})).unwrap_err(),
        AtomError::ContentAlreadySet
    ));
    // The first payload is what serializes.
    let xml = serialize_entry(&entry, false).unwrap();
    assert!(xml.contains("<amount xmlns=\"\">3</amount>"));
}

#[test]
fn null_content_is_an_invalid_argument() {
    let mut entry = sample_entry();
    assert!(matches!(
        entry.set_content(serde_json::Value::Null).unwrap_err(),
        AtomError::Core(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn feed_reading_is_not_implemented() {
    let xml = serialize_feed(&sample_feed()).unwrap();
    assert!(matches!(
        parse_feed(xml.as_bytes()).unwrap_err(),
        AtomError::FeedReadUnimplemented
    ));
}
