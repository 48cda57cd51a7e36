//! Round-trip tests for entry documents and structural tests for feeds.

use serde_json::json;
use tributary_core::constants::{FEED_AUTHOR, FEED_PAGE_SIZE};
use tributary_core::types::EventRecord;
use uuid::Uuid;

use super::fixtures::{ENTRY_MINIMAL, ENTRY_PREFIXED, ENTRY_WITH_LINKS, sample_entry, sample_feed};
use crate::build::{serialize_entry, serialize_feed};
use crate::core::Link;
use crate::parse::parse_entry;

#[test_log::test]
fn entry_survives_write_then_read() {
    let mut entry = sample_entry();
    entry.add_link(Link::with_rel(
        "http://127.0.0.1:2113/streams/payments/5",
        "edit",
    ));
    entry.add_link(Link::with_media_type(
        "http://127.0.0.1:2113/streams/payments/5?format=text",
        "alternate",
        "text/plain",
    ));

    let xml = serialize_entry(&entry, false).unwrap();
    let parsed = parse_entry(xml.as_bytes()).unwrap();

    assert_eq!(parsed.title, entry.title);
    assert_eq!(parsed.id, entry.id);
    assert_eq!(parsed.updated, entry.updated);
    assert_eq!(parsed.author, entry.author);
    assert_eq!(parsed.summary, entry.summary);
    assert_eq!(parsed.links, entry.links);
}

#[test]
fn prefixed_entry_survives_write_then_read() {
    let entry = sample_entry();
    let xml = serialize_entry(&entry, true).unwrap();
    let parsed = parse_entry(xml.as_bytes()).unwrap();
    assert_eq!(parsed.title, entry.title);
    assert_eq!(parsed.author, entry.author);
    assert_eq!(parsed.summary, entry.summary);
}

#[test]
fn fixture_documents_parse_to_the_sample_entry() {
    let expected = sample_entry();
    for doc in [ENTRY_MINIMAL, ENTRY_PREFIXED] {
        let parsed = parse_entry(doc).unwrap();
        assert_eq!(parsed.title, expected.title);
        assert_eq!(parsed.id, expected.id);
        assert_eq!(parsed.updated, expected.updated);
        assert_eq!(parsed.author, expected.author);
        assert_eq!(parsed.summary, expected.summary);
        assert!(parsed.links.is_empty());
    }
}

#[test]
fn fixture_with_links_parses_both_links() {
    let parsed = parse_entry(ENTRY_WITH_LINKS).unwrap();
    assert_eq!(parsed.links.len(), 2);
    assert_eq!(
        parsed.links[0],
        Link::with_rel("http://127.0.0.1:2113/streams/payments/5", "edit")
    );
    assert_eq!(
        parsed.links[1],
        Link::with_media_type(
            "http://127.0.0.1:2113/streams/payments/5?format=text",
            "alternate",
            "text/plain",
        )
    );
}

#[test]
fn reparsed_entry_serializes_to_the_same_document() {
    let mut entry = sample_entry();
    entry.add_link(Link::with_rel(
        "http://127.0.0.1:2113/streams/payments/5",
        "edit",
    ));

    let xml = serialize_entry(&entry, false).unwrap();
    let reparsed = parse_entry(xml.as_bytes()).unwrap();
    assert_eq!(serialize_entry(&reparsed, false).unwrap(), xml);
}

#[test]
fn feed_page_holds_a_page_of_entries() {
    let mut feed = sample_feed();
    feed.add_link(Link::with_rel(
        "http://127.0.0.1:2113/subscriptions/payments/group/1",
        "previous",
    ));
    for n in 0..FEED_PAGE_SIZE {
        let mut entry = sample_entry();
        entry.set_title(format!("{n}@payments"));
        entry.set_id(format!("http://127.0.0.1:2113/streams/payments/{n}"));
        feed.add_entry(entry);
    }

    let xml = serialize_feed(&feed).unwrap();
    assert_eq!(xml.matches("<entry>").count(), FEED_PAGE_SIZE);
    assert_eq!(xml.matches("<link ").count(), 2);
    // Page order is insertion order.
    let first = xml.find("<title>0@payments</title>").unwrap();
    let last = xml.find("<title>19@payments</title>").unwrap();
    assert!(first < last);
}

#[test]
fn feed_author_uses_the_attribution_constant() {
    let feed = sample_feed();
    assert_eq!(feed.author.as_ref().map(|a| a.name.as_str()), Some(FEED_AUTHOR));
    let xml = serialize_feed(&feed).unwrap();
    assert!(xml.contains("<author><name>EventStore</name></author>"));
}

#[test]
fn event_record_rides_along_without_being_serialized() {
    let mut entry = sample_entry();
    entry.event = Some(EventRecord {
        event_id: Uuid::new_v4(),
        event_type: "payment-settled".to_owned(),
        event_number: 5,
        stream_id: "payments".to_owned(),
        is_json: true,
        position_event_number: 5,
        position_stream_id: "payments".to_owned(),
        ..EventRecord::default()
    });

    let xml = serialize_entry(&entry, false).unwrap();
    assert!(!xml.contains("eventId"));
    assert_eq!(xml, serialize_entry(&sample_entry(), false).unwrap());
}

#[test]
fn event_data_projects_into_content() {
    // The producing layer parses EventRecord.data and embeds it.
    let record = EventRecord {
        event_id: Uuid::new_v4(),
        event_type: "payment-settled".to_owned(),
        event_number: 5,
        data: Some(r#"{"amount":3,"currency":"EUR"}"#.to_owned()),
        stream_id: "payments".to_owned(),
        is_json: true,
        position_event_number: 5,
        position_stream_id: "payments".to_owned(),
        ..EventRecord::default()
    };

    let mut entry = sample_entry();
    let payload: serde_json::Value =
        serde_json::from_str(record.data.as_deref().unwrap()).unwrap();
    entry.set_content(payload).unwrap();
    entry.event = Some(record);

    let xml = serialize_entry(&entry, false).unwrap();
    assert!(xml.contains(
        "<content type=\"application/xml\">\
         <amount xmlns=\"\">3</amount>\
         <currency xmlns=\"\">EUR</currency>\
         </content>"
    ));
}

#[test]
fn content_text_round_trips_through_json_text() {
    let value = json!({"note": "a < b & c", "count": 2});
    // value -> JSON text is serde_json's own conversion.
    let text = serde_json::to_string(&value).unwrap();
    let back: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);

    let mut entry = sample_entry();
    entry.set_content(back).unwrap();
    let xml = serialize_entry(&entry, true).unwrap();
    assert!(xml.contains("<note>a &lt; b &amp; c</note><count>2</count>"));
}
