//! Atom document fixtures and build/parse tests.
//!
//! Tests verify RFC 4287 conformance enforcement, the fixed element
//! order of feed and entry documents, and the entry read path.

mod conformance;
mod round_trip;
