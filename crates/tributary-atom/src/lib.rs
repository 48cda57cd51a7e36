//! Atom document layer for persistent subscription streams.
//!
//! Builds and validates the Atom feed and entry documents a subscription
//! HTTP layer serves: the document model lives in [`core`], RFC 4287
//! conformance checks run before any XML is written, [`build`] renders
//! documents through quick-xml, and [`parse`] reads standalone entry
//! documents back. Feed reading is deliberately unsupported.
//!
//! Entry content is an ordered JSON value embedded into `atom:content`
//! as inline XML; see [`core::content_nodes`].

pub mod build;
pub mod core;
pub mod error;
pub mod parse;

pub use error::{AtomError, AtomResult};

#[cfg(test)]
mod tests;
