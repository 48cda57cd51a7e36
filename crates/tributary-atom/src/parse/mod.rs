//! Atom document reading.
//!
//! Only the entry read path exists; feed documents are write-only and
//! [`parse_feed`] signals that rather than half-populating a value.

mod entry;
pub mod error;

pub use entry::{parse_author, parse_entry, parse_link};
pub use error::{ParseError, ParseErrorKind, ParseResult};

use crate::core::Feed;
use crate::error::{AtomError, AtomResult};

/// Reads a feed document.
///
/// ## Errors
/// Always fails with [`AtomError::FeedReadUnimplemented`]; feed pages are
/// produced by this layer and never read back.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_feed(xml: &[u8]) -> AtomResult<Feed> {
    tracing::debug!("Rejecting feed document read");
    Err(AtomError::FeedReadUnimplemented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feed_is_unimplemented() {
        let err = parse_feed(b"<feed xmlns=\"http://www.w3.org/2005/Atom\"/>").unwrap_err();
        assert!(matches!(err, AtomError::FeedReadUnimplemented));
    }

    #[test]
    fn parse_feed_rejects_even_empty_input() {
        assert!(matches!(
            parse_feed(b"").unwrap_err(),
            AtomError::FeedReadUnimplemented
        ));
    }
}
