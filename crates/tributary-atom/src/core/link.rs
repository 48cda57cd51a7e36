//! Atom link element.

/// An Atom link element (RFC 4287 §4.2.7).
///
/// Only the `href`, `rel`, and `type` attributes are carried; absent
/// optional attributes are omitted from the serialized element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    /// Link target IRI.
    pub href: String,
    /// Link relation (`self`, `first`, `previous`, `edit`, ...).
    pub rel: Option<String>,
    /// Advisory media type of the target.
    pub media_type: Option<String>,
}

impl Link {
    /// Creates a link with only an href.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
            media_type: None,
        }
    }

    /// Creates a link with an href and a relation.
    #[must_use]
    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: Some(rel.into()),
            media_type: None,
        }
    }

    /// Creates a link with an href, a relation, and a media type.
    #[must_use]
    pub fn with_media_type(
        href: impl Into<String>,
        rel: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            rel: Some(rel.into()),
            media_type: Some(media_type.into()),
        }
    }

    /// Returns whether this link carries the given relation.
    #[must_use]
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel.as_deref() == Some(rel)
    }
}
