//! Atom XML namespace constants.

/// Atom 1.0 namespace URI (RFC 4287).
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// `AtomPub` 1.0 namespace URI (RFC 5023), reserved for service documents.
pub const ATOM_PUB_NS: &str = "http://www.w3.org/2007/app";

/// Prefix used when serializing standalone entry documents in prefixed form.
pub const ATOM_PREFIX: &str = "atom";

/// Media type carried on the `type` attribute of embedded `atom:content`.
pub const APPLICATION_XML: &str = "application/xml";
