use thiserror::Error;

use crate::core::ConformanceViolation;
use crate::parse::ParseError;

/// Atom document building and reading errors
#[derive(Error, Debug)]
pub enum AtomError {
    #[error(transparent)]
    Violation(#[from] ConformanceViolation),

    #[error("entry content has already been set")]
    ContentAlreadySet,

    #[error("reading feed documents is not implemented")]
    FeedReadUnimplemented,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] tributary_core::error::CoreError),
}

pub type AtomResult<T> = std::result::Result<T, AtomError>;
