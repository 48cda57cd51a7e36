use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
