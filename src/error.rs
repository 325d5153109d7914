use thiserror::Error;

/// Errors raised while decoding air quality responses.
///
/// Missing data is never an error: the selection and scale functions
/// return `None` for it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed air quality payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
