//! Errors raised by the input and report collaborators.
//!
//! The search itself never fails.

use thiserror::Error;

/// Name of the input or stream an error refers to.
pub type What = &'static str;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {what}: {source}")]
    Io {
        what: What,
        #[source]
        source: std::io::Error,
    },

    #[error("{what} is {len} bytes, longer than the limit of {max}")]
    TooLong { what: What, len: usize, max: usize },

    #[error("input ended before the {0} was entered")]
    MissingInput(What),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(what: What) -> impl FnOnce(std::io::Error) -> Error {
        move |source| Error::Io { what, source }
    }
}
