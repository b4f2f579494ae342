use std::io;
use thiserror::Error;

/// Errors surfaced by the crate.
///
/// Malformed content is never an error: the parser produces a best-effort
/// value for every byte sequence. Only resource exhaustion (nesting depth)
/// and I/O failures while reaching the input reach the caller.
#[derive(Debug, Error)]
pub enum MendError {
    #[error("maximum nesting depth {limit} exceeded at byte {position}")]
    MaxDepthExceeded { limit: usize, position: usize },

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

impl MendError {
    pub(crate) fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io { context, source }
    }
}

pub(crate) type MendResult<T> = Result<T, MendError>;
