//! Unified error type for all store operations.

use crate::validate::Rejection;

/// Things that can go wrong when using the store.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// File system problem (read, write, rename). The call that hit it had no
    /// effect on the persisted collection.
    #[error("i/o error: {0}")]
    Io(String),
    /// Failed to serialize the collection to bytes.
    #[error("serialization error: {0}")]
    Serialize(String),
    /// The backing document exists but does not parse as a collection.
    /// [`RecordFile::load`](crate::persist::RecordFile::load) recovers from
    /// this; only the raw `read` ever returns it.
    #[error("corrupt storage: {0}")]
    Corrupt(String),
    /// Bad configuration (invalid path, etc.).
    #[error("config error: {0}")]
    Config(String),
    /// The candidate record was refused at admission.
    #[error("invalid record: {0}")]
    Invalid(Rejection),
    /// No record carries the requested id.
    #[error("record {0} not found")]
    NotFound(u64),
    /// The highest stored id is `u64::MAX`; nothing left to allocate.
    #[error("identifier space exhausted")]
    IdsExhausted,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// Decode side only; encode failures are mapped to `Serialize` at the call.
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else {
            Error::Corrupt(err.to_string())
        }
    }
}

impl From<Rejection> for Error {
    fn from(reason: Rejection) -> Self {
        Error::Invalid(reason)
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
