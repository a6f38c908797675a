use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IOError: {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("NotFound: {target}")]
    NotFound { target: String },
    #[error("UnexpectedEof: expected {expected} {unit}, found {found}")]
    UnexpectedEof {
        expected: usize,
        found: usize,
        unit: &'static str,
    },
    #[error("UnknownVariant: record kind {0}")]
    UnknownVariant(u32),
    #[error("Corruption: {0}")]
    Corruption(String),
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn io_error(target: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                target: target.to_owned(),
            },
            _ => Self::Io {
                target: target.to_owned(),
                source,
            },
        }
    }

    pub fn corruption(msg: &str) -> Self {
        Self::Corruption(msg.to_owned())
    }

    pub fn invalid_argument(msg: &str) -> Self {
        Self::InvalidArgument(msg.to_owned())
    }

    pub fn short_bytes(expected: usize, found: usize) -> Self {
        Self::UnexpectedEof {
            expected,
            found,
            unit: "bytes",
        }
    }

    pub fn short_records(expected: usize, found: usize) -> Self {
        Self::UnexpectedEof {
            expected,
            found,
            unit: "records",
        }
    }

    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// The read or write was interrupted by a signal and can be retried.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::Interrupted)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }

    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant(_))
    }

    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::Corruption(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
