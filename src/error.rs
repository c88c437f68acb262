//! Error types for GUANO metadata extraction.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GuanoError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended partway through a fixed-size header.
    #[error("truncated {context} header: expected {expected} bytes, read {read}")]
    TruncatedHeader {
        context: &'static str,
        expected: usize,
        read: usize,
    },

    /// The leading container tag is not "RIFF".
    #[error("expected \"RIFF\" container signature, found {found:?}")]
    BadSignature { found: String },

    /// The container's format designator is not "WAVE".
    #[error("expected \"WAVE\" format designator, found {found:?}")]
    BadFormat { found: String },

    /// The first subchunk is not the mandatory "fmt " chunk.
    #[error("expected \"fmt \" chunk, found {found:?}")]
    BadFormatChunk { found: String },

    /// A chunk declares more payload bytes than the stream holds.
    #[error("chunk {tag:?} declares {declared} payload bytes, only {available} available")]
    TruncatedChunk {
        tag: String,
        declared: u32,
        available: u64,
    },

    /// The container was walked to its end without a "guan" chunk appearing.
    #[error("no \"guan\" metadata chunk found")]
    MissingMetadataChunk,

    /// The metadata payload is not valid UTF-8.
    #[error("metadata payload is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A non-blank metadata line has no colon separator, or an empty key.
    #[error("malformed metadata field {0:?}")]
    MalformedField(String),
}

/// A convenience `Result` type alias using the crate's `GuanoError` type.
pub type Result<T> = std::result::Result<T, GuanoError>;
