//! Result and Error types for ltools-core

/// Type alias for `Result<T, ltools_core::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ltools-core` scanning primitives
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("no number found before the stream ended")]
    NoNumber,

    #[error("malformed number \"{0}\"")]
    MalformedNumber(String),

    #[error("stream exhausted after {found} of {expected} values")]
    TruncatedData { expected: usize, found: usize },

    #[error("stream exhausted before a data line was found")]
    EndOfInput,
}
