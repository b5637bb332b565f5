//! Result and Error types for ltools-mcsub

/// Type alias for `Result<T, ltools_mcsub::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ltools-mcsub` crate
///
/// The format is positional, so every section is mandatory and anything
/// missing or mis-shaped is an error rather than a default.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("scan failed")]
    Scan(#[from] ltools_core::Error),

    #[error("truncated parameter block (expected {expected}, found {found})")]
    TruncatedParameters { expected: usize, found: usize },

    #[error("unexpected number of values (expected {expected}, found {found})")]
    UnexpectedLength { expected: usize, found: usize },

    #[error("unknown source flag {0} (expected 0, 1, or 2)")]
    UnknownBeamFlag(i64),

    /// Raw nom crate errors
    #[error("parser failed: {0}")]
    Nom(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::Nom(format!("{err:?}"))
    }
}
