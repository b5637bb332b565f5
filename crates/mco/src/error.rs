//! Result and Error types for ltools-mco

/// Type alias for `Result<T, ltools_mco::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `ltools-mco` crate
///
/// Low-level scanning errors propagate unchanged through the variant
/// readers. An absent optional section marker is not an error; the
/// corresponding array is left empty.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("scan failed")]
    Scan(#[from] ltools_core::Error),

    #[error("leading bytes do not match \"{expected}\" (found \"{found}\")")]
    UnrecognizedFormat { expected: String, found: String },

    #[error("layer references undefined medium \"{0}\"")]
    UndefinedMedium(String),

    #[error("mandatory section \"{0}\" not found")]
    SectionNotFound(String),

    #[error("unexpected number of values (expected {expected}, found {found})")]
    UnexpectedLength { expected: usize, found: usize },

    /// Raw nom crate errors
    #[error("parser failed: {0}")]
    Nom(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::Nom(format!("{err:?}"))
    }
}
