//! Error types for pdfdump.

use std::io;
use thiserror::Error;

/// Result type alias for pdfdump operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while opening a document or extracting its text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The header carries a version string that is not `digit.digit`.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF library could not parse the document structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text could not be extracted from a page.
    #[error("Text extraction error on page {page}: {message}")]
    TextExtract { page: u32, message: String },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
