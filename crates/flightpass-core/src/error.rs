//! Error types for the flightpass-core library.
//!
//! Field extraction itself has no error path: a field that cannot be
//! resolved is [`FieldValue::NotFound`](crate::FieldValue::NotFound). The
//! types here cover the fallible edges around it.

use thiserror::Error;

/// Main error type for the flightpass library.
#[derive(Error, Debug)]
pub enum FlightpassError {
    /// Building a catalog failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Reading a document failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while building a field catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A carrier definition is unusable.
    #[error("invalid carrier {name}: {reason}")]
    InvalidCarrier { name: String, reason: String },

    /// A pattern failed to compile.
    #[error("invalid pattern for {field}: {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors related to reading input documents.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The mail message could not be parsed.
    #[error("failed to parse mail message: {0}")]
    Mail(#[from] mailparse::MailParseError),

    /// The file extension is not a known document kind.
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    /// Failed to read the document.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the flightpass library.
pub type Result<T> = std::result::Result<T, FlightpassError>;
