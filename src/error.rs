//! Error types

/// Result type alias for composer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the header boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Header name is not a valid RFC 5322 field-name.
    #[error("Invalid header name: {0:?}")]
    InvalidHeaderName(String),

    /// Verbatim header value contains a raw CR or LF.
    #[error("Line break in {field} value: {value:?}")]
    LineBreak { field: String, value: String },

    /// Unknown Content-Transfer-Encoding token.
    #[error("Unknown transfer encoding: {0}")]
    UnknownEncoding(String),
}
