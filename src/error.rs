use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by the parser, the header store and the serializer.
///
/// Malformed header lines and a truncated header block are not errors:
/// the parser skips or stops on them and still succeeds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The request line is missing its CRLF, one of its three tokens,
    /// or the `http://` scheme.
    #[error("malformed request line: {0}")]
    MalformedRequestLine(&'static str),

    /// No header matched the requested key.
    #[error("header not found")]
    HeaderNotFound,

    /// The destination buffer is smaller than the serialized request.
    #[error("destination too small: need {needed} bytes, have {available}")]
    Overflow { needed: usize, available: usize },

    #[error("config error: {0}")]
    Config(String),
}
