use crate::code;

/// HTTP message head parsing error.
///
/// Every error is terminal for the parse call that reports it, the parser never skips over bad
/// input. Insufficient input is not an error, it is reported as [`ParseResult::Pending`].
///
/// [`ParseResult::Pending`]: crate::ParseResult::Pending
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Request line method is not one of the recognized methods.
    InvalidMethod,
    /// Request target is empty or contains a control byte.
    InvalidUri,
    /// A server that receives a request-target longer than any URI it wishes to parse MUST respond
    /// with a 414 (URI Too Long) status code.
    UriTooLong,
    /// Version is not `HTTP/0.9`, `HTTP/1.0`, or `HTTP/1.1`.
    InvalidVersion,
    /// Status code is not three digits.
    InvalidStatus,
    /// Line is not terminated by CRLF, or a control byte appears in the reason phrase.
    InvalidSeparator,
    /// Header line have no colon or an empty name.
    MalformedHeader,
    /// Header count exceeds the configured maximum.
    TooManyHeaders,
    /// Header block exceeds the configured maximum length.
    HeaderBlockTooLong,
}

impl ParseError {
    /// Returns the numeric outcome code, one of the `code::E_*` constants.
    #[inline]
    pub const fn code(&self) -> i32 {
        match self {
            Self::InvalidMethod => code::E_INVALID_METHOD,
            Self::InvalidUri => code::E_INVALID_URI,
            Self::UriTooLong => code::E_URI_TOO_LONG,
            Self::InvalidVersion => code::E_INVALID_VERSION,
            Self::InvalidStatus => code::E_INVALID_STATUS,
            Self::InvalidSeparator => code::E_INVALID_SEPARATOR,
            Self::MalformedHeader => code::E_MALFORMED_HEADER,
            Self::TooManyHeaders => code::E_TOO_MANY_HEADERS,
            Self::HeaderBlockTooLong => code::E_HEADER_BLOCK_TOO_LONG,
        }
    }
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidMethod => f.write_str("invalid method"),
            Self::InvalidUri => f.write_str("invalid uri"),
            Self::UriTooLong => f.write_str("uri too long"),
            Self::InvalidVersion => f.write_str("invalid version"),
            Self::InvalidStatus => f.write_str("invalid status"),
            Self::InvalidSeparator => f.write_str("invalid separator"),
            Self::MalformedHeader => f.write_str("malformed header"),
            Self::TooManyHeaders => f.write_str("too many headers"),
            Self::HeaderBlockTooLong => f.write_str("header block too long"),
        }
    }
}
