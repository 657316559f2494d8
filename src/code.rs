//! Numeric codes.
//!
//! Closed integer enumerations for consumers that cannot hold Rust types, e.g. scripting language
//! bindings. Every value here has a typed counterpart:
//!
//! - method codes, see [`Method::code`]
//! - version codes, see [`Version::code`]
//! - outcome codes, see [`ParseResult::code`] and [`ParseError::code`]
//!
//! [`Method::code`]: crate::http::Method::code
//! [`Version::code`]: crate::http::Version::code
//! [`ParseResult::code`]: crate::ParseResult::code
//! [`ParseError::code`]: crate::ParseError::code

// ===== Methods =====

/// `GET`
pub const M_GET: u8 = 1;
/// `HEAD`
pub const M_HEAD: u8 = 2;
/// `POST`
pub const M_POST: u8 = 3;
/// `PUT`
pub const M_PUT: u8 = 4;
/// `DELETE`
pub const M_DELETE: u8 = 5;
/// `OPTIONS`
pub const M_OPTIONS: u8 = 6;
/// `TRACE`
pub const M_TRACE: u8 = 7;
/// `CONNECT`
pub const M_CONNECT: u8 = 8;

// ===== Versions =====

/// `HTTP/0.9`
pub const V09: u8 = 9;
/// `HTTP/1.0`
pub const V10: u8 = 10;
/// `HTTP/1.1`
pub const V11: u8 = 11;

// ===== Outcomes =====

/// Message head parsed successfully.
pub const SUCCESS: i32 = 0;
/// More bytes are required.
pub const INCOMPLETE: i32 = 1;
/// [`ParseError::InvalidMethod`](crate::ParseError::InvalidMethod)
pub const E_INVALID_METHOD: i32 = -1;
/// [`ParseError::InvalidUri`](crate::ParseError::InvalidUri)
pub const E_INVALID_URI: i32 = -2;
/// [`ParseError::UriTooLong`](crate::ParseError::UriTooLong)
pub const E_URI_TOO_LONG: i32 = -3;
/// [`ParseError::InvalidVersion`](crate::ParseError::InvalidVersion)
pub const E_INVALID_VERSION: i32 = -4;
/// [`ParseError::InvalidStatus`](crate::ParseError::InvalidStatus)
pub const E_INVALID_STATUS: i32 = -5;
/// [`ParseError::InvalidSeparator`](crate::ParseError::InvalidSeparator)
pub const E_INVALID_SEPARATOR: i32 = -6;
/// [`ParseError::MalformedHeader`](crate::ParseError::MalformedHeader)
pub const E_MALFORMED_HEADER: i32 = -7;
/// [`ParseError::TooManyHeaders`](crate::ParseError::TooManyHeaders)
pub const E_TOO_MANY_HEADERS: i32 = -8;
/// [`ParseError::HeaderBlockTooLong`](crate::ParseError::HeaderBlockTooLong)
pub const E_HEADER_BLOCK_TOO_LONG: i32 = -9;
