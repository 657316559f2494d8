//! HTTP/1 message head scanner.
//!
//! The scanner recognizes the [request line][rl] or [status line][sl], followed by the header
//! block up to and including the empty line. It never copies: every result is an offset range
//! into the scanned buffer.
//!
//! Each function takes a [`Cursor`] and returns [`ParseResult`]:
//!
//! - [`ParseResult::Pending`], the buffer ends before the element is complete, nothing is
//!   reported and the caller retries with more bytes, from the start of the buffer.
//! - [`ParseResult::Err`], the bytes seen so far can never form a valid element. Errors are
//!   detected as early as possible, but never on a strict prefix of a valid message.
//! - [`ParseResult::Ok`], the element is complete and the cursor is advanced past its CRLF.
//!
//! The scanner holds no state between calls, positions are only meaningful for the buffer given
//! to the call that produced them.
//!
//! [rl]: <https://httpwg.org/specs/rfc9112.html#request.line>
//! [sl]: <https://httpwg.org/specs/rfc9112.html#status.line>
//! [`ParseResult`]: crate::ParseResult
//! [`ParseResult::Pending`]: crate::ParseResult::Pending
//! [`ParseResult::Err`]: crate::ParseResult::Err
//! [`ParseResult::Ok`]: crate::ParseResult::Ok
use std::ops::Range;

use crate::common::ParseResult;

mod cursor;
mod error;
mod header;
mod request;
mod response;


pub(crate) use cursor::Cursor;
pub use error::ParseError;
pub use header::{Header, HeaderRange};
pub(crate) use header::parse_headers;
pub(crate) use request::parse_request_line;
pub(crate) use response::parse_status_line;

macro_rules! ready {
    ($e:expr) => {
        match $e {
            Some(ok) => ok,
            None => return $crate::common::ParseResult::Pending,
        }
    };
}

macro_rules! err {
    ($variant:ident) => {
        $crate::common::ParseResult::Err($crate::parser::ParseError::$variant)
    };
}

macro_rules! tri {
    ($e:expr) => {
        match $e {
            $crate::common::ParseResult::Ok(ok) => ok,
            $crate::common::ParseResult::Pending => return $crate::common::ParseResult::Pending,
            $crate::common::ParseResult::Err(err) => return $crate::common::ParseResult::Err(err),
        }
    };
}

pub(crate) use {ready, err, tri};

/// Position of the scanner within one parse call.
///
/// Only moves forward. A new call always starts again from [`Phase::Start`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing scanned yet.
    #[default]
    Start,
    /// Scanning the request method.
    Method,
    /// Scanning the protocol version.
    Version,
    /// Scanning the response status code.
    Status,
    /// Scanning the request target or the reason phrase.
    Message,
    /// Scanning header lines.
    Headers,
    /// Message head is complete.
    Done,
    /// Scanning failed, the handle must be reset or given a new message.
    Failed(ParseError),
}

/// Consume a CRLF.
///
/// `other` is reported when the next byte is neither CR nor LF, it names the element that was
/// expected to end here.
fn parse_crlf(cursor: &mut Cursor<'_>, other: ParseError) -> ParseResult<(), ParseError> {
    match ready!(cursor.peek()) {
        b'\r' => {}
        b'\n' => return err!(InvalidSeparator),
        _ => return ParseResult::Err(other),
    }
    match ready!(cursor.peek_at(1)) {
        b'\n' => {
            cursor.advance(2);
            ParseResult::Ok(())
        }
        _ => err!(InvalidSeparator),
    }
}

/// Consume a version literal, rejecting as soon as the available bytes can not match.
fn parse_version(cursor: &mut Cursor<'_>) -> ParseResult<crate::http::Version, ParseError> {
    use crate::http::Version;

    let bytes = cursor.as_bytes();
    if !Version::is_prefix(&bytes[..bytes.len().min(Version::LEN)]) {
        return err!(InvalidVersion);
    }

    let literal = ready!(cursor.next_chunk::<{ Version::LEN }>());
    match Version::from_bytes(literal) {
        Some(ok) => ParseResult::Ok(ok),
        None => err!(InvalidVersion),
    }
}

#[inline]
fn span(start: usize, len: usize) -> Range<usize> {
    start..start + len
}
