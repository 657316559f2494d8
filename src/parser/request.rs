use std::ops::Range;

use super::{Cursor, ParseError, Phase, err, parse_crlf, parse_version, span, tri};
use crate::common::ParseResult;
use crate::http::{Method, Version};
use crate::log::warning;
use crate::matches;

/// Scanned request line.
#[derive(Debug)]
pub(crate) struct RequestLine {
    pub method: Method,
    pub uri: Range<usize>,
    pub version: Version,
}

/// Parse HTTP Request line.
///
/// `request-line = method SP request-target SP HTTP-version CRLF`
///
/// Only a single SP separator is accepted. The request target is not interpreted, it is only
/// checked for control bytes and against `max_uri_len`.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#request.line)
pub(crate) fn parse_request_line(
    cursor: &mut Cursor<'_>,
    max_uri_len: usize,
    phase: &mut Phase,
) -> ParseResult<RequestLine, ParseError> {
    *phase = Phase::Method;

    // The method token is case-sensitive
    // Though this library only support standardized methods

    let method = {
        let bytes = cursor.as_bytes();
        let window = &bytes[..bytes.len().min(Method::MAX_LEN + 1)];

        let Some(len) = window.iter().position(|byte| !byte.is_ascii_uppercase()) else {
            if window.len() > Method::MAX_LEN {
                return err!(InvalidMethod);
            }
            return ParseResult::Pending;
        };

        if window[len] != b' ' {
            return err!(InvalidMethod);
        }

        let Some(method) = Method::from_bytes(&window[..len]) else {
            return err!(InvalidMethod);
        };

        cursor.advance(len + 1);
        method
    };

    *phase = Phase::Message;

    let uri = {
        let start = cursor.offset();
        let bytes = cursor.as_bytes();
        let window = &bytes[..bytes.len().min(max_uri_len.saturating_add(1))];

        let Some(len) = window.iter().position(|&byte| !matches::is_uri(byte)) else {
            if window.len() > max_uri_len {
                warning!("request target exceeds {max_uri_len} bytes");
                return err!(UriTooLong);
            }
            return ParseResult::Pending;
        };

        match window[len] {
            b' ' if len == 0 => return err!(InvalidUri),
            b' ' => {}
            // line ended before any version
            b'\r' | b'\n' => return err!(InvalidVersion),
            _ => return err!(InvalidUri),
        }

        cursor.advance(len + 1);
        span(start, len)
    };

    *phase = Phase::Version;

    let version = tri!(parse_version(cursor));
    tri!(parse_crlf(cursor, ParseError::InvalidVersion));

    ParseResult::Ok(RequestLine {
        method,
        uri,
        version,
    })
}
