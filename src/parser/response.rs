use std::ops::Range;

use super::{Cursor, ParseError, Phase, err, parse_crlf, parse_version, ready, span, tri};
use crate::common::ParseResult;
use crate::http::{StatusCode, Version};
use crate::matches;

/// Scanned status line.
#[derive(Debug)]
pub(crate) struct StatusLine {
    pub version: Version,
    pub status: StatusCode,
    pub reason: Range<usize>,
}

/// Parse HTTP Status line.
///
/// `status-line = HTTP-version SP status-code SP [ reason-phrase ] CRLF`
///
/// A status line without the second SP, e.g: `HTTP/1.1 204\r\n`, is accepted with an empty
/// reason. The reason is reported as is, surrounding whitespace included.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#status.line)
pub(crate) fn parse_status_line(
    cursor: &mut Cursor<'_>,
    phase: &mut Phase,
) -> ParseResult<StatusLine, ParseError> {
    *phase = Phase::Version;

    let version = tri!(parse_version(cursor));

    match ready!(cursor.peek()) {
        b' ' => cursor.advance(1),
        b'\r' | b'\n' => return err!(InvalidStatus),
        _ => return err!(InvalidVersion),
    }

    *phase = Phase::Status;

    let status = {
        // status-code = 3DIGIT
        for nth in 0..3 {
            let byte = ready!(cursor.peek_at(nth));
            let valid = match nth {
                0 => matches!(byte, b'1'..=b'9'),
                _ => byte.is_ascii_digit(),
            };
            if !valid {
                return err!(InvalidStatus);
            }
        }

        match StatusCode::from_digits(ready!(cursor.next_chunk::<3>())) {
            Some(ok) => ok,
            None => return err!(InvalidStatus),
        }
    };

    *phase = Phase::Message;

    let reason = match ready!(cursor.peek()) {
        b' ' => {
            cursor.advance(1);
            let start = cursor.offset();
            let Some(len) = cursor.as_bytes().iter().position(|&byte| !matches::is_reason(byte)) else {
                return ParseResult::Pending;
            };
            cursor.advance(len);
            span(start, len)
        }
        b'\r' | b'\n' => span(cursor.offset(), 0),
        _ => return err!(InvalidStatus),
    };

    tri!(parse_crlf(cursor, ParseError::InvalidSeparator));

    ParseResult::Ok(StatusLine {
        version,
        status,
        reason,
    })
}
