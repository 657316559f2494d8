use bytes::Bytes;
use std::ops::Range;

use super::{Cursor, ParseError, err, parse_crlf, ready, span};
use crate::common::ParseResult;
use crate::log::warning;
use crate::matches;

// ===== Header =====

/// Header field borrowed from the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Header name, as written.
    pub name: &'a [u8],
    /// Header value, without surrounding whitespace.
    pub value: &'a [u8],
}

impl<'a> Header<'a> {
    /// Returns `true` if the header name equals `name`, ignoring ASCII case.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.as_bytes())
    }

    /// Returns the header name as `str`, if it is valid UTF-8.
    #[inline]
    pub fn name_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.name).ok()
    }

    /// Returns the header value as `str`, if it is valid UTF-8.
    #[inline]
    pub fn value_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }
}

// ===== HeaderRange =====

/// Header field position within the parsed buffer.
///
/// Ranges are only meaningful for the exact buffer that was parsed. Resolving them against any
/// other buffer returns unrelated bytes, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderRange {
    name: Range<usize>,
    value: Range<usize>,
}

impl HeaderRange {
    /// Offset of the header name.
    #[inline]
    pub fn key_offset(&self) -> usize {
        self.name.start
    }

    /// Length of the header name.
    #[inline]
    pub fn key_len(&self) -> usize {
        self.name.len()
    }

    /// Offset of the header value.
    #[inline]
    pub fn value_offset(&self) -> usize {
        self.value.start
    }

    /// Length of the header value.
    #[inline]
    pub fn value_len(&self) -> usize {
        self.value.len()
    }

    /// Returns the name range.
    #[inline]
    pub fn name(&self) -> Range<usize> {
        self.name.clone()
    }

    /// Returns the value range.
    #[inline]
    pub fn value(&self) -> Range<usize> {
        self.value.clone()
    }

    /// Returns `(key_offset, key_len, value_offset, value_len)`.
    #[inline]
    pub fn to_tuple(&self) -> (usize, usize, usize, usize) {
        (self.key_offset(), self.key_len(), self.value_offset(), self.value_len())
    }

    /// Resolve the range with given `buf` to [`Header`].
    ///
    /// Returns `None` if the range does not fit in `buf`.
    pub fn resolve<'b>(&self, buf: &'b [u8]) -> Option<Header<'b>> {
        Some(Header {
            name: buf.get(self.name.clone())?,
            value: buf.get(self.value.clone())?,
        })
    }

    /// Returns the header name from given `bytes`, sharing its allocation.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the parsed buffer.
    pub fn resolve_name(&self, bytes: &Bytes) -> Bytes {
        bytes.slice(self.name.clone())
    }

    /// Returns the header value from given `bytes`, sharing its allocation.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the parsed buffer.
    pub fn resolve_value(&self, bytes: &Bytes) -> Bytes {
        bytes.slice(self.value.clone())
    }

    /// Resolve against the buffer that produced this range.
    #[inline]
    pub(crate) fn slice_of<'b>(&self, buf: &'b [u8]) -> Header<'b> {
        Header {
            name: &buf[self.name.clone()],
            value: &buf[self.value.clone()],
        }
    }
}

// ===== Parsing =====

/// Parse header lines up to and including the empty line.
///
/// `field-line = field-name ":" OWS field-value OWS CRLF`
///
/// Each header is appended to `headers` in input order, duplicates included. The field name is
/// only required to be non-empty, values are trimmed of surrounding OWS.
///
/// The header block length counts every header line including its CRLF, the final empty line
/// excluded. It is checked while scanning, so the limit also bounds the work done on a line that
/// never ends.
pub(crate) fn parse_headers(
    cursor: &mut Cursor<'_>,
    headers: &mut Vec<HeaderRange>,
    max_headers: usize,
    max_block_len: usize,
) -> ParseResult<(), ParseError> {
    let block_start = cursor.offset();

    loop {
        match ready!(cursor.peek()) {
            b'\r' => return parse_crlf(cursor, ParseError::InvalidSeparator),
            b'\n' => return err!(InvalidSeparator),
            _ => {}
        }

        if headers.len() >= max_headers {
            warning!("header count exceeds {max_headers}");
            return err!(TooManyHeaders);
        }

        let line_start = cursor.offset();
        let bytes = cursor.as_bytes();

        let Some(end) = matches::find_line_end(bytes) else {
            if cursor.len() - block_start > max_block_len {
                warning!("header block exceeds {max_block_len} bytes");
                return err!(HeaderBlockTooLong);
            }
            return ParseResult::Pending;
        };

        if bytes[end] == b'\n' {
            return err!(InvalidSeparator);
        }

        if line_start + end + 2 - block_start > max_block_len {
            warning!("header block exceeds {max_block_len} bytes");
            return err!(HeaderBlockTooLong);
        }

        match bytes.get(end + 1) {
            Some(b'\n') => {}
            Some(_) => return err!(InvalidSeparator),
            None => return ParseResult::Pending,
        }

        let line = &bytes[..end];

        let colon = match line.iter().position(|&byte| byte == b':') {
            Some(0) | None => return err!(MalformedHeader),
            Some(colon) => colon,
        };

        let value = &line[colon + 1..];
        let leading = value.iter().take_while(|&&byte| matches::is_ows(byte)).count();
        let trailing = value[leading..]
            .iter()
            .rev()
            .take_while(|&&byte| matches::is_ows(byte))
            .count();

        headers.push(HeaderRange {
            name: span(line_start, colon),
            value: span(line_start + colon + 1 + leading, value.len() - leading - trailing),
        });

        cursor.advance(end + 2);
    }
}
