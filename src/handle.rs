//! Reusable parser handle.
use bytes::Bytes;
use std::ops::Range;

use crate::common::ParseResult;
use crate::http::{Method, StatusCode, Version};
use crate::limits::{BuildError, Limits};
use crate::log::{debug, trace};
use crate::parser::{self, Cursor, Header, HeaderRange, ParseError, Phase};

macro_rules! tri {
    ($me:ident, $e:expr) => {
        match $e {
            ParseResult::Ok(ok) => ok,
            ParseResult::Pending => return $me.pending(),
            ParseResult::Err(err) => return $me.fail(err),
        }
    };
}

/// HTTP/1 message head parser.
///
/// A [`Parser`] owns a header table of fixed capacity and the [`Limits`] it was created with. It
/// is created once and reused for many messages, parsing never allocates.
///
/// # Incremental parsing
///
/// Every parse call scans the given buffer from its first byte. When the buffer ends before the
/// message head is complete, [`ParseResult::Pending`] is returned and nothing is reported. The
/// caller appends more bytes to the same buffer and parses again.
///
/// ```
/// use h1parse::{Parser, ParseResult};
///
/// let mut parser = Parser::new();
/// let mut buf = b"GET /index.html HTTP/1.1\r\nHost: exa".to_vec();
///
/// assert!(parser.parse_request(&buf).is_pending());
///
/// buf.extend_from_slice(b"mple.com\r\n\r\n");
///
/// let ParseResult::Ok(req) = parser.parse_request(&buf) else {
///     unreachable!()
/// };
/// assert_eq!(req.uri(), b"/index.html");
/// assert_eq!(req.header(0).unwrap().value, b"example.com");
/// ```
///
/// # Results
///
/// A successful parse returns a view that borrows both the parser and the buffer, so header
/// slices can not outlive the buffer they point into. The same results are also available from
/// the parser itself as offsets, see [`Parser::header_at`], for callers that manage the buffer
/// on their own. Offsets are only meaningful for the buffer of the last successful call.
///
/// A single parser is not meant to be shared between concurrent parses, use one parser per
/// connection or task.
#[derive(Debug)]
pub struct Parser {
    limits: Limits,
    headers: Vec<HeaderRange>,
    phase: Phase,
    method: Option<Method>,
    version: Option<Version>,
    status: Option<StatusCode>,
    message: Range<usize>,
}

impl Parser {
    /// Creates new [`Parser`] with default [`Limits`].
    #[inline]
    pub fn new() -> Self {
        Self::with_limits(Limits::new())
    }

    /// Creates new [`Parser`] with given [`Limits`].
    ///
    /// # Panics
    ///
    /// Panics if the header table allocation fails, see [`Parser::try_with_limits`].
    pub fn with_limits(limits: Limits) -> Self {
        Self::from_parts(limits, Vec::with_capacity(limits.max_headers.into()))
    }

    /// Creates new [`Parser`] with given [`Limits`], returning an error if the header table can not
    /// be allocated.
    pub fn try_with_limits(limits: Limits) -> Result<Self, BuildError> {
        let mut headers = Vec::new();
        headers.try_reserve_exact(limits.max_headers.into())?;
        Ok(Self::from_parts(limits, headers))
    }

    fn from_parts(limits: Limits, headers: Vec<HeaderRange>) -> Self {
        Self {
            limits,
            headers,
            phase: Phase::Start,
            method: None,
            version: None,
            status: None,
            message: 0..0,
        }
    }

    /// Returns the limits this parser was created with.
    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the number of header slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.limits.max_headers.into()
    }

    /// Discard the results of the previous parse.
    ///
    /// This does not deallocate the header table.
    pub fn reset(&mut self) {
        self.headers.clear();
        self.phase = Phase::Start;
        self.method = None;
        self.version = None;
        self.status = None;
        self.message = 0..0;
    }

    /// Returns `true` if the last parse call succeeded.
    #[inline]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Returns the error of the last parse call, if it failed.
    #[inline]
    pub fn error(&self) -> Option<ParseError> {
        match self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Returns where the last parse call stopped.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ===== Parsing =====

    /// Parse HTTP request head.
    ///
    /// `request-line *( field-line CRLF ) CRLF`
    ///
    /// The request target must not exceed [`Limits::max_uri_len`], the header block must not
    /// exceed [`Limits::max_header_block_len`] and [`Limits::max_headers`].
    pub fn parse_request<'b>(&mut self, buf: &'b [u8]) -> ParseResult<Request<'_, 'b>, ParseError> {
        self.reset();

        let mut cursor = Cursor::new(buf);

        let reqline = tri!(self, parser::parse_request_line(
            &mut cursor,
            self.limits.max_uri_len.into(),
            &mut self.phase,
        ));

        tri!(self, self.parse_headers(&mut cursor));

        self.phase = Phase::Done;
        self.method = Some(reqline.method);
        self.version = Some(reqline.version);
        self.message = reqline.uri.clone();

        trace!(
            "request {} with {} headers in {} bytes",
            reqline.method,
            self.headers.len(),
            cursor.offset(),
        );

        ParseResult::Ok(Request {
            parser: self,
            buf,
            method: reqline.method,
            version: reqline.version,
            uri: reqline.uri,
            len: cursor.offset(),
        })
    }

    /// Parse HTTP response head.
    ///
    /// `status-line *( field-line CRLF ) CRLF`
    ///
    /// The header block must not exceed [`Limits::max_header_block_len`] and
    /// [`Limits::max_headers`].
    pub fn parse_response<'b>(&mut self, buf: &'b [u8]) -> ParseResult<Response<'_, 'b>, ParseError> {
        self.reset();

        let mut cursor = Cursor::new(buf);

        let status_line = tri!(self, parser::parse_status_line(&mut cursor, &mut self.phase));

        tri!(self, self.parse_headers(&mut cursor));

        self.phase = Phase::Done;
        self.version = Some(status_line.version);
        self.status = Some(status_line.status);
        self.message = status_line.reason.clone();

        trace!(
            "response {} with {} headers in {} bytes",
            status_line.status,
            self.headers.len(),
            cursor.offset(),
        );

        ParseResult::Ok(Response {
            parser: self,
            buf,
            version: status_line.version,
            status: status_line.status,
            reason: status_line.reason,
            len: cursor.offset(),
        })
    }

    /// Parse HTTP request head from shared [`Bytes`].
    ///
    /// The returned fields share the allocation of `buf`, nothing is copied.
    pub fn parse_request_bytes(&mut self, buf: &Bytes) -> ParseResult<RequestBuf, ParseError> {
        self.parse_request(buf).map(|req| req.to_buf(buf))
    }

    /// Parse HTTP response head from shared [`Bytes`].
    ///
    /// The returned fields share the allocation of `buf`, nothing is copied.
    pub fn parse_response_bytes(&mut self, buf: &Bytes) -> ParseResult<ResponseBuf, ParseError> {
        self.parse_response(buf).map(|res| res.to_buf(buf))
    }

    fn parse_headers(&mut self, cursor: &mut Cursor<'_>) -> ParseResult<(), ParseError> {
        self.phase = Phase::Headers;
        parser::parse_headers(
            cursor,
            &mut self.headers,
            self.limits.max_headers.into(),
            self.limits.max_header_block_len.into(),
        )
    }

    fn pending<T>(&self) -> ParseResult<T, ParseError> {
        trace!("incomplete message head, stopped at {:?}", self.phase);
        ParseResult::Pending
    }

    fn fail<T>(&mut self, err: ParseError) -> ParseResult<T, ParseError> {
        debug!("rejected message head at {:?}: {err}", self.phase);
        self.phase = Phase::Failed(err);
        self.headers.clear();
        ParseResult::Err(err)
    }

    // ===== Accessors =====

    /// Returns the request method of the last successful [`parse_request`].
    ///
    /// [`parse_request`]: Parser::parse_request
    #[inline]
    pub fn method(&self) -> Option<Method> {
        self.method.filter(|_| self.is_complete())
    }

    /// Returns the version of the last successful parse.
    #[inline]
    pub fn version(&self) -> Option<Version> {
        self.version.filter(|_| self.is_complete())
    }

    /// Returns the status code of the last successful [`parse_response`].
    ///
    /// [`parse_response`]: Parser::parse_response
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        self.status.filter(|_| self.is_complete())
    }

    /// Returns the position of the request target, or the reason phrase, of the last successful
    /// parse.
    #[inline]
    pub fn message_range(&self) -> Option<Range<usize>> {
        self.is_complete().then(|| self.message.clone())
    }

    /// Returns the number of headers of the last successful parse.
    #[inline]
    pub fn header_count(&self) -> usize {
        self.header_ranges().len()
    }

    /// Returns the header positions of the last successful parse, in input order.
    #[inline]
    pub fn header_ranges(&self) -> &[HeaderRange] {
        match self.phase {
            Phase::Done => &self.headers,
            _ => &[],
        }
    }

    /// Returns the position of the header at `index`.
    ///
    /// The offsets are only meaningful for the buffer given to the last successful parse, keeping
    /// that buffer alive and unchanged is up to the caller.
    pub fn header_at(&self, index: usize) -> Result<HeaderRange, OutOfRange> {
        let headers = self.header_ranges();
        headers.get(index).cloned().ok_or(OutOfRange {
            index,
            len: headers.len(),
        })
    }
}

impl Default for Parser {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// ===== Request =====

/// Parsed request head.
///
/// Borrows the [`Parser`] and the parsed buffer.
#[derive(Debug)]
pub struct Request<'p, 'b> {
    parser: &'p Parser,
    buf: &'b [u8],
    method: Method,
    version: Version,
    uri: Range<usize>,
    len: usize,
}

impl<'p, 'b> Request<'p, 'b> {
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the request target as written, no decoding is performed.
    #[inline]
    pub fn uri(&self) -> &'b [u8] {
        &self.buf[self.uri.clone()]
    }

    /// Returns the request target position.
    #[inline]
    pub fn uri_range(&self) -> Range<usize> {
        self.uri.clone()
    }

    /// Returns the length of the message head, including the final empty line.
    ///
    /// Bytes after this offset are not part of the head.
    #[inline]
    pub fn head_len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn header_count(&self) -> usize {
        self.parser.headers.len()
    }

    /// Returns the header at `index`, in input order.
    #[inline]
    pub fn header(&self, index: usize) -> Option<Header<'b>> {
        let buf = self.buf;
        self.parser.headers.get(index).map(|range| range.slice_of(buf))
    }

    /// Returns the value of the first header named `name`, ignoring ASCII case.
    pub fn header_value(&self, name: &str) -> Option<&'b [u8]> {
        self.headers().find(|header| header.is(name)).map(|header| header.value)
    }

    /// Returns an iterator over headers, in input order.
    #[inline]
    pub fn headers(&self) -> Headers<'p, 'b> {
        Headers::new(&self.parser.headers, self.buf)
    }

    /// Returns the header positions, in input order.
    #[inline]
    pub fn header_ranges(&self) -> &'p [HeaderRange] {
        &self.parser.headers
    }

    /// Convert into [`RequestBuf`] sharing the allocation of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the parsed buffer.
    pub fn to_buf(&self, bytes: &Bytes) -> RequestBuf {
        RequestBuf {
            method: self.method,
            version: self.version,
            uri: bytes.slice(self.uri.clone()),
            headers: HeaderBuf::collect(&self.parser.headers, bytes),
            head_len: self.len,
        }
    }
}

// ===== Response =====

/// Parsed response head.
///
/// Borrows the [`Parser`] and the parsed buffer.
#[derive(Debug)]
pub struct Response<'p, 'b> {
    parser: &'p Parser,
    buf: &'b [u8],
    version: Version,
    status: StatusCode,
    reason: Range<usize>,
    len: usize,
}

impl<'p, 'b> Response<'p, 'b> {
    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the reason phrase, which may be empty.
    #[inline]
    pub fn reason(&self) -> &'b [u8] {
        &self.buf[self.reason.clone()]
    }

    /// Returns the reason phrase position.
    #[inline]
    pub fn reason_range(&self) -> Range<usize> {
        self.reason.clone()
    }

    /// Returns the length of the message head, including the final empty line.
    #[inline]
    pub fn head_len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn header_count(&self) -> usize {
        self.parser.headers.len()
    }

    /// Returns the header at `index`, in input order.
    #[inline]
    pub fn header(&self, index: usize) -> Option<Header<'b>> {
        let buf = self.buf;
        self.parser.headers.get(index).map(|range| range.slice_of(buf))
    }

    /// Returns the value of the first header named `name`, ignoring ASCII case.
    pub fn header_value(&self, name: &str) -> Option<&'b [u8]> {
        self.headers().find(|header| header.is(name)).map(|header| header.value)
    }

    /// Returns an iterator over headers, in input order.
    #[inline]
    pub fn headers(&self) -> Headers<'p, 'b> {
        Headers::new(&self.parser.headers, self.buf)
    }

    /// Returns the header positions, in input order.
    #[inline]
    pub fn header_ranges(&self) -> &'p [HeaderRange] {
        &self.parser.headers
    }

    /// Convert into [`ResponseBuf`] sharing the allocation of `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than the parsed buffer.
    pub fn to_buf(&self, bytes: &Bytes) -> ResponseBuf {
        ResponseBuf {
            version: self.version,
            status: self.status,
            reason: bytes.slice(self.reason.clone()),
            headers: HeaderBuf::collect(&self.parser.headers, bytes),
            head_len: self.len,
        }
    }
}

// ===== Headers =====

/// Iterator over parsed headers, in input order.
#[derive(Debug, Clone)]
pub struct Headers<'p, 'b> {
    iter: std::slice::Iter<'p, HeaderRange>,
    buf: &'b [u8],
}

impl<'p, 'b> Headers<'p, 'b> {
    fn new(headers: &'p [HeaderRange], buf: &'b [u8]) -> Self {
        Self {
            iter: headers.iter(),
            buf,
        }
    }
}

impl<'b> Iterator for Headers<'_, 'b> {
    type Item = Header<'b>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|range| range.slice_of(self.buf))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Headers<'_, '_> {}

// ===== Owned =====

/// Header field sharing the allocation of the parsed [`Bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBuf {
    pub name: Bytes,
    pub value: Bytes,
}

impl HeaderBuf {
    fn collect(headers: &[HeaderRange], bytes: &Bytes) -> Vec<HeaderBuf> {
        headers
            .iter()
            .map(|range| HeaderBuf {
                name: range.resolve_name(bytes),
                value: range.resolve_value(bytes),
            })
            .collect()
    }
}

/// Request head sharing the allocation of the parsed [`Bytes`].
///
/// Unlike [`Request`], this does not borrow the parser.
#[derive(Debug, Clone)]
pub struct RequestBuf {
    pub method: Method,
    pub version: Version,
    pub uri: Bytes,
    pub headers: Vec<HeaderBuf>,
    /// Length of the message head, including the final empty line.
    pub head_len: usize,
}

/// Response head sharing the allocation of the parsed [`Bytes`].
///
/// Unlike [`Response`], this does not borrow the parser.
#[derive(Debug, Clone)]
pub struct ResponseBuf {
    pub version: Version,
    pub status: StatusCode,
    pub reason: Bytes,
    pub headers: Vec<HeaderBuf>,
    /// Length of the message head, including the final empty line.
    pub head_len: usize,
}

// ===== Error =====

/// Header index is not less than the header count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "header index {} out of range for {} headers", self.index, self.len)
    }
}
