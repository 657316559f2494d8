//! Zero-copy HTTP/1 message head parser.
//!
//! Parses the request line or status line and the header block of an HTTP/1.x message, without
//! copying the input. A [`Parser`] is created once with its [`Limits`] and reused for many
//! messages.
//!
//! ```
//! use h1parse::{Method, Parser, ParseResult, Version};
//!
//! let mut parser = Parser::new();
//! let buf = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! let ParseResult::Ok(req) = parser.parse_request(buf) else {
//!     unreachable!()
//! };
//! assert_eq!(req.method(), Method::GET);
//! assert_eq!(req.version(), Version::HTTP_11);
//! assert_eq!(req.uri(), b"/index.html");
//! assert_eq!(req.header_value("host"), Some(&b"example.com"[..]));
//! ```
//!
//! Log output is available with the `log` feature.
#![warn(missing_debug_implementations)]

mod log;
mod common;
mod matches;

pub mod code;
pub mod http;
mod limits;
mod parser;
mod handle;

pub use common::ParseResult;
pub use http::{Method, StatusCode, Version};
pub use limits::{
    BuildError, DEFAULT_MAX_HEADERS, DEFAULT_MAX_HEADER_BLOCK_LEN, DEFAULT_MAX_URI_LEN, Limits,
};
pub use parser::{Header, HeaderRange, ParseError, Phase};
pub use handle::{
    HeaderBuf, Headers, OutOfRange, Parser, Request, RequestBuf, Response, ResponseBuf,
};
