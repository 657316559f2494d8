use std::task::Poll;

use crate::code;
use crate::parser::ParseError;

/// Outcome of a single parse call.
///
/// `Pending` is not an error, it is a request for more input: the caller appends more bytes to
/// the same buffer and parses again from the start.
#[derive(Debug)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the parse result is [`Ok`].
    ///
    /// [`Ok`]: ParseResult::Ok
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    /// Returns `true` if the parse result is [`Err`].
    ///
    /// [`Err`]: ParseResult::Err
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(..))
    }

    /// Maps the success value, leaving `Pending` and `Err` untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseResult<U, E> {
        match self {
            ParseResult::Pending => ParseResult::Pending,
            ParseResult::Ok(ok) => ParseResult::Ok(f(ok)),
            ParseResult::Err(err) => ParseResult::Err(err),
        }
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            ParseResult::Ok(ok) => Some(ok),
            _ => None,
        }
    }

    /// Returns the error, if any.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            ParseResult::Err(err) => Some(err),
            _ => None,
        }
    }

    /// Convert to [`Poll<Result<T, E>>`].
    #[inline]
    pub fn into_poll_result(self) -> Poll<Result<T, E>> {
        match self {
            ParseResult::Pending => Poll::Pending,
            ParseResult::Ok(ok) => Poll::Ready(Ok(ok)),
            ParseResult::Err(err) => Poll::Ready(Err(err)),
        }
    }
}

impl<T> ParseResult<T, ParseError> {
    /// Returns the numeric outcome code, see [`code`].
    ///
    /// [`code`]: crate::code
    #[inline]
    pub const fn code(&self) -> i32 {
        match self {
            ParseResult::Pending => code::INCOMPLETE,
            ParseResult::Ok(_) => code::SUCCESS,
            ParseResult::Err(err) => err.code(),
        }
    }
}
