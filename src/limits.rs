//! Parser limits.
use std::collections::TryReserveError;

/// Default maximum request target length.
pub const DEFAULT_MAX_URI_LEN: u16 = 3072;
/// Default maximum header block length.
pub const DEFAULT_MAX_HEADER_BLOCK_LEN: u16 = 4352;
/// Default maximum header count.
pub const DEFAULT_MAX_HEADERS: u8 = 20;

/// Parser limits.
///
/// Limits bound the work of a single parse call: the scan is linear in the buffer length and
/// stops as soon as any limit is exceeded. They are fixed when a [`Parser`] is created.
///
/// [`Parser`]: crate::Parser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Maximum length of the request target, in octets.
    ///
    /// Only applies to requests.
    pub max_uri_len: u16,
    /// Maximum length of the header block, in octets.
    ///
    /// Every header line counts with its CRLF, the empty line ending the block does not.
    pub max_header_block_len: u16,
    /// Maximum number of header lines.
    ///
    /// This is also the number of header slots the parser reserves up front.
    pub max_headers: u8,
}

impl Limits {
    /// Creates [`Limits`] with default values.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_uri_len: DEFAULT_MAX_URI_LEN,
            max_header_block_len: DEFAULT_MAX_HEADER_BLOCK_LEN,
            max_headers: DEFAULT_MAX_HEADERS,
        }
    }

    /// Creates [`Limits`] from untyped values.
    ///
    /// Returns an error if `max_uri_len` or `max_header_block_len` exceeds [`u16::MAX`], or if
    /// `max_headers` exceeds [`u8::MAX`].
    pub fn try_from_usize(
        max_uri_len: usize,
        max_header_block_len: usize,
        max_headers: usize,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            max_uri_len: u16::try_from(max_uri_len).map_err(|_| BuildError::UriLimit(max_uri_len))?,
            max_header_block_len: u16::try_from(max_header_block_len)
                .map_err(|_| BuildError::HeaderBlockLimit(max_header_block_len))?,
            max_headers: u8::try_from(max_headers).map_err(|_| BuildError::HeaderCount(max_headers))?,
        })
    }

    /// Set the maximum request target length.
    #[inline]
    pub const fn max_uri_len(mut self, value: u16) -> Self {
        self.max_uri_len = value;
        self
    }

    /// Set the maximum header block length.
    #[inline]
    pub const fn max_header_block_len(mut self, value: u16) -> Self {
        self.max_header_block_len = value;
        self
    }

    /// Set the maximum number of headers.
    #[inline]
    pub const fn max_headers(mut self, value: u8) -> Self {
        self.max_headers = value;
        self
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// ===== Error =====

/// An error that can occur when creating a [`Parser`].
///
/// [`Parser`]: crate::Parser
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Maximum request target length does not fit in 16 bits.
    UriLimit(usize),
    /// Maximum header block length does not fit in 16 bits.
    HeaderBlockLimit(usize),
    /// Maximum header count does not fit in 8 bits.
    HeaderCount(usize),
    /// Header table storage could not be reserved.
    Allocation(TryReserveError),
}

impl From<TryReserveError> for BuildError {
    #[inline]
    fn from(value: TryReserveError) -> Self {
        Self::Allocation(value)
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UriLimit(n) => write!(f, "max uri length must not exceed {}, got {n}", u16::MAX),
            Self::HeaderBlockLimit(n) => {
                write!(f, "max header block length must not exceed {}, got {n}", u16::MAX)
            }
            Self::HeaderCount(n) => write!(f, "max header count must not exceed {}, got {n}", u8::MAX),
            Self::Allocation(err) => write!(f, "failed to allocate header table: {err}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_limits_default() {
        let limits = Limits::default();
        assert_eq!(limits.max_uri_len, 3072);
        assert_eq!(limits.max_header_block_len, 4352);
        assert_eq!(limits.max_headers, 20);
        assert_eq!(limits, Limits::new());
    }

    #[test]
    fn test_limits_range() {
        let limits = Limits::try_from_usize(65535, 65535, 255).unwrap();
        assert_eq!(limits.max_uri_len, u16::MAX);
        assert_eq!(limits.max_header_block_len, u16::MAX);
        assert_eq!(limits.max_headers, u8::MAX);

        assert_eq!(Limits::try_from_usize(65536, 0, 0), Err(BuildError::UriLimit(65536)));
        assert_eq!(Limits::try_from_usize(0, 65536, 0), Err(BuildError::HeaderBlockLimit(65536)));
        assert_eq!(Limits::try_from_usize(0, 0, 256), Err(BuildError::HeaderCount(256)));

        let err = Limits::try_from_usize(0, 0, 256).unwrap_err();
        assert_eq!(err.to_string(), "max header count must not exceed 255, got 256");
    }

    #[test]
    fn test_limits_setters() {
        let limits = Limits::new().max_uri_len(8).max_header_block_len(16).max_headers(1);
        assert_eq!(limits, Limits { max_uri_len: 8, max_header_block_len: 16, max_headers: 1 });
    }
}
