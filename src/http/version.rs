use crate::code;

/// HTTP Version.
///
/// Only the HTTP/1.x family and HTTP/0.9 are recognized, other protocol versions never appear in
/// an HTTP/1 start line.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version(Inner);

#[derive(PartialEq, PartialOrd, Copy, Clone, Eq, Ord, Hash)]
enum Inner {
    Http09,
    Http10,
    Http11,
}

const LITERALS: [&[u8; Version::LEN]; 3] = [b"HTTP/0.9", b"HTTP/1.0", b"HTTP/1.1"];

impl Version {
    /// `HTTP/0.9`
    pub const HTTP_09: Version = Version(Inner::Http09);

    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version(Inner::Http10);

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// Length of the version literal, e.g: `HTTP/1.1`.
    pub(crate) const LEN: usize = 8;

    /// Create [`Version`] from its literal representation.
    #[inline]
    pub const fn from_bytes(src: &[u8]) -> Option<Version> {
        match src {
            b"HTTP/0.9" => Some(Self::HTTP_09),
            b"HTTP/1.0" => Some(Self::HTTP_10),
            b"HTTP/1.1" => Some(Self::HTTP_11),
            _ => None,
        }
    }

    /// Returns `true` if `src` can still be completed into a recognized version literal.
    pub(crate) fn is_prefix(src: &[u8]) -> bool {
        LITERALS.iter().any(|lit| lit.starts_with(src))
    }

    /// Returns the numeric version code, one of the `code::V*` constants.
    #[inline]
    pub const fn code(&self) -> u8 {
        match self.0 {
            Inner::Http09 => code::V09,
            Inner::Http10 => code::V10,
            Inner::Http11 => code::V11,
        }
    }

    /// Create [`Version`] from its numeric code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Version> {
        match code {
            code::V09 => Some(Self::HTTP_09),
            code::V10 => Some(Self::HTTP_10),
            code::V11 => Some(Self::HTTP_11),
            _ => None,
        }
    }

    /// Returns string representation of HTTP version, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http09 => "HTTP/0.9",
            Inner::Http10 => "HTTP/1.0",
            Inner::Http11 => "HTTP/1.1",
        }
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_version_literal() {
        assert_eq!(Version::from_bytes(b"HTTP/0.9"), Some(Version::HTTP_09));
        assert_eq!(Version::from_bytes(b"HTTP/1.0"), Some(Version::HTTP_10));
        assert_eq!(Version::from_bytes(b"HTTP/1.1"), Some(Version::HTTP_11));
        assert_eq!(Version::from_bytes(b"HTTP/2.0"), None);
        assert_eq!(Version::from_bytes(b"http/1.1"), None);
        assert_eq!(Version::HTTP_10.to_string(), "HTTP/1.0");
    }

    #[test]
    fn test_version_prefix() {
        assert!(Version::is_prefix(b""));
        assert!(Version::is_prefix(b"HT"));
        assert!(Version::is_prefix(b"HTTP/1."));
        assert!(Version::is_prefix(b"HTTP/0.9"));
        assert!(!Version::is_prefix(b"HTTX"));
        assert!(!Version::is_prefix(b"HTTP/2"));
        assert!(!Version::is_prefix(b"HTTP/1.2"));
        assert!(!Version::is_prefix(b"HTTP/1.1 "));
    }

    #[test]
    fn test_version_codes() {
        for version in [Version::HTTP_09, Version::HTTP_10, Version::HTTP_11] {
            assert_eq!(Version::from_code(version.code()), Some(version));
        }
        assert_eq!(Version::HTTP_11.code(), code::V11);
        assert_eq!(Version::from_code(0), None);
        assert!(Version::HTTP_09 < Version::HTTP_11);
    }
}
