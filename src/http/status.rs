use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// Any three digit code from `100` to `999` is accepted, unregistered codes included.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(NonZeroU16);

impl StatusCode {
    /// `200`. The request succeeded.
    pub const OK: Self = Self(NonZeroU16::new(200).unwrap());
    /// `404`. The server cannot find the requested resource.
    pub const NOT_FOUND: Self = Self(NonZeroU16::new(404).unwrap());

    /// Create [`StatusCode`] from its numeric value.
    #[inline]
    pub const fn from_u16(code: u16) -> Option<Self> {
        match code {
            100..=999 => match NonZeroU16::new(code) {
                Some(ok) => Some(Self(ok)),
                None => None,
            },
            _ => None,
        }
    }

    /// Create [`StatusCode`] from three ASCII digits, e.g: `b"404"`.
    #[inline]
    pub const fn from_digits(src: &[u8; 3]) -> Option<Self> {
        let [a @ b'1'..=b'9', b @ b'0'..=b'9', c @ b'0'..=b'9'] = *src else {
            return None;
        };
        let code = (a - b'0') as u16 * 100 + (b - b'0') as u16 * 10 + (c - b'0') as u16;
        Self::from_u16(code)
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn status(&self) -> u16 {
        self.0.get()
    }

    /// Returns `true` for `1xx` codes.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.0.get(), 100..=199)
    }

    /// Returns `true` for `2xx` codes.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0.get(), 200..=299)
    }

    /// Returns `true` for `3xx` codes.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0.get(), 300..=399)
    }

    /// Returns `true` for `4xx` codes.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0.get(), 400..=499)
    }

    /// Returns `true` for `5xx` codes.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0.get(), 500..=599)
    }
}

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(value: StatusCode) -> Self {
        value.status()
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0.get()))
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
