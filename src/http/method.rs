use crate::code;

/// HTTP Method.
///
/// This API follows the [RFC9110] methods. Arbitrary method, and `PATCH`, is not supported: the
/// set of recognized methods is closed, and every method maps to one of the [`code`] constants.
///
/// [RFC9110]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-methods>
/// [`code`]: crate::code
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method(u8);

#[derive(Clone, Copy)]
struct Props {
    safe: bool,
    idem: bool,
    value: &'static [u8],
}

props! {
    const PROPS: [8];

    /// The [GET] method requests transfer of a current [selected representation][sr] for the
    /// [target resource][tr].
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    /// [sr]: <https://www.rfc-editor.org/rfc/rfc9110.html#selected.representation>
    /// [tr]: <https://www.rfc-editor.org/rfc/rfc9110.html#target.resource>
    pub const GET = (code::M_GET, b"GET", safe, idem);
    /// The [HEAD] method is identical to GET except that the server MUST NOT send content in the
    /// response.
    ///
    /// [HEAD]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-head>
    pub const HEAD = (code::M_HEAD, b"HEAD", safe, idem);
    /// The [POST] method requests that the [target resource][tr] process the representation
    /// enclosed in the request according to the resource's own specific semantics.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    /// [tr]: <https://www.rfc-editor.org/rfc/rfc9110.html#target.resource>
    pub const POST = (code::M_POST, b"POST", , );
    /// The [PUT] method requests that the state of the [target resource][tr] be created or
    /// replaced with the state defined by the representation enclosed in the request message
    /// content.
    ///
    /// [PUT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-put>
    /// [tr]: <https://www.rfc-editor.org/rfc/rfc9110.html#target.resource>
    pub const PUT = (code::M_PUT, b"PUT", , idem);
    /// The [DELETE] method requests that the origin server remove the association between the
    /// [target resource][tr] and its current functionality.
    ///
    /// [DELETE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-delete>
    /// [tr]: <https://www.rfc-editor.org/rfc/rfc9110.html#target.resource>
    pub const DELETE = (code::M_DELETE, b"DELETE", , idem);
    /// The [OPTIONS] method requests information about the communication options available for the
    /// target resource, at either the origin server or an intervening intermediary.
    ///
    /// [OPTIONS]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-options>
    pub const OPTIONS = (code::M_OPTIONS, b"OPTIONS", safe, idem);
    /// The [TRACE] method requests a remote, application-level loop-back of the request message.
    ///
    /// [TRACE]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-trace>
    pub const TRACE = (code::M_TRACE, b"TRACE", safe, idem);
    /// The [CONNECT] method requests that the recipient establish a tunnel to the destination
    /// origin server identified by the request target.
    ///
    /// [CONNECT]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-connect>
    pub const CONNECT = (code::M_CONNECT, b"CONNECT", , );
}

impl Method {
    /// Length of the longest recognized method token, `OPTIONS` and `CONNECT`.
    pub(crate) const MAX_LEN: usize = 7;

    /// Returns `true` if method is considered ["safe"].
    ///
    /// Of the request methods defined by RFC9110, the GET, HEAD, OPTIONS, and TRACE methods are
    /// defined to be safe.
    ///
    /// ["safe"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-safe-methods>
    #[inline]
    pub const fn is_safe(&self) -> bool {
        self.props().safe
    }

    /// Returns `true` if method is considered ["idempotent"].
    ///
    /// PUT, DELETE, and safe request methods are idempotent.
    ///
    /// ["idempotent"]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-idempotent-methods>
    #[inline]
    pub const fn is_idempotent(&self) -> bool {
        self.props().idem
    }

    /// Returns the numeric method code, one of the `code::M_*` constants.
    #[inline]
    pub const fn code(&self) -> u8 {
        self.0
    }

    /// Create [`Method`] from its numeric code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Method> {
        match code {
            code::M_GET..=code::M_CONNECT => Some(Self(code)),
            _ => None,
        }
    }

    /// Returns string representation of the method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match std::str::from_utf8(self.props().value) {
            Ok(ok) => ok,
            Err(_) => "",
        }
    }

    #[inline]
    const fn props(&self) -> Props {
        PROPS[(self.0 - code::M_GET) as usize]
    }
}

impl std::str::FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

/// Method token is not one of the recognized methods.
pub struct UnknownMethod;

impl std::error::Error for UnknownMethod { }

impl std::fmt::Debug for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

impl std::fmt::Display for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

// ===== Macros =====

macro_rules! props {
    (
        const $props:ident: [$len:literal];
        $(
           $(#[$doc:meta])*
           pub const $name:ident = ($code:expr, $val:literal, $($safe:ident)?, $($idem:ident)?);
        )*
    ) => {
        impl Method {
            $(
               $(#[$doc])*
               pub const $name: Self = Self($code);
            )*

            /// Create [`Method`] from bytes.
            ///
            /// The method token is case-sensitive.
            #[inline]
            pub const fn from_bytes(src: &[u8]) -> Option<Method> {
                match src {
                    $(
                        $val => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }

        // `PROPS` is indexed by `code - M_GET`, declaration order must follow the codes
        const $props: [Props; $len] = [
            $(
                Props { value: $val, safe: prop!($($safe)?), idem: prop!($($idem)?) },
            )*
        ];
    };
}

macro_rules! prop {
    (safe) => { true };
    (idem) => { true };
    () => { false };
}

use {props, prop};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_method_from_bytes() {
        assert_eq!(Method::from_bytes(b"GET"), Some(Method::GET));
        assert_eq!(Method::from_bytes(b"HEAD"), Some(Method::HEAD));
        assert_eq!(Method::from_bytes(b"POST"), Some(Method::POST));
        assert_eq!(Method::from_bytes(b"PUT"), Some(Method::PUT));
        assert_eq!(Method::from_bytes(b"DELETE"), Some(Method::DELETE));
        assert_eq!(Method::from_bytes(b"OPTIONS"), Some(Method::OPTIONS));
        assert_eq!(Method::from_bytes(b"TRACE"), Some(Method::TRACE));
        assert_eq!(Method::from_bytes(b"CONNECT"), Some(Method::CONNECT));

        // case-sensitive, closed set
        assert_eq!(Method::from_bytes(b"get"), None);
        assert_eq!(Method::from_bytes(b"PATCH"), None);
        assert_eq!(Method::from_bytes(b""), None);
        assert!("FOO".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_codes() {
        for code in code::M_GET..=code::M_CONNECT {
            let method = Method::from_code(code).unwrap();
            assert_eq!(method.code(), code);
            assert_eq!(Method::from_bytes(method.as_str().as_bytes()), Some(method));
        }
        assert_eq!(Method::from_code(0), None);
        assert_eq!(Method::from_code(code::M_CONNECT + 1), None);

        assert_eq!(Method::GET.code(), code::M_GET);
        assert_eq!(Method::CONNECT.as_str(), "CONNECT");
        assert_eq!(Method::TRACE.to_string(), "TRACE");
    }

    #[test]
    fn test_method_props() {
        assert!(Method::GET.is_safe());
        assert!(Method::GET.is_idempotent());
        assert!(!Method::PUT.is_safe());
        assert!(Method::PUT.is_idempotent());
        assert!(!Method::POST.is_safe());
        assert!(!Method::POST.is_idempotent());
        assert!(!Method::CONNECT.is_idempotent());
    }
}
