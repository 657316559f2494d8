//! Byte classification.

/// Declare a `const fn` backed by a 256 entries lookup table.
///
/// ```not_rust
/// byte_map! {
///     /// docs
///     pub const fn is_digit(byte: u8) {
///         byte.is_ascii_digit()
///     }
/// }
/// ```
macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            const PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== lookup table =====

byte_map! {
    /// request-target bytes, any VCHAR or obs-text
    ///
    /// SP ends the target, CTL bytes are never allowed.
    #[inline(always)]
    pub const fn is_uri(byte: u8) {
        matches!(byte, 0x21..=0x7E | 0x80..=0xFF)
    }
}

byte_map! {
    /// reason-phrase  = 1*( HTAB / SP / VCHAR / obs-text )
    #[inline(always)]
    pub const fn is_reason(byte: u8) {
        matches!(byte, b'\t' | b' ' | 0x21..=0x7E | 0x80..=0xFF)
    }
}

/// OWS = *( SP / HTAB )
#[inline(always)]
pub const fn is_ows(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

// ===== SWAR =====

const BLOCK: usize = size_of::<usize>();
const LSB: usize = usize::from_le_bytes([0b0000_0001; BLOCK]);
const MSB: usize = usize::from_le_bytes([0b1000_0000; BLOCK]);
const CR: usize = usize::from_le_bytes([b'\r'; BLOCK]);
const LF: usize = usize::from_le_bytes([b'\n'; BLOCK]);

/// Returns non-zero if any byte of `block` is zero, the lowest set bit marks the first one.
#[inline(always)]
const fn has_zero(block: usize) -> usize {
    block.wrapping_sub(LSB) & !block & MSB
}

/// Returns the index of the first `\r` or `\n` in `bytes`.
///
/// Scans a word at a time, the tail is checked byte by byte.
pub fn find_line_end(bytes: &[u8]) -> Option<usize> {
    let mut offset = 0;
    let mut state = bytes;

    while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
        let block = usize::from_le_bytes(*chunk);
        let found = has_zero(block ^ CR) | has_zero(block ^ LF);
        if found != 0 {
            return Some(offset + (found.trailing_zeros() / 8) as usize);
        }
        offset += BLOCK;
        state = rest;
    }

    state
        .iter()
        .position(|&byte| matches!(byte, b'\r' | b'\n'))
        .map(|nth| offset + nth)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_find_line_end() {
        assert_eq!(find_line_end(b""), None);
        assert_eq!(find_line_end(b"\r\n"), Some(0));
        assert_eq!(find_line_end(b"Host: localhost"), None);
        assert_eq!(find_line_end(b"Host: localhost\r\n"), Some(15));
        assert_eq!(find_line_end(b"Host\n"), Some(4));

        // every position, across block boundaries
        let mut line = vec![b'a'; 40];
        for nth in 0..line.len() {
            line[nth] = b'\r';
            assert_eq!(find_line_end(&line), Some(nth));
            line[nth] = b'\n';
            assert_eq!(find_line_end(&line), Some(nth));
            line[nth] = b'a';
        }

        // bytes adjacent to CR/LF must not match
        assert_eq!(find_line_end(b"\x0c\x0e\x09\x0b\x8d\x8a\xff\x00ab"), None);
    }

    #[test]
    fn test_byte_tables() {
        assert!(is_uri(b'/'));
        assert!(is_uri(b'%'));
        assert!(is_uri(0x80));
        assert!(!is_uri(b' '));
        assert!(!is_uri(b'\r'));
        assert!(!is_uri(0x7F));
        assert!(!is_uri(0x00));

        assert!(is_reason(b' '));
        assert!(is_reason(b'\t'));
        assert!(is_reason(b'F'));
        assert!(!is_reason(b'\r'));
        assert!(!is_reason(b'\n'));
        assert!(!is_reason(0x01));

        assert!(is_ows(b' '));
        assert!(is_ows(b'\t'));
        assert!(!is_ows(b'a'));
    }
}
