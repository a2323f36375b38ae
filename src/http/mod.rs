use memchr::memmem;

pub mod headers;
pub mod parser;
pub mod request;
pub mod serializer;

/// The only scheme accepted in a request line, compared ignoring case.
pub const SCHEME_PREFIX: &str = "http://";

/// Stored as [`Request::protocol`](request::Request::protocol) after a parse.
pub const PROTOCOL: &str = "http";

/// Port implied when the URL carries none.
pub const DEFAULT_PORT: u16 = 80;

pub(crate) const CRLF: &[u8] = b"\r\n";

/// Offset of the first CRLF in `buf`.
pub(crate) fn find_crlf(buf: &[u8]) -> Option<usize> {
    memmem::find(buf, CRLF)
}

/// Drops leading C-locale whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
pub(crate) fn trim_leading_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf() {
        assert_eq!(find_crlf(b"GET\r\n"), Some(3));
        assert_eq!(find_crlf(b"a\rb\nc\r\n"), Some(5));
        assert_eq!(find_crlf(b"\r\n\r\n"), Some(0));
        assert_eq!(find_crlf(b"no line end\n"), None);
        assert_eq!(find_crlf(b""), None);
    }

    #[test]
    fn trim() {
        assert_eq!(trim_leading_space(b"  value "), b"value ");
        assert_eq!(trim_leading_space(b"\t\x0b\x0cvalue"), b"value");
        assert_eq!(trim_leading_space(b"value"), b"value");
        assert_eq!(trim_leading_space(b"   "), b"");
        assert_eq!(trim_leading_space(b""), b"");
    }
}
