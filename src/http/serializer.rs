//! Wire-format output for [`Request`] and [`Headers`]
//!
//! Writing is size-then-write: ask for [`Request::total_len`] (or
//! [`Request::headers_len`]), hand in a destination at least that long, then
//! call [`Request::write`] (or [`Request::write_headers`]). A destination that
//! is too small is rejected with [`Error::Overflow`] before a single byte is
//! written.
//!
//! Headers are written as `key:value\r\n` with nothing between the colon and
//! the value. The parser trims leading whitespace from values, so
//! `Key: value` on the wire comes back out as `Key:value`. Request lines and
//! headers without a space after the colon round-trip byte for byte.

use crate::error::{Error, Result};
use crate::http::CRLF;
use crate::http::headers::Headers;
use crate::http::request::Request;

/// Sequential writes into a destination already known to be large enough.
struct SliceWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    fn put(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.dst[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }
}

fn check_room(needed: usize, available: usize) -> Result<()> {
    if available < needed {
        return Err(Error::Overflow { needed, available });
    }
    Ok(())
}

impl Headers {
    /// Bytes needed for every `key:value\r\n` line plus the closing `\r\n`.
    pub fn encoded_len(&self) -> usize {
        self.iter()
            .map(|h| h.key().len() + 1 + h.value().len() + CRLF.len())
            .sum::<usize>()
            + CRLF.len()
    }

    /// Writes the header block into `dst`, returning the number of bytes
    /// written.
    pub fn write(&self, dst: &mut [u8]) -> Result<usize> {
        check_room(self.encoded_len(), dst.len())?;

        let mut w = SliceWriter::new(dst);
        self.put(&mut w);
        Ok(w.pos)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; self.encoded_len()];
        self.put(&mut SliceWriter::new(&mut buf));
        buf
    }

    fn put(&self, w: &mut SliceWriter<'_>) {
        for header in self {
            w.put(header.key());
            w.put(b":");
            w.put(header.value());
            w.put(CRLF);
        }
        w.put(CRLF);
    }
}

impl Request {
    /// Same as [`Headers::encoded_len`] for this request's headers.
    pub fn headers_len(&self) -> usize {
        self.headers.encoded_len()
    }

    /// Bytes needed for `method path version\r\n` plus the header block.
    pub fn total_len(&self) -> usize {
        self.request_line_len() + self.headers_len()
    }

    pub fn write_headers(&self, dst: &mut [u8]) -> Result<usize> {
        self.headers.write(dst)
    }

    /// Writes the request line followed by the header block.
    pub fn write(&self, dst: &mut [u8]) -> Result<usize> {
        check_room(self.total_len(), dst.len())?;

        let mut w = SliceWriter::new(dst);
        self.put_request_line(&mut w);
        self.headers.put(&mut w);
        Ok(w.pos)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; self.total_len()];
        let mut w = SliceWriter::new(&mut buf);
        self.put_request_line(&mut w);
        self.headers.put(&mut w);
        buf
    }

    fn request_line_len(&self) -> usize {
        self.method.len() + 1 + self.path.len() + 1 + self.version.len() + CRLF.len()
    }

    fn put_request_line(&self, w: &mut SliceWriter<'_>) {
        w.put(&self.method);
        w.put(b" ");
        w.put(&self.path);
        w.put(b" ");
        w.put(&self.version);
        w.put(CRLF);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: &[u8] =
        b"GET http://example.com:8080/a/b HTTP/1.1\r\nHost: example.com\r\nX: 1\r\n\r\n";

    #[test]
    fn lengths() {
        let req = Request::parse(REQUEST).unwrap();

        // "Host:example.com\r\n" + "X:1\r\n" + "\r\n"
        assert_eq!(req.headers_len(), 18 + 5 + 2);
        // "GET /a/b HTTP/1.1\r\n"
        assert_eq!(req.total_len(), 19 + 25);
    }

    #[test]
    fn lengths_without_headers() {
        let req = Request::parse(b"GET http://host/ HTTP/1.0\r\n\r\n").unwrap();

        assert_eq!(req.headers_len(), 2);
        assert_eq!(req.total_len(), "GET / HTTP/1.0\r\n\r\n".len());
        assert_eq!(req.to_bytes(), b"GET / HTTP/1.0\r\n\r\n");
    }

    #[test]
    fn write_exact() {
        let req = Request::parse(REQUEST).unwrap();
        let mut buf = vec![0; req.total_len()];

        let n = req.write(&mut buf).unwrap();

        assert_eq!(n, req.total_len());
        assert_eq!(buf, b"GET /a/b HTTP/1.1\r\nHost:example.com\r\nX:1\r\n\r\n");
    }

    #[test]
    fn write_larger_buffer() {
        let req = Request::parse(REQUEST).unwrap();
        let mut buf = vec![b'#'; req.total_len() + 10];

        let n = req.write(&mut buf).unwrap();

        assert_eq!(n, req.total_len());
        assert_eq!(&buf[..n], &req.to_bytes()[..]);
        assert!(buf[n..].iter().all(|b| *b == b'#'));
    }

    #[test]
    fn write_overflow_is_atomic() {
        let req = Request::parse(REQUEST).unwrap();
        let total = req.total_len();

        for size in [0, 1, 19, total - 1] {
            let mut buf = vec![b'#'; size];
            assert_eq!(
                req.write(&mut buf),
                Err(Error::Overflow {
                    needed: total,
                    available: size,
                })
            );
            assert!(buf.iter().all(|b| *b == b'#'));
        }
    }

    #[test]
    fn write_headers() {
        let req = Request::parse(REQUEST).unwrap();
        let len = req.headers_len();

        let mut buf = vec![0; len];
        assert_eq!(req.write_headers(&mut buf), Ok(len));
        assert_eq!(buf, b"Host:example.com\r\nX:1\r\n\r\n");
        assert_eq!(buf, req.headers().to_bytes());

        let mut small = vec![0; len - 1];
        assert_eq!(
            req.write_headers(&mut small),
            Err(Error::Overflow {
                needed: len,
                available: len - 1,
            })
        );
        assert!(small.iter().all(|b| *b == 0));
    }

    #[test]
    fn empty_headers_need_two_bytes() {
        let headers = Headers::new();

        assert_eq!(headers.encoded_len(), 2);
        assert_eq!(
            headers.write(&mut [0; 1]),
            Err(Error::Overflow {
                needed: 2,
                available: 1,
            })
        );

        let mut buf = [0; 2];
        assert_eq!(headers.write(&mut buf), Ok(2));
        assert_eq!(&buf, b"\r\n");
    }

    #[test]
    fn write_after_mutation() {
        let mut req = Request::parse(REQUEST).unwrap();
        req.headers_mut().set("host", " origin.internal");
        req.headers_mut().remove("X").unwrap();
        req.headers_mut().set("Connection", "close");

        let bytes = req.to_bytes();

        assert_eq!(bytes.len(), req.total_len());
        assert_eq!(
            bytes,
            b"GET /a/b HTTP/1.1\r\nHost: origin.internal\r\nConnection:close\r\n\r\n"
        );
    }

    #[test]
    fn round_trip_without_leading_space() {
        let wire = b"GET http://h/x HTTP/1.1\r\nA:1\r\nB:two  \r\n\r\n";
        let req = Request::parse(wire).unwrap();

        assert_eq!(req.to_bytes(), b"GET /x HTTP/1.1\r\nA:1\r\nB:two  \r\n\r\n");
    }
}
