use std::fmt;

use crate::error::Result;
use crate::http::DEFAULT_PORT;
use crate::http::headers::Headers;
use crate::http::parser::Parser;

/// A proxy-style HTTP/1.x request split into its parts.
///
/// ```text
/// GET http://example.com:8080/index.html HTTP/1.1\r\n
/// Host: example.com\r\n
/// Connection: close\r\n
/// \r\n
/// ```
///
/// parses to method `GET`, protocol `http`, host `example.com`, port `8080`,
/// path `/index.html`, version `HTTP/1.1` and the two headers in order,
/// with the space after each colon trimmed.
///
/// Request-line fields are raw bytes exactly as received; no encoding is
/// assumed. The `*_str` accessors return `None` when a field is not UTF-8.
/// Every field is owned: nothing borrows from the buffer that was parsed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub(crate) method: Vec<u8>,
    pub(crate) protocol: Vec<u8>,
    pub(crate) host: Vec<u8>,
    pub(crate) port: Option<Vec<u8>>,
    pub(crate) path: Vec<u8>,
    pub(crate) version: Vec<u8>,

    pub(crate) headers: Headers,

    pub(crate) raw_request_line: Vec<u8>,
}

impl Request {
    /// An empty request: every field unset, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `buf` with a default [`Parser`].
    pub fn parse(buf: &[u8]) -> Result<Self> {
        Parser::default().parse(buf)
    }

    pub fn method(&self) -> &[u8] {
        &self.method
    }

    pub fn method_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.method).ok()
    }

    /// Always `http` for a parsed request.
    pub fn protocol(&self) -> &[u8] {
        &self.protocol
    }

    pub fn host(&self) -> &[u8] {
        &self.host
    }

    pub fn host_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.host).ok()
    }

    /// The port as written in the URL. `None` means the default port.
    pub fn port(&self) -> Option<&[u8]> {
        self.port.as_deref()
    }

    /// The port as a number, if present and numeric.
    pub fn port_number(&self) -> Option<u16> {
        std::str::from_utf8(self.port.as_deref()?).ok()?.parse().ok()
    }

    /// The port to connect to: the URL's port, or 80 when it has none.
    ///
    /// A port that is not a valid number also yields `None` from
    /// [`port_number`](Self::port_number); this method falls back to 80 then.
    pub fn effective_port(&self) -> u16 {
        self.port_number().unwrap_or(DEFAULT_PORT)
    }

    pub fn path(&self) -> &[u8] {
        &self.path
    }

    pub fn path_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.path).ok()
    }

    pub fn version(&self) -> &[u8] {
        &self.version
    }

    pub fn version_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.version).ok()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// The request line as received, without its CRLF.
    pub fn raw_request_line(&self) -> &[u8] {
        &self.raw_request_line
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &String::from_utf8_lossy(&self.method))
            .field("protocol", &String::from_utf8_lossy(&self.protocol))
            .field("host", &String::from_utf8_lossy(&self.host))
            .field("port", &self.port.as_deref().map(String::from_utf8_lossy))
            .field("path", &String::from_utf8_lossy(&self.path))
            .field("version", &String::from_utf8_lossy(&self.version))
            .field("headers", &self.headers)
            .finish()
    }
}
