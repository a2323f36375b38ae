//! Request parser for absolute-URI HTTP/1.x request lines
//!
//! Accepts:
//!
//! ```text
//! METHOD SP http://host[:port][/path] SP VERSION CRLF
//! (Key:Value CRLF)*
//! CRLF
//! ```
//!
//! Only the request line can fail a parse. Header lines are handled
//! leniently: a line without a colon is skipped, and a last line without
//! its CRLF ends the header block early. Both keep the headers parsed so
//! far and still report success. Bodies are never read.

use memchr::memchr;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::http::headers::{Header, Headers};
use crate::http::request::Request;
use crate::http::{CRLF, PROTOCOL, SCHEME_PREFIX, find_crlf, trim_leading_space};

/// Stateless request parser. One parser can be shared by any number of
/// parses; each call returns a fresh [`Request`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

/// Splits like `strtok`: leading delimiters are skipped and a token ends at
/// the next delimiter, which is consumed.
struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    fn new(line: &'a [u8]) -> Self {
        Self { rest: line }
    }

    fn next(&mut self, delim: u8) -> Option<&'a [u8]> {
        let Some(start) = self.rest.iter().position(|b| *b != delim) else {
            self.rest = &[];
            return None;
        };
        let s = &self.rest[start..];

        match memchr(delim, s) {
            Some(end) => {
                self.rest = &s[end + 1..];
                Some(&s[..end])
            }
            None => {
                self.rest = &[];
                Some(s)
            }
        }
    }
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a request line and its header block out of `buf`.
    ///
    /// The returned request owns copies of everything it needs, so `buf`
    /// can be reused as soon as this returns.
    pub fn parse(&self, buf: &[u8]) -> Result<Request> {
        let line_end = find_crlf(buf).ok_or(Error::MalformedRequestLine("missing CRLF"))?;
        let line = &buf[..line_end];

        let mut req = Request::new();
        req.headers = Headers::with_capacity(self.config.initial_capacity());
        req.raw_request_line = line.to_vec();

        self.parse_request_line(line, &mut req)?;
        self.parse_headers(&buf[line_end + CRLF.len()..], &mut req.headers);

        Ok(req)
    }

    fn parse_request_line(&self, line: &[u8], req: &mut Request) -> Result<()> {
        let mut tokens = Tokens::new(line);
        let method = tokens
            .next(b' ')
            .ok_or(Error::MalformedRequestLine("missing method"))?;
        let url = tokens
            .next(b' ')
            .ok_or(Error::MalformedRequestLine("missing URL"))?;
        // The version runs to the end of the line, so a stray CR is cut here.
        let version = tokens
            .next(b'\r')
            .ok_or(Error::MalformedRequestLine("missing version"))?;

        let rest = url
            .get(..SCHEME_PREFIX.len())
            .filter(|scheme| scheme.eq_ignore_ascii_case(SCHEME_PREFIX.as_bytes()))
            .map(|_| &url[SCHEME_PREFIX.len()..])
            .ok_or(Error::MalformedRequestLine("URL must start with http://"))?;

        let (authority, path) = match memchr(b'/', rest) {
            Some(path_start) => (&rest[..path_start], &rest[path_start..]),
            None => (rest, &b"/"[..]),
        };

        // A colon only splits off a port when it comes before the path.
        let (host, port) = match memchr(b':', authority) {
            Some(colon) if colon + 1 < authority.len() => {
                (&authority[..colon], Some(authority[colon + 1..].to_vec()))
            }
            Some(colon) => (&authority[..colon], None),
            None => (authority, None),
        };

        req.method = method.to_vec();
        req.protocol = PROTOCOL.as_bytes().to_vec();
        req.host = host.to_vec();
        req.port = port;
        req.path = path.to_vec();
        req.version = version.to_vec();

        if self.config.verbose {
            log::debug!(
                "request line: method={} host={} port={} path={} version={}",
                String::from_utf8_lossy(&req.method),
                String::from_utf8_lossy(&req.host),
                req.port.as_deref().map_or("-".into(), String::from_utf8_lossy),
                String::from_utf8_lossy(&req.path),
                String::from_utf8_lossy(&req.version),
            );
        }

        Ok(())
    }

    fn parse_headers(&self, mut rest: &[u8], headers: &mut Headers) {
        while !rest.is_empty() && !rest.starts_with(CRLF) {
            let Some(line_end) = find_crlf(rest) else {
                if self.config.verbose {
                    log::debug!(
                        "header block truncated, dropping {} trailing bytes",
                        rest.len()
                    );
                }
                break;
            };

            let line = &rest[..line_end];
            rest = &rest[line_end + CRLF.len()..];

            let Some(colon) = memchr(b':', line) else {
                if self.config.verbose {
                    log::debug!(
                        "skipping header line without colon: {:?}",
                        String::from_utf8_lossy(line)
                    );
                }
                continue;
            };

            let header = Header::new(&line[..colon], trim_leading_space(&line[colon + 1..]));
            if self.config.verbose {
                log::trace!("header: {header:?}");
            }
            headers.push(header);
        }
    }
}
