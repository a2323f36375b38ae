//! proxy_parse - HTTP/1.x request parsing for a forwarding proxy
//!
//! Turns the raw bytes a proxy receives on its client socket into a
//! [`Request`] whose headers can be inspected and edited, then turns the
//! request back into wire bytes for the upstream server.
//!
//! Only absolute-URI request lines (`GET http://host[:port]/path HTTP/1.1`)
//! are understood. Message bodies, `CONNECT` tunnels and HTTP/2 are out of
//! scope.
//!
//! ```
//! use proxy_parse::Request;
//!
//! let mut req = Request::parse(
//!     b"GET http://example.com:8080/index.html HTTP/1.1\r\nHost: example.com\r\n\r\n",
//! )?;
//! assert_eq!(req.host_str(), Some("example.com"));
//! assert_eq!(req.effective_port(), 8080);
//!
//! req.headers_mut().set("Connection", "close");
//!
//! let mut out = vec![0; req.total_len()];
//! let n = req.write(&mut out)?;
//! assert_eq!(
//!     &out[..n],
//!     b"GET /index.html HTTP/1.1\r\nHost:example.com\r\nConnection:close\r\n\r\n",
//! );
//! # Ok::<(), proxy_parse::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use crate::{
    config::ParserConfig,
    error::{Error, Result},
    http::{
        headers::{Header, Headers},
        parser::Parser,
        request::Request,
    },
};
