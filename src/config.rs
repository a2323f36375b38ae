use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::http::headers::INITIAL_CAPACITY;

/// Largest accepted `header_capacity`.
pub const MAX_HEADER_CAPACITY: usize = 1024;

/// Settings handed to [`Parser::new`](crate::http::parser::Parser::new).
///
/// There is no process-wide config: every parser carries its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Emit `log` records while parsing.
    pub verbose: bool,

    /// Initial number of header slots reserved for a parsed request.
    /// `0` means the default; anything above [`MAX_HEADER_CAPACITY`] is
    /// rejected when parsing and clamped otherwise.
    pub header_capacity: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            header_capacity: INITIAL_CAPACITY,
        }
    }
}

/// Parses a TOML document. Missing keys take their default values.
impl FromStr for ParserConfig {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let config =
            toml::from_str::<ParserConfig>(content).map_err(|err| Error::Config(err.to_string()))?;

        if config.header_capacity > MAX_HEADER_CAPACITY {
            return Err(Error::Config(format!(
                "header_capacity {} exceeds {MAX_HEADER_CAPACITY}",
                config.header_capacity
            )));
        }
        Ok(config)
    }
}

impl ParserConfig {
    /// Reads a TOML file, falling back to the default config on any failure.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Fail to read {}: {err}", path.display());
                log::warn!("Fall back to default config");
                return ParserConfig::default();
            }
        };

        match content.parse::<ParserConfig>() {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Fail to deserialize config file {}: {err}", path.display());
                log::warn!("Fall back to default config");
                ParserConfig::default()
            }
        }
    }

    pub(crate) fn initial_capacity(&self) -> usize {
        match self.header_capacity {
            0 => INITIAL_CAPACITY,
            n => n.min(MAX_HEADER_CAPACITY),
        }
    }
}
