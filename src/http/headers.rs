//! HTTP headers abstraction for [`Request`](crate::http::request::Request)
//!
//! Headers are kept in arrival order as raw byte strings. Parsing never
//! de-duplicates, so a header repeated on the wire is stored twice; only
//! [`Headers::set`] replaces an existing entry.
//!
//! Key comparison in [`get`](Headers::get), [`set`](Headers::set) and
//! [`remove`](Headers::remove) ignores ASCII case. Values are stored exactly
//! as supplied: the parser trims leading whitespace from wire values, `set`
//! does not trim anything.

use std::fmt;

use crate::error::{Error, Result};

/// Number of header slots reserved before the first growth.
pub const INITIAL_CAPACITY: usize = 4;

/// A single `key:value` pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Header {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl Header {
    pub(crate) fn new(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: key.to_vec(),
            value: value.to_vec(),
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// The value as UTF-8, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    fn matches(&self, key: &[u8]) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Header")
            .field(&String::from_utf8_lossy(&self.key))
            .field(&String::from_utf8_lossy(&self.value))
            .finish()
    }
}

/// Ordered, growable header collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl Headers {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the first header whose key matches `key`, ignoring ASCII case.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Header> {
        let key = key.as_ref();
        self.entries.iter().find(|h| h.matches(key))
    }

    /// Replaces the value of the first matching header in place, or appends
    /// a new header when none matches. The value is stored verbatim.
    pub fn set(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        let key = key.as_ref();
        let value = value.as_ref();

        match self.entries.iter_mut().find(|h| h.matches(key)) {
            Some(header) => header.value = value.to_vec(),
            None => self.push(Header::new(key, value)),
        }
    }

    /// Removes the first matching header. The entries after it keep their
    /// relative order. A miss leaves the collection untouched.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Result<Header> {
        let key = key.as_ref();
        let index = self
            .entries
            .iter()
            .position(|h| h.matches(key))
            .ok_or(Error::HeaderNotFound)?;

        Ok(self.entries.remove(index))
    }

    /// Appends without looking for an existing key.
    pub(crate) fn push(&mut self, header: Header) {
        self.reserve_for(self.entries.len() + 1);
        self.entries.push(header);
    }

    // Capacity doubles until it covers `want`.
    fn reserve_for(&mut self, want: usize) {
        let capacity = self.entries.capacity();
        if want <= capacity {
            return;
        }

        let mut new_capacity = if capacity == 0 {
            INITIAL_CAPACITY
        } else {
            capacity * 2
        };
        while new_capacity < want {
            new_capacity *= 2;
        }

        self.entries.reserve_exact(new_capacity - self.entries.len());
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
