mod content;
mod mailbox;
mod special;

pub use self::content::*;
pub use self::mailbox::*;
pub use self::special::*;

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::slice::Iter;

lazy_static! {
    // RFC 5322 field-name: printable US-ASCII except colon
    static ref FIELD_NAME_RE: Regex = Regex::new(r"^[!-9;-~]+\z").unwrap();
}

/// Check that a header can be written verbatim without altering the block
///
/// The name must be a valid field-name and the value must contain no raw
/// `CR` or `LF`.
pub fn check_header(name: &str, value: &str) -> Result<()> {
    if !FIELD_NAME_RE.is_match(name) {
        return Err(Error::InvalidHeaderName(name.into()));
    }
    check_line_breaks(name, value)
}

pub(crate) fn check_line_breaks(field: &str, value: &str) -> Result<()> {
    if value.contains(|c| c == '\r' || c == '\n') {
        Err(Error::LineBreak {
            field: field.into(),
            value: value.into(),
        })
    } else {
        Ok(())
    }
}

/// Ordered table of message headers
///
/// Entries keep their insertion order. Setting an existing name replaces its
/// value in place, so the header stays where it was first written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty table
    pub fn new() -> Self {
        Headers::default()
    }

    /// Set a header value, replacing any previous value of the same name
    pub fn set<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();

        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Set a header value and move the table
    ///
    /// Useful for the "builder-style" pattern.
    #[inline]
    pub fn with<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Get a header value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a header, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> Iter<(String, String)> {
        self.entries.iter()
    }

    /// Render the header block
    ///
    /// Each line is `CRLF`-terminated except the last one: trailing
    /// whitespace of the whole block is stripped.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (name, value) in &self.entries {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str("\r\n");
        }

        let len = out.trim_end().len();
        out.truncate(len);
        out
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.render())
    }
}
