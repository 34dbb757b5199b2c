//! Cell values and the canonical-string capability used for row identity.
//!
//! Every comparison in this crate decides equality on the canonical string
//! of a cell. Any type can take part in a comparison by implementing
//! [`Cell`]; [`TextCell`] is the plain-text default.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A table cell that can project itself onto a canonical string.
pub trait Cell {
    fn canonical_str(&self) -> Cow<'_, str>;
}

/// A cell backed by an owned string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextCell(pub String);

impl TextCell {
    pub fn new(text: impl Into<String>) -> TextCell {
        TextCell(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Cell for TextCell {
    fn canonical_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl fmt::Display for TextCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TextCell {
    fn from(value: &str) -> Self {
        TextCell(value.to_owned())
    }
}

impl From<String> for TextCell {
    fn from(value: String) -> Self {
        TextCell(value)
    }
}

impl Cell for String {
    fn canonical_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Cell for str {
    fn canonical_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Cell for Box<str> {
    fn canonical_str(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl<T: Cell + ?Sized> Cell for &T {
    fn canonical_str(&self) -> Cow<'_, str> {
        (**self).canonical_str()
    }
}

/// Wraps a row of raw strings into [`TextCell`]s.
pub fn text_row<S: AsRef<str>>(values: &[S]) -> Vec<TextCell> {
    values.iter().map(|v| TextCell::from(v.as_ref())).collect()
}

/// Wraps a two-dimensional array of raw strings into [`TextCell`]s.
pub fn text_array<S, R>(rows: &[R]) -> Vec<Vec<TextCell>>
where
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    rows.iter().map(|row| text_row(row.as_ref())).collect()
}
