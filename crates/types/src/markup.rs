//! Newtype wrapper for markup that is already safely encoded.
//!
//! A [`Markup`] value is never passed through an [`Escaper`](crate::Escaper)
//! again. Plain strings always are.

use serde::Serialize;
use std::fmt;

/// A trusted, pre-escaped markup fragment.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wraps text that the caller guarantees is already safe to emit verbatim.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Returns the markup as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Self(iter.into_iter().map(|m| m.0).collect())
    }
}
