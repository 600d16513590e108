//! The escaping collaborator used when assembling markup.

use quick_xml::escape::{escape, partial_escape};
use std::borrow::Cow;

/// Encodes plain strings for safe inclusion in markup.
///
/// Implementations only ever see plain strings; trusted [`Markup`](crate::Markup)
/// fragments bypass the escaper entirely.
pub trait Escaper {
    /// Encodes a string for use as element content.
    fn escape_text<'a>(&self, raw: &'a str) -> Cow<'a, str>;

    /// Encodes a string for use inside a double-quoted attribute value.
    fn escape_attribute<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Default escaper backed by `quick-xml`.
///
/// Text content escapes `&`, `<` and `>`; attribute values additionally
/// escape both quote characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEscaper;

impl Escaper for XmlEscaper {
    fn escape_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        partial_escape(raw)
    }

    fn escape_attribute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        escape(raw)
    }
}

impl<E: Escaper + ?Sized> Escaper for &E {
    fn escape_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        (**self).escape_text(raw)
    }

    fn escape_attribute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        (**self).escape_attribute(raw)
    }
}
