//! Schema-driven markup generation.
//!
//! A [`SchemaRegistry`] is compiled once from a compact shorthand table (the
//! built-in XHTML table, or your own) and then backs any number of
//! [`MarkupStream`] sessions that emit well-formed, validated markup.
//!
//! ```ignore
//! use tagstream::{MarkupStream, Tag};
//!
//! let mut page = MarkupStream::xhtml();
//! page.start("html")?;
//! page.start("head")?;
//! page.element(Tag::new("title").text("Hello world!"))?;
//! page.end("head")?;
//! page.start("body")?;
//! page.element(Tag::new("h1").text("Hello world!"))?;
//! page.end("body")?;
//! page.end("html")?;
//! let html = page.finish()?;
//! ```

pub mod error;

pub use error::CliError;
pub use tagstream_schema::{
    AttributeKind, AttributeSpec, ElementSchema, Position, SchemaConfig, SchemaError,
    SchemaRegistry,
};
pub use tagstream_stream::{AttrValue, Attributes, InputType, MarkupStream, StreamError, Tag};
pub use tagstream_types::{Content, Escaper, Markup, XmlEscaper};

/// Renders the sample "Hello world!" page.
pub fn demo_page(registry: &SchemaRegistry) -> Result<String, StreamError> {
    let mut s = MarkupStream::new(registry);
    s.start("html")?;
    s.start("head")?;
    s.element(Tag::new("title").text("Hello world!"))?;
    s.end("head")?;
    s.start("body")?;
    s.element(Tag::new("h1").text("Hello world!"))?;
    s.element(Tag::new("p").text("So how is it going?  <>!"))?;
    s.end("body")?;
    s.end("html")?;
    s.finish()
}
