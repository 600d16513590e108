//! A stateful builder that emits well-formed, schema-checked markup.
//!
//! A [`MarkupStream`] borrows a compiled
//! [`SchemaRegistry`](tagstream_schema::SchemaRegistry) and offers three ways
//! to emit an element:
//!
//! - [`MarkupStream::element`] renders a complete element in one call,
//! - [`MarkupStream::start`] emits only the opening tag and pushes it on the
//!   open-tag stack,
//! - [`MarkupStream::end`] checks the top of the stack and closes it.
//!
//! [`MarkupStream::finish`] asserts that nothing is left open and returns the
//! assembled markup.
//!
//! ```ignore
//! use tagstream_stream::{MarkupStream, Tag};
//!
//! let mut stream = MarkupStream::xhtml();
//! stream.start("div")?;
//! stream.element(Tag::new("p").attr("align", "center").text("Hello"))?;
//! stream.end("div")?;
//! assert_eq!(stream.finish()?, r#"<div><p align="center">Hello</p></div>"#);
//! ```
//!
//! Every failed call leaves the buffer and the stack exactly as they were.

mod attributes;
mod error;
mod render;
mod stream;
mod tag;

pub use attributes::{AttrValue, Attributes};
pub use error::StreamError;
pub use stream::MarkupStream;
pub use tag::{InputType, Tag};
