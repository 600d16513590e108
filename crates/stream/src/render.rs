//! Validation and serialization of a single tag against its schema.
//!
//! Nothing here touches stream state, so a failure can never leave partial
//! output behind.

use crate::attributes::AttrValue;
use crate::error::StreamError;
use crate::tag::Tag;
use std::borrow::Cow;
use tagstream_schema::{AttributeKind, ElementSchema};
use tagstream_types::{Escaper, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    /// The complete element, self-closed if empty.
    Whole,
    /// Only the opening tag.
    Start,
}

/// Validates `tag` against `schema` and renders it.
///
/// Checks run in a fixed order: content conflicts, emptiness, supplied
/// attributes in supplied order, then required attributes in declaration
/// order.
pub(crate) fn render_tag<E: Escaper + ?Sized>(
    schema: &ElementSchema,
    tag: &Tag,
    mode: RenderMode,
    escaper: &E,
) -> Result<Markup, StreamError> {
    let name = schema.name();

    if tag.has_conflicting_content() {
        return Err(StreamError::ConflictingContent(name.to_string()));
    }
    match mode {
        RenderMode::Start if schema.is_empty() => {
            return Err(StreamError::CannotStartEmptyElement(name.to_string()));
        }
        RenderMode::Start if tag.has_content() => {
            return Err(StreamError::ContentOnStart(name.to_string()));
        }
        RenderMode::Whole if schema.is_empty() && tag.has_content() => {
            return Err(StreamError::ContentOnEmptyElement(name.to_string()));
        }
        _ => {}
    }

    let mut out = String::with_capacity(name.len() * 2 + 5);
    out.push('<');
    out.push_str(name);
    let supplied = render_attributes(schema, tag, escaper, &mut out)?;

    if let Some(missing) = schema
        .required_attributes()
        .find(|spec| !supplied.iter().any(|s| s == spec.name()))
    {
        return Err(StreamError::MissingRequiredAttribute {
            element: name.to_string(),
            attribute: missing.name().to_string(),
            supplied,
        });
    }

    match mode {
        RenderMode::Start => out.push('>'),
        RenderMode::Whole if schema.is_empty() => out.push_str(" />"),
        RenderMode::Whole => {
            out.push('>');
            for piece in tag.contents() {
                piece.render_into(escaper, &mut out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }

    Ok(Markup::trusted(out))
}

/// Renders a closing tag. The caller checks the open-tag stack.
pub(crate) fn render_close(name: &str) -> Markup {
    Markup::trusted(format!("</{}>", name))
}

/// Appends ` name="value"` for every rendered attribute and returns the names
/// that were rendered.
fn render_attributes<E: Escaper + ?Sized>(
    schema: &ElementSchema,
    tag: &Tag,
    escaper: &E,
    out: &mut String,
) -> Result<Vec<String>, StreamError> {
    let element = schema.name();
    let mut supplied = Vec::with_capacity(tag.attributes().len());

    for (name, value) in tag.attributes().iter() {
        let Some(spec) = schema.attribute(name) else {
            return Err(StreamError::UnknownAttribute {
                element: element.to_string(),
                attribute: name.to_string(),
                valid: schema.attribute_names().map(str::to_string).collect(),
            });
        };

        let switch = spec.kind() == AttributeKind::Boolean;
        let (raw, trusted): (Cow<'_, str>, bool) = match value {
            AttrValue::Flag(false) => continue,
            AttrValue::Flag(true) if switch => (Cow::Borrowed(name), false),
            AttrValue::Flag(true) => {
                return Err(StreamError::NotASwitch {
                    element: element.to_string(),
                    attribute: name.to_string(),
                });
            }
            AttrValue::Text(text) => (Cow::Borrowed(text.as_str()), false),
            AttrValue::Markup(markup) => (Cow::Borrowed(markup.as_str()), true),
        };

        // A switch is either absent or spelled as its own name.
        let raw = if switch {
            if !raw.eq_ignore_ascii_case(name) {
                return Err(StreamError::InvalidSwitchValue {
                    element: element.to_string(),
                    attribute: name.to_string(),
                    value: raw.into_owned(),
                });
            }
            Cow::Borrowed(name)
        } else {
            raw
        };

        let raw = if spec.kind() == AttributeKind::Enumerated {
            let lowered = raw.to_lowercase();
            if !spec.allows(&lowered) {
                return Err(StreamError::InvalidEnumValue {
                    element: element.to_string(),
                    attribute: name.to_string(),
                    value: raw.into_owned(),
                    options: spec.options().map(<[String]>::to_vec).unwrap_or_default(),
                });
            }
            Cow::Owned(lowered)
        } else {
            raw
        };

        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        if trusted {
            out.push_str(&raw);
        } else {
            out.push_str(&escaper.escape_attribute(&raw));
        }
        out.push('"');
        supplied.push(name.to_string());
    }

    Ok(supplied)
}
