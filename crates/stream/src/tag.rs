//! The description of one element call.

use crate::attributes::{AttrValue, Attributes};
use std::fmt;
use tagstream_types::{Content, Markup};

/// The ten `<input>` types, usable as shortcuts through [`Tag::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Password,
    Checkbox,
    Radio,
    Submit,
    Reset,
    File,
    Hidden,
    Image,
    Button,
}

impl InputType {
    pub const ALL: [InputType; 10] = [
        InputType::Text,
        InputType::Password,
        InputType::Checkbox,
        InputType::Radio,
        InputType::Submit,
        InputType::Reset,
        InputType::File,
        InputType::Hidden,
        InputType::Image,
        InputType::Button,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Checkbox => "checkbox",
            InputType::Radio => "radio",
            InputType::Submit => "submit",
            InputType::Reset => "reset",
            InputType::File => "file",
            InputType::Hidden => "hidden",
            InputType::Image => "image",
            InputType::Button => "button",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element invocation: its name, attributes and content.
///
/// Content is given either piece by piece ([`child`](Tag::child),
/// [`text`](Tag::text), [`markup`](Tag::markup)) or as one bulk list
/// ([`children`](Tag::children)). Mixing both is rejected when the tag is
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
    pieces: Vec<Content>,
    bulk: Option<Vec<Content>>,
    input_type: Option<InputType>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            pieces: Vec::new(),
            bulk: None,
            input_type: None,
        }
    }

    /// An `<input>` whose `type` is fixed to `kind`. A later `type` attribute
    /// is ignored.
    pub fn input(kind: InputType) -> Self {
        let mut tag = Tag::new("input");
        tag.attributes.insert("type", kind.as_str());
        tag.input_type = Some(kind);
        tag
    }

    pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value.into());
        self
    }

    /// Sets the attribute only when `value` is `Some`.
    pub fn attr_opt<V: Into<AttrValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn attrs(mut self, attributes: impl Into<Attributes>) -> Self {
        let attributes: Attributes = attributes.into();
        for (name, value) in attributes.iter() {
            self.set_attr(name, value.clone());
        }
        self
    }

    pub fn child(mut self, content: impl Into<Content>) -> Self {
        self.pieces.push(content.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Content::Text(text.into()))
    }

    pub fn markup(self, markup: Markup) -> Self {
        self.child(Content::Markup(markup))
    }

    /// Supplies the whole body at once.
    pub fn children<I, C>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        self.bulk
            .get_or_insert_with(Vec::new)
            .extend(contents.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub(crate) fn has_conflicting_content(&self) -> bool {
        self.bulk.is_some() && !self.pieces.is_empty()
    }

    /// The body pieces, from whichever source was used.
    pub(crate) fn contents(&self) -> &[Content] {
        self.bulk.as_deref().unwrap_or(&self.pieces)
    }

    pub(crate) fn has_content(&self) -> bool {
        self.contents().iter().any(|c| !c.is_empty())
    }

    fn set_attr(&mut self, name: &str, value: AttrValue) {
        if let Some(kind) = self.input_type {
            if name.eq_ignore_ascii_case("type") {
                log::debug!("<input> type is fixed to '{}'; ignoring explicit type", kind);
                return;
            }
        }
        self.attributes.insert(name, value);
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_shortcut_fixes_type() {
        let tag = Tag::input(InputType::Checkbox)
            .attr("type", "text")
            .attr("name", "agree");
        let pairs: Vec<_> = tag.attributes().iter().map(|(n, _)| n).collect();
        assert_eq!(pairs, ["type", "name"]);
        assert_eq!(
            tag.attributes().get("type"),
            Some(&AttrValue::Text("checkbox".into()))
        );
    }

    #[test]
    fn bulk_and_pieces_conflict() {
        let tag = Tag::new("p").text("a").children(["b"]);
        assert!(tag.has_conflicting_content());
        assert!(!Tag::new("p").children(["a", "b"]).has_conflicting_content());
    }

    #[test]
    fn empty_strings_are_not_content() {
        assert!(!Tag::new("br").text("").has_content());
        assert!(Tag::new("p").text(" ").has_content());
        assert!(!Tag::new("p").children(Vec::<String>::new()).has_content());
    }

    #[test]
    fn every_input_type_is_listed() {
        let names: Vec<_> = InputType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"hidden"));
    }
}
