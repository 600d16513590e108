//! Compiled, read-only schema types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Where an element is conventionally valid. Advisory only; the builder does
/// not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Block,
    Head,
    Inline,
}

impl Position {
    /// Maps a shorthand keyword to a position class.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "block" => Some(Position::Block),
            "head" => Some(Position::Head),
            "inline" => Some(Position::Inline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Block => "block",
            Position::Head => "head",
            Position::Inline => "inline",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_keyword(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown position class '{}' (expected block, head or inline)", s))
    }
}

/// The value kind of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeKind {
    #[default]
    Plain,
    Boolean,
    Uri,
    ContentType,
    CharacterSet,
    Script,
    Enumerated,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Plain => "plain",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Uri => "uri",
            AttributeKind::ContentType => "content-type",
            AttributeKind::CharacterSet => "character-set",
            AttributeKind::Script => "script",
            AttributeKind::Enumerated => "enumerated",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specification of one attribute of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    name: String,
    required: bool,
    kind: AttributeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

impl AttributeSpec {
    pub(crate) fn new(
        name: impl Into<String>,
        required: bool,
        kind: AttributeKind,
        options: Option<Vec<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            required,
            kind,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if every render of the owning element must supply this attribute.
    pub fn required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// The allowed values, in declaration order. Only enumerated attributes
    /// have options.
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_deref()
    }

    /// Checks an already lower-cased value against the allowed options.
    /// Attributes that are not enumerated accept any value.
    pub fn allows(&self, value: &str) -> bool {
        match &self.options {
            Some(options) => options.iter().any(|o| o == value),
            None => true,
        }
    }
}

/// The compiled schema of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSchema {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(rename = "empty")]
    is_empty: bool,
    attributes: Vec<AttributeSpec>,
}

impl ElementSchema {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            is_empty: false,
            attributes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The position class, if the shorthand declared one.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// True if the element never carries content and always self-closes.
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    /// Required attributes in declaration order.
    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter().filter(|a| a.required)
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn set_empty(&mut self) {
        self.is_empty = true;
    }

    /// Adds an attribute, replacing an earlier declaration of the same name
    /// in place.
    pub(crate) fn declare(&mut self, spec: AttributeSpec) {
        match self.attributes.iter_mut().find(|a| a.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.attributes.push(spec),
        }
    }

    /// Adds an attribute unless one of the same name is already declared.
    pub(crate) fn declare_default(&mut self, spec: AttributeSpec) {
        if self.attribute(&spec.name).is_none() {
            self.attributes.push(spec);
        }
    }
}
