use crate::escape::Escaper;
use crate::markup::Markup;

/// One piece of element content: plain text that still needs escaping, or a
/// trusted fragment that is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(Markup),
}

impl Content {
    /// True if this piece would contribute nothing to the output.
    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Markup(markup) => markup.is_empty(),
        }
    }

    /// Appends the encoded form of this piece to `out`.
    pub fn render_into<E: Escaper + ?Sized>(&self, escaper: &E, out: &mut String) {
        match self {
            Content::Text(text) => out.push_str(&escaper.escape_text(text)),
            Content::Markup(markup) => out.push_str(markup.as_str()),
        }
    }

    /// Encodes this piece into a standalone trusted fragment.
    pub fn to_markup<E: Escaper + ?Sized>(&self, escaper: &E) -> Markup {
        match self {
            Content::Text(text) => Markup::trusted(escaper.escape_text(text)),
            Content::Markup(markup) => markup.clone(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Markup(markup)
    }
}

impl From<&Markup> for Content {
    fn from(markup: &Markup) -> Self {
        Content::Markup(markup.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::XmlEscaper;

    #[test]
    fn text_is_escaped_markup_is_not() {
        let mut out = String::new();
        Content::from("a < b").render_into(&XmlEscaper, &mut out);
        Content::from(Markup::trusted("<br />")).render_into(&XmlEscaper, &mut out);
        assert_eq!(out, "a &lt; b<br />");
    }

    #[test]
    fn empty_detection() {
        assert!(Content::from("").is_empty());
        assert!(Content::from(Markup::default()).is_empty());
        assert!(!Content::from(" ").is_empty());
    }
}
