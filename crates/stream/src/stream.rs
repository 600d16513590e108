use crate::error::StreamError;
use crate::render::{RenderMode, render_close, render_tag};
use crate::tag::Tag;
use tagstream_schema::{ElementSchema, SchemaRegistry};
use tagstream_types::{Content, Escaper, Markup, XmlEscaper};

/// One markup-generation session.
///
/// Owns its output buffer and open-tag stack; the registry is only borrowed.
/// Create one stream per document (or per thread) rather than sharing one.
pub struct MarkupStream<'r, E: Escaper = XmlEscaper> {
    registry: &'r SchemaRegistry,
    escaper: E,
    items: Vec<Markup>,
    stack: Vec<String>,
    finished: bool,
}

impl<'r> MarkupStream<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self::with_escaper(registry, XmlEscaper)
    }
}

impl MarkupStream<'static> {
    /// A stream over the built-in XHTML registry.
    pub fn xhtml() -> Self {
        Self::new(SchemaRegistry::xhtml())
    }
}

impl<'r, E: Escaper> MarkupStream<'r, E> {
    pub fn with_escaper(registry: &'r SchemaRegistry, escaper: E) -> Self {
        Self {
            registry,
            escaper,
            items: Vec::new(),
            stack: Vec::new(),
            finished: false,
        }
    }

    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// Validates and renders a tag without touching the stream.
    ///
    /// Useful for building fragments that are later nested as content.
    pub fn render(&self, tag: impl Into<Tag>) -> Result<Markup, StreamError> {
        self.ensure_open()?;
        let tag = tag.into();
        let schema = self.schema(tag.name())?;
        render_tag(schema, &tag, RenderMode::Whole, &self.escaper)
    }

    /// Renders a complete element and appends it to the stream.
    ///
    /// The fragment is also returned so it can be nested in a parent call.
    pub fn element(&mut self, tag: impl Into<Tag>) -> Result<Markup, StreamError> {
        let markup = self.render(tag)?;
        log::trace!("element: {}", markup);
        self.items.push(markup.clone());
        Ok(markup)
    }

    /// Emits only the opening tag and pushes the element on the open-tag stack.
    pub fn start(&mut self, tag: impl Into<Tag>) -> Result<(), StreamError> {
        self.ensure_open()?;
        let tag = tag.into();
        let schema = self.schema(tag.name())?;
        let markup = render_tag(schema, &tag, RenderMode::Start, &self.escaper)?;
        log::trace!("start <{}> at depth {}", tag.name(), self.stack.len());
        self.items.push(markup);
        self.stack.push(schema.name().to_string());
        Ok(())
    }

    /// Closes `name`, which must be the innermost open element.
    pub fn end(&mut self, name: &str) -> Result<(), StreamError> {
        self.ensure_open()?;
        match self.stack.last() {
            None => return Err(StreamError::NoOpenTags(name.to_string())),
            Some(top) if !top.eq_ignore_ascii_case(name) => {
                return Err(StreamError::MismatchedClose {
                    requested: name.to_string(),
                    expected: top.clone(),
                });
            }
            Some(_) => {}
        }
        if let Some(closed) = self.stack.pop() {
            log::trace!("end </{}> at depth {}", closed, self.stack.len());
            self.items.push(render_close(&closed));
        }
        Ok(())
    }

    /// Appends content without schema validation. Text is escaped, markup is
    /// inserted verbatim.
    pub fn write<I, C>(&mut self, contents: I) -> Result<(), StreamError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        self.ensure_open()?;
        let escaper = &self.escaper;
        self.items
            .extend(contents.into_iter().map(|c| Into::<Content>::into(c).to_markup(escaper)));
        Ok(())
    }

    /// Emits `<!-- ... -->` with the lines joined by newlines. The text is not
    /// escaped.
    pub fn comment<I, S>(&mut self, lines: I) -> Result<(), StreamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_open()?;
        let body = join_lines(lines);
        self.items.push(Markup::trusted(format!("<!-- {} -->", body)));
        Ok(())
    }

    /// Emits a verbatim JavaScript block wrapped in a comment guard.
    pub fn script_block<I, S>(&mut self, lines: I) -> Result<(), StreamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ensure_open()?;
        let body = join_lines(lines);
        self.items.push(Markup::trusted(format!(
            "<script type=\"text/javascript\"><!--\n{}\n//--></script>",
            body
        )));
        Ok(())
    }

    /// Closes the session and returns the assembled markup.
    ///
    /// Fails without side effects while tags are still open; after a
    /// successful finish every further call returns [`StreamError::Finished`].
    pub fn finish(&mut self) -> Result<String, StreamError> {
        self.ensure_open()?;
        if !self.stack.is_empty() {
            return Err(StreamError::UnclosedTags(self.stack.clone()));
        }
        self.finished = true;
        let items = std::mem::take(&mut self.items);
        let output: String = items.iter().map(Markup::as_str).collect();
        log::debug!("finished markup stream: {} fragments, {} bytes", items.len(), output.len());
        Ok(output)
    }

    /// Currently open elements, outermost first.
    pub fn open_tags(&self) -> &[String] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        if self.finished {
            Err(StreamError::Finished)
        } else {
            Ok(())
        }
    }

    fn schema(&self, name: &str) -> Result<&'r ElementSchema, StreamError> {
        self.registry
            .get(name)
            .ok_or_else(|| StreamError::UnknownElement(name.to_string()))
    }
}

impl<E: Escaper> Drop for MarkupStream<'_, E> {
    fn drop(&mut self) {
        if !self.finished && !self.stack.is_empty() {
            log::warn!(
                "markup stream dropped with unclosed tags: {}",
                self.stack.join(", ")
            );
        }
    }
}

fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|l| l.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::InputType;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraph() {
        let mut s = MarkupStream::xhtml();
        s.element(Tag::new("p").text("Hello")).unwrap();
        assert_eq!(s.finish().unwrap(), "<p>Hello</p>");
    }

    #[test]
    fn nested_start_end() {
        let mut s = MarkupStream::xhtml();
        s.start("div").unwrap();
        s.start("span").unwrap();
        assert_eq!(s.open_tags(), ["div", "span"]);
        s.end("span").unwrap();
        s.end("div").unwrap();
        assert_eq!(s.finish().unwrap(), "<div><span></span></div>");
    }

    #[test]
    fn element_returns_fragment_and_appends_it() {
        let mut s = MarkupStream::xhtml();
        let b = s.element(Tag::new("b").text("x")).unwrap();
        assert_eq!(b.as_str(), "<b>x</b>");
        assert_eq!(s.finish().unwrap(), "<b>x</b>");
    }

    #[test]
    fn rendered_fragments_nest_without_reescaping() {
        let mut s = MarkupStream::xhtml();
        let b = s.render(Tag::new("b").text("a & b")).unwrap();
        s.element(Tag::new("p").child(b).text(" <c>")).unwrap();
        assert_eq!(s.finish().unwrap(), "<p><b>a &amp; b</b> &lt;c&gt;</p>");
    }

    #[test]
    fn unknown_element() {
        let mut s = MarkupStream::xhtml();
        assert_eq!(s.element("blink"), Err(StreamError::UnknownElement("blink".into())));
        assert_eq!(s.start("blink"), Err(StreamError::UnknownElement("blink".into())));
    }

    #[test]
    fn mismatched_close_reports_expected() {
        let mut s = MarkupStream::xhtml();
        s.start("div").unwrap();
        assert_eq!(
            s.end("span"),
            Err(StreamError::MismatchedClose {
                requested: "span".into(),
                expected: "div".into(),
            })
        );
        assert_eq!(s.open_tags(), ["div"]);
        s.end("div").unwrap();
        assert_eq!(s.finish().unwrap(), "<div></div>");
    }

    #[test]
    fn close_with_nothing_open() {
        let mut s = MarkupStream::xhtml();
        assert_eq!(s.end("p"), Err(StreamError::NoOpenTags("p".into())));
    }

    #[test]
    fn finish_with_unclosed_tags_is_retryable() {
        let mut s = MarkupStream::xhtml();
        s.start("div").unwrap();
        s.start("p").unwrap();
        assert_eq!(
            s.finish(),
            Err(StreamError::UnclosedTags(vec!["div".into(), "p".into()]))
        );
        assert!(!s.is_finished());
        s.end("p").unwrap();
        s.end("div").unwrap();
        assert_eq!(s.finish().unwrap(), "<div><p></p></div>");
    }

    #[test]
    fn finished_stream_rejects_everything() {
        let mut s = MarkupStream::xhtml();
        s.finish().unwrap();
        assert!(s.is_finished());
        assert_eq!(s.element("p"), Err(StreamError::Finished));
        assert_eq!(s.start("p"), Err(StreamError::Finished));
        assert_eq!(s.end("p"), Err(StreamError::Finished));
        assert_eq!(s.write(["x"]), Err(StreamError::Finished));
        assert_eq!(s.finish(), Err(StreamError::Finished));
    }

    #[test]
    fn failed_calls_leave_no_trace() {
        let mut s = MarkupStream::xhtml();
        s.start("div").unwrap();
        assert!(s.element(Tag::new("br").text("x")).is_err());
        assert!(s.start("br").is_err());
        assert!(s.element(Tag::new("p").attr("bogus", "1")).is_err());
        assert!(s.element("param").is_err());
        assert!(s.end("p").is_err());
        assert_eq!(s.depth(), 1);
        s.end("div").unwrap();
        assert_eq!(s.finish().unwrap(), "<div></div>");
    }

    #[test]
    fn failed_start_leaves_stack_untouched() {
        let mut s = MarkupStream::xhtml();
        s.start("div").unwrap();
        let err = s.start(Tag::new("form").attr("method", "post")).unwrap_err();
        assert!(matches!(
            err,
            StreamError::MissingRequiredAttribute { ref attribute, .. } if attribute == "action"
        ));
        assert_eq!(s.open_tags(), ["div"]);
        assert_eq!(
            s.end("form"),
            Err(StreamError::MismatchedClose {
                requested: "form".into(),
                expected: "div".into(),
            })
        );
        s.end("div").unwrap();
        assert_eq!(s.finish().unwrap(), "<div></div>");
    }

    #[test]
    fn write_comment_and_script() {
        let mut s = MarkupStream::xhtml();
        s.write(vec![Content::from("1 < 2"), Markup::trusted("<hr />").into()])
            .unwrap();
        s.comment(["generated", "by tagstream"]).unwrap();
        s.script_block(["var x = 1;"]).unwrap();
        assert_eq!(
            s.finish().unwrap(),
            "1 &lt; 2<hr /><!-- generated\nby tagstream -->\
             <script type=\"text/javascript\"><!--\nvar x = 1;\n//--></script>"
        );
    }

    #[test]
    fn input_shortcuts() {
        let mut s = MarkupStream::xhtml();
        for kind in InputType::ALL {
            s.element(Tag::input(kind).attr("name", "f")).unwrap();
        }
        let out = s.finish().unwrap();
        assert!(out.starts_with(r#"<input type="text" name="f" />"#));
        assert!(out.ends_with(r#"<input type="button" name="f" />"#));
    }

    #[test]
    fn custom_escaper() {
        use std::borrow::Cow;

        struct Upper;
        impl Escaper for Upper {
            fn escape_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
                Cow::Owned(raw.to_uppercase())
            }
            fn escape_attribute<'a>(&self, raw: &'a str) -> Cow<'a, str> {
                Cow::Borrowed(raw)
            }
        }

        let mut s = MarkupStream::with_escaper(SchemaRegistry::xhtml(), Upper);
        s.element(Tag::new("p").attr("class", "k").text("hi")).unwrap();
        assert_eq!(s.finish().unwrap(), r#"<p class="k">HI</p>"#);
    }
}
