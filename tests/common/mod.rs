use tagstream::{MarkupStream, SchemaRegistry};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initializes test logging once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fresh stream over the built-in XHTML registry.
pub fn xhtml_stream() -> MarkupStream<'static> {
    init_logging();
    MarkupStream::new(SchemaRegistry::xhtml())
}

/// Names of all empty elements in the built-in registry.
pub fn empty_elements() -> Vec<&'static str> {
    SchemaRegistry::xhtml()
        .elements()
        .filter(|e| e.is_empty())
        .map(|e| e.name())
        .collect()
}

/// Names of all non-empty elements with no required attributes.
pub fn freely_startable_elements() -> Vec<&'static str> {
    SchemaRegistry::xhtml()
        .elements()
        .filter(|e| !e.is_empty() && e.required_attributes().next().is_none())
        .map(|e| e.name())
        .collect()
}
