use thiserror::Error;

/// Errors raised by a [`MarkupStream`](crate::MarkupStream) call.
///
/// All of them are caller defects: nothing is retried and the offending call
/// has no effect on the stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    // --- Schema validation ---
    #[error("<{0}> is not a known element")]
    UnknownElement(String),

    #[error("<{element}> has no attribute '{attribute}' (only {})", .valid.join(", "))]
    UnknownAttribute {
        element: String,
        attribute: String,
        valid: Vec<String>,
    },

    #[error(
        "in <{element} {attribute}=\"{value}\">: value of attribute {attribute} must be one of {}",
        .options.join(", ")
    )]
    InvalidEnumValue {
        element: String,
        attribute: String,
        value: String,
        options: Vec<String>,
    },

    #[error("in <{element}>: attribute {attribute} takes a value, not an on/off switch")]
    NotASwitch { element: String, attribute: String },

    #[error(
        "in <{element} {attribute}=\"{value}\">: switch attribute {attribute} takes true, false or its own name"
    )]
    InvalidSwitchValue {
        element: String,
        attribute: String,
        value: String,
    },

    #[error(
        "<{element}> requires a value for the '{attribute}' attribute (only given attributes {})",
        list_or_none(.supplied)
    )]
    MissingRequiredAttribute {
        element: String,
        attribute: String,
        supplied: Vec<String>,
    },

    // --- Structure ---
    #[error("<{0} /> is an empty element and cannot contain any content")]
    ContentOnEmptyElement(String),

    #[error("<{0} /> is an empty element; it cannot just be started")]
    CannotStartEmptyElement(String),

    #[error("for <{0}>: a tag that is only started cannot include content")]
    ContentOnStart(String),

    #[error("for <{0}>: give either separate content pieces or one bulk content list, not both")]
    ConflictingContent(String),

    #[error("cannot close </{0}>: there are no tags waiting to be closed")]
    NoOpenTags(String),

    #[error("cannot close </{requested}>: other open tags still need to be closed (<{expected}> is next)")]
    MismatchedClose { requested: String, expected: String },

    #[error("tags still need to be closed ({})", .0.join(", "))]
    UnclosedTags(Vec<String>),

    #[error("the markup stream has already been finished")]
    Finished,
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
