use crate::element::Position;
use thiserror::Error;

/// Configuration errors raised while compiling a shorthand table.
///
/// The tables are static data, so any of these is a defect in the table
/// rather than a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("<{element}>: malformed attribute token '{token}': {reason}")]
    MalformedToken {
        element: String,
        token: String,
        reason: String,
    },

    #[error("<{element}>: conflicting markers in '{token}': {reason}")]
    ConflictingMarkers {
        element: String,
        token: String,
        reason: String,
    },

    #[error("<{element}>: conflicting position classes '{first}' and '{second}'")]
    ConflictingPosition {
        element: String,
        first: Position,
        second: Position,
    },

    #[error("<{element}>: attribute group '{group}' includes itself ({})", .trail.join(" -> "))]
    GroupCycle {
        element: String,
        group: String,
        trail: Vec<String>,
    },

    #[error("'{0}' is not a valid element name")]
    InvalidElementName(String),

    #[error("Schema configuration JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Json(e.to_string())
    }
}
