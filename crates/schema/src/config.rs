//! Loading custom shorthand tables from JSON.
//!
//! ```json
//! {
//!   "elements": { "note": "block only tone(info|warn)" },
//!   "groups": { "all": "id class" }
//! }
//! ```

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A shorthand element table plus its attribute groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    pub elements: BTreeMap<String, String>,
    #[serde(default)]
    pub groups: BTreeMap<String, String>,
}

impl SchemaConfig {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn compile(&self) -> Result<SchemaRegistry, SchemaError> {
        SchemaRegistry::compile(
            self.elements.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            self.groups.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }
}
