//! Schema registry for a vocabulary of markup elements.
//!
//! Every element is described by a compact shorthand string such as
//! `"inline empty src/* alt name ismap?"`. The registry compiles those
//! strings once into fully expanded [`ElementSchema`]s and is read-only
//! afterwards, so a single registry can back any number of markup sessions.
//!
//! ## Shorthand grammar
//!
//! - `block`, `head`, `inline`: the element's position class
//! - `empty`: the element never has content and always self-closes
//! - `only`: do not add the shared `all` attribute group
//! - any attribute-group name: expanded in place, recursively
//! - anything else: one attribute descriptor, a name followed by markers
//!
//! | Marker      | Meaning                          |
//! |-------------|----------------------------------|
//! | `*`         | required                         |
//! | `?`         | boolean switch                   |
//! | `/`         | URI                              |
//! | `/t`        | content type                     |
//! | `/c`        | character set                    |
//! | `/j`        | script                           |
//! | `(a\|b\|c)` | enumerated, one of the options   |

pub mod config;
pub mod descriptor;
pub mod element;
pub mod error;
pub mod registry;
pub mod xhtml;

pub use config::SchemaConfig;
pub use descriptor::parse_descriptor;
pub use element::{AttributeKind, AttributeSpec, ElementSchema, Position};
pub use error::SchemaError;
pub use registry::{ALL_GROUP, SchemaRegistry};
