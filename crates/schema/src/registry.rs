use crate::descriptor::{is_valid_name, parse_descriptor};
use crate::element::{ElementSchema, Position};
use crate::error::SchemaError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Name of the attribute group added to every element not marked `only`.
pub const ALL_GROUP: &str = "all";

const EMPTY_KEYWORD: &str = "empty";
const ONLY_KEYWORD: &str = "only";

/// Maps element names to their compiled schema.
///
/// Built once by [`SchemaRegistry::compile`] and never mutated afterwards,
/// so it can be shared freely between markup sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    elements: BTreeMap<String, ElementSchema>,
}

/// How a newly parsed attribute treats an existing declaration of the same name.
#[derive(Debug, Clone, Copy)]
enum Declare {
    Replace,
    KeepExisting,
}

impl SchemaRegistry {
    /// Compiles an element shorthand table and an attribute-group table.
    ///
    /// Fails on the first malformed entry; see [`SchemaError`].
    pub fn compile<'a, E, G>(elements: E, groups: G) -> Result<Self, SchemaError>
    where
        E: IntoIterator<Item = (&'a str, &'a str)>,
        G: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let groups: HashMap<&str, &str> = groups.into_iter().collect();
        let mut compiled = BTreeMap::new();

        for (name, shorthand) in elements {
            let schema = compile_element(name, shorthand, &groups)?;
            compiled.insert(schema.name().to_string(), schema);
        }

        let registry = Self { elements: compiled };
        log::debug!(
            "Compiled schema registry: {} elements, {} attribute declarations",
            registry.len(),
            registry
                .elements
                .values()
                .map(|e| e.attributes().len())
                .sum::<usize>()
        );
        Ok(registry)
    }

    /// Looks up an element; names are matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&ElementSchema> {
        match self.elements.get(name) {
            Some(schema) => Some(schema),
            None => self.elements.get(&name.to_ascii_lowercase()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Element names in lexical order.
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementSchema> {
        self.elements.values()
    }

    /// Elements declared with the given position class, in lexical order.
    pub fn elements_at(&self, position: Position) -> impl Iterator<Item = &ElementSchema> {
        self.elements
            .values()
            .filter(move |e| e.position() == Some(position))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn compile_element(
    name: &str,
    shorthand: &str,
    groups: &HashMap<&str, &str>,
) -> Result<ElementSchema, SchemaError> {
    if !is_valid_name(name) {
        return Err(SchemaError::InvalidElementName(name.to_string()));
    }

    let mut schema = ElementSchema::new(name.to_ascii_lowercase());
    let mut add_all = true;

    for token in shorthand.split_whitespace() {
        if let Some(position) = Position::from_keyword(token) {
            match schema.position() {
                Some(first) if first != position => {
                    return Err(SchemaError::ConflictingPosition {
                        element: name.to_string(),
                        first,
                        second: position,
                    });
                }
                _ => schema.set_position(position),
            }
            continue;
        }
        match token {
            EMPTY_KEYWORD => schema.set_empty(),
            ONLY_KEYWORD => add_all = false,
            _ => expand(&mut schema, token, groups, Declare::Replace, &mut Vec::new())?,
        }
    }

    if add_all && groups.contains_key(ALL_GROUP) {
        expand(
            &mut schema,
            ALL_GROUP,
            groups,
            Declare::KeepExisting,
            &mut Vec::new(),
        )?;
    }

    Ok(schema)
}

/// Declares the attribute(s) named by `token`, expanding group names
/// recursively. `trail` holds the groups currently being expanded.
fn expand<'a>(
    schema: &mut ElementSchema,
    token: &'a str,
    groups: &HashMap<&'a str, &'a str>,
    mode: Declare,
    trail: &mut Vec<&'a str>,
) -> Result<(), SchemaError> {
    let Some(&members) = groups.get(token) else {
        let spec = parse_descriptor(schema.name(), token)?;
        match mode {
            Declare::Replace => schema.declare(spec),
            Declare::KeepExisting => schema.declare_default(spec),
        }
        return Ok(());
    };

    if trail.contains(&token) {
        let mut cycle: Vec<String> = trail.iter().map(|g| g.to_string()).collect();
        cycle.push(token.to_string());
        return Err(SchemaError::GroupCycle {
            element: schema.name().to_string(),
            group: token.to_string(),
            trail: cycle,
        });
    }

    trail.push(token);
    for member in members.split_whitespace() {
        expand(schema, member, groups, mode, trail)?;
    }
    trail.pop();
    Ok(())
}
