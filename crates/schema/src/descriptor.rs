//! A `nom`-based parser for single attribute descriptors such as `src/*`,
//! `checked?` or `align(left|center|right)`.

use crate::element::{AttributeKind, AttributeSpec};
use crate::error::SchemaError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, value},
    multi::{many0, separated_list1},
    sequence::{delimited, pair},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Marker {
    Required,
    Kind(AttributeKind),
    Options(Vec<String>),
}

// --- Main Public Parser ---

/// Parses one attribute descriptor token belonging to `element`.
pub fn parse_descriptor(element: &str, token: &str) -> Result<AttributeSpec, SchemaError> {
    let (name, markers) = match descriptor(token) {
        Ok((_, parsed)) => parsed,
        Err(e) => {
            return Err(SchemaError::MalformedToken {
                element: element.to_string(),
                token: token.to_string(),
                reason: e.to_string(),
            });
        }
    };

    let conflict = |reason: String| SchemaError::ConflictingMarkers {
        element: element.to_string(),
        token: token.to_string(),
        reason,
    };

    let mut required = false;
    let mut kind: Option<AttributeKind> = None;
    let mut options = None;
    for marker in markers {
        let marked = match marker {
            Marker::Required => {
                required = true;
                continue;
            }
            Marker::Kind(k) => k,
            Marker::Options(opts) => {
                if options.is_some() {
                    return Err(conflict("more than one option list".to_string()));
                }
                options = Some(opts);
                AttributeKind::Enumerated
            }
        };
        match kind {
            Some(existing) if existing != marked => {
                return Err(conflict(format!("both {} and {}", existing, marked)));
            }
            _ => kind = Some(marked),
        }
    }

    let kind = kind.unwrap_or_default();
    if required && kind == AttributeKind::Boolean {
        return Err(conflict("a boolean switch cannot be required".to_string()));
    }

    // Supplied names and enumerated values are lowercased before lookup.
    let options = options.map(|opts| opts.iter().map(|o| o.to_lowercase()).collect());
    Ok(AttributeSpec::new(name.to_ascii_lowercase(), required, kind, options))
}

/// Checks that `name` is a usable element or attribute name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    all_consuming(identifier).parse(name).is_ok()
}

// --- Combinators ---

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

fn is_option_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')' | '|')
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_name_char).parse(input)
}

fn option_list(input: &str) -> IResult<&str, Vec<String>> {
    map(
        delimited(
            char('('),
            separated_list1(char('|'), take_while1(is_option_char)),
            char(')'),
        ),
        |opts: Vec<&str>| opts.into_iter().map(str::to_string).collect(),
    )
    .parse(input)
}

fn marker(input: &str) -> IResult<&str, Marker> {
    alt((
        value(Marker::Required, char('*')),
        value(Marker::Kind(AttributeKind::Boolean), char('?')),
        // Two-character markers must be tried before the bare URI slash.
        value(Marker::Kind(AttributeKind::ContentType), tag("/t")),
        value(Marker::Kind(AttributeKind::CharacterSet), tag("/c")),
        value(Marker::Kind(AttributeKind::Script), tag("/j")),
        value(Marker::Kind(AttributeKind::Uri), char('/')),
        map(option_list, Marker::Options),
    ))
    .parse(input)
}

fn descriptor(input: &str) -> IResult<&str, (&str, Vec<Marker>)> {
    all_consuming(pair(identifier, many0(marker))).parse(input)
}
