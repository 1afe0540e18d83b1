//! Resource identifier parser
//!
//! Walks the schema's segments and the input's `/`-separated tokens in
//! lock-step, one token per segment. There is no backtracking: the schema
//! fixes what every position means.

use crate::error::{ParseError, Result};
use crate::schema::IdentifierSchema;
use serde::Serialize;
use std::collections::BTreeMap;

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedIdentifier {
    /// The string exactly as it was given to the parser
    input: String,

    /// The same path with every literal in the schema's canonical casing
    canonical: String,

    /// Captured values keyed by field name
    values: BTreeMap<String, String>,
}

impl ParsedIdentifier {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Canonical form of the parsed path
    ///
    /// For a strict parse this equals the input (modulo a missing leading
    /// slash). For an insensitive parse literals take the schema's casing
    /// while captured values keep the casing they arrived with.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Value of a field the caller expects the schema to define
    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field)
            .ok_or_else(|| ParseError::SegmentNotSpecified {
                input: self.input.clone(),
                segment: field.to_string(),
            })
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn into_values(self) -> BTreeMap<String, String> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `input` against `schema`
///
/// With `case_sensitive` set, literal segments must match the schema exactly;
/// this is the mode for user-supplied configuration. Without it, literals
/// compare ASCII case-insensitively. Captured values are never case-folded.
pub fn parse(
    input: &str,
    schema: &IdentifierSchema,
    case_sensitive: bool,
) -> Result<ParsedIdentifier> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let path = input.strip_prefix('/').unwrap_or(input);
    let mut tokens = path.split('/');
    let mut values = BTreeMap::new();
    let mut canonical = String::with_capacity(input.len() + 1);

    for segment in schema.segments() {
        let token = tokens.next();
        let not_specified = || ParseError::SegmentNotSpecified {
            input: input.to_string(),
            segment: segment.name().to_string(),
        };

        canonical.push('/');
        match segment.expected_literal() {
            Some(literal) => {
                if !token.is_some_and(|t| segment.matches_literal(t, case_sensitive)) {
                    return Err(not_specified());
                }
                canonical.push_str(literal);
            }
            None => {
                let value = token.filter(|t| !t.is_empty()).ok_or_else(not_specified)?;
                values.insert(segment.name().to_string(), value.to_string());
                canonical.push_str(value);
            }
        }
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(ParseError::SegmentCountMismatch {
            input: input.to_string(),
            expected: schema.len(),
            found: schema.len() + trailing,
        });
    }

    Ok(ParsedIdentifier {
        input: input.to_string(),
        canonical,
        values,
    })
}

/// Parse a value echoed back by a remote API
///
/// Tolerates any casing of literal segments but is as strict as [`parse`]
/// about segment count and order. Use it to normalize server data before
/// comparing or persisting it, never to validate user input. Values keep
/// their casing: `/SUBSCRIPTIONS/SUB` normalizes to `/subscriptions/SUB`.
pub fn parse_insensitive(input: &str, schema: &IdentifierSchema) -> Result<ParsedIdentifier> {
    parse(input, schema, false)
}

#[cfg(test)]
mod tests;
