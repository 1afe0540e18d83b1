//! Typed resource identifiers
//!
//! Resource-specific code projects a [`ParsedIdentifier`] into its own struct
//! and hands field values back for formatting. Parsing, formatting and
//! validation all go through the shared engine.

use crate::error::Result;
use crate::formatter::format;
use crate::parser::{ParsedIdentifier, parse, parse_insensitive};
use crate::schema::IdentifierSchema;
use crate::validate::{Diagnostics, validate};

pub trait ResourceId: Sized {
    /// Path shape shared by every identifier of this type
    fn schema() -> &'static IdentifierSchema;

    /// Build the typed identifier from a parse result
    fn from_parsed(parsed: &ParsedIdentifier) -> Result<Self>;

    /// `(field name, value)` for every value segment of [`Self::schema`]
    fn field_values(&self) -> Vec<(&'static str, &str)>;

    /// Canonical string form
    fn id(&self) -> String {
        format(self.field_values().as_slice(), Self::schema())
    }

    /// Strict parse for user-supplied input
    fn parse(input: &str) -> Result<Self> {
        Self::from_parsed(&parse(input, Self::schema(), true)?)
    }

    /// Lenient parse for identifiers returned by the remote API
    fn parse_insensitively(input: &str) -> Result<Self> {
        Self::from_parsed(&parse_insensitive(input, Self::schema())?)
    }

    fn validate(value: &serde_json::Value, field_label: &str) -> Diagnostics {
        validate(value, field_label, Self::schema())
    }
}
