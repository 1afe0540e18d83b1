//! Configuration-time validators
//!
//! Pure functions in the `(warnings, errors)` shape plug-in validators are
//! expected to return. Nothing here performs I/O.

use crate::error::ValidationError;
use crate::parser::parse;
use crate::schema::IdentifierSchema;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// `(warnings, errors)`
pub type Diagnostics = (Vec<String>, Vec<String>);

static GUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

static RESOURCE_GROUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\w._()]+$").unwrap());

const RESOURCE_GROUP_MAX_LEN: usize = 90;

/// Check that `value` is a string that strictly parses against `schema`
///
/// A non-string value yields exactly one error naming the label and the
/// type found. A parse failure yields exactly one error embedding the input
/// and the parser's diagnostic. Success yields nothing.
pub fn validate(value: &Value, field_label: &str, schema: &IdentifierSchema) -> Diagnostics {
    let input = match as_str(value, field_label) {
        Ok(input) => input,
        Err(e) => return (Vec::new(), vec![e.to_string()]),
    };

    match parse(input, schema, true) {
        Ok(_) => (Vec::new(), Vec::new()),
        Err(e) => (Vec::new(), vec![format!("{field_label}: {e}")]),
    }
}

/// Bind a schema into a reusable validator closure
pub fn validator_for(schema: &IdentifierSchema) -> impl Fn(&Value, &str) -> Diagnostics + '_ {
    move |value, label| validate(value, label, schema)
}

/// Subscription ids must be GUIDs
pub fn validate_subscription_id(value: &Value, field_label: &str) -> Diagnostics {
    let result = as_str(value, field_label).and_then(|v| check_subscription_id(v, field_label));
    into_diagnostics(result)
}

/// Resource group names: 1-90 of alphanumerics, `_ - . ( )`, no trailing `.`
pub fn validate_resource_group_name(value: &Value, field_label: &str) -> Diagnostics {
    let result = as_str(value, field_label).and_then(|v| check_resource_group_name(v, field_label));
    into_diagnostics(result)
}

pub fn check_subscription_id(value: &str, field_label: &str) -> Result<(), ValidationError> {
    if GUID_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSubscriptionId {
            label: field_label.to_string(),
            value: value.to_string(),
        })
    }
}

pub fn check_resource_group_name(value: &str, field_label: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidResourceGroupName {
        label: field_label.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if value.is_empty() {
        return Err(invalid("cannot be empty"));
    }
    if value.chars().count() > RESOURCE_GROUP_MAX_LEN {
        return Err(invalid("may be at most 90 characters"));
    }
    if value.ends_with('.') {
        return Err(invalid("cannot end with a period"));
    }
    if !RESOURCE_GROUP_PATTERN.is_match(value) {
        return Err(invalid(
            "may only contain alphanumerics, underscores, hyphens, periods and parentheses",
        ));
    }
    Ok(())
}

fn as_str<'a>(value: &'a Value, field_label: &str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::UnexpectedType {
            label: field_label.to_string(),
            found: type_name(value).to_string(),
        })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn into_diagnostics(result: Result<(), ValidationError>) -> Diagnostics {
    match result {
        Ok(()) => (Vec::new(), Vec::new()),
        Err(e) => (Vec::new(), vec![e.to_string()]),
    }
}
