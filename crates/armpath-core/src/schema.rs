//! Identifier schema
//!
//! An ordered, non-empty sequence of segments describing the canonical path
//! shape of one resource type. Schemas are validated once at construction and
//! never change afterwards, so they can be shared freely between threads.

use crate::error::{ParseError, SchemaError};
use crate::formatter::{FieldValues, format};
use crate::parser::{ParsedIdentifier, parse, parse_insensitive};
use crate::segment::{Segment, SegmentKind};
use crate::validate::{Diagnostics, validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SUBSCRIPTIONS: &str = "subscriptions";
const RESOURCE_GROUPS: &str = "resourceGroups";
const PROVIDERS: &str = "providers";

/// Default field name for the subscription segment
pub const SUBSCRIPTION_ID_FIELD: &str = "subscriptionId";

/// Default field name for the resource group segment
pub const RESOURCE_GROUP_FIELD: &str = "resourceGroup";

/// Path shape of one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct IdentifierSchema {
    segments: Vec<Segment>,
}

impl IdentifierSchema {
    /// Build a schema from explicit segments
    ///
    /// The first two segments must be `subscriptions/{subscriptionId}`. A
    /// segment carries a literal exactly when its kind is a literal kind, and
    /// literals must be non-empty and free of `/`. Field names must be unique
    /// and no literal segment may be named like a field.
    pub fn new(segments: Vec<Segment>) -> Result<Self, SchemaError> {
        if segments.is_empty() {
            return Err(SchemaError::Empty);
        }

        let scoped = matches!(
            segments.as_slice(),
            [first, second, ..]
                if first.kind() == SegmentKind::StaticLiteral
                    && first.expected_literal() == Some(SUBSCRIPTIONS)
                    && second.kind() == SegmentKind::SubscriptionId
        );
        if !scoped {
            return Err(SchemaError::MissingSubscriptionScope);
        }

        let mut fields = HashSet::new();
        for segment in &segments {
            if segment.name().is_empty() {
                return Err(SchemaError::EmptyName(segment.kind().to_string()));
            }
            // parse/format key off the literal, field_names off the kind
            if segment.kind().is_literal() != segment.expected_literal().is_some() {
                return Err(SchemaError::LiteralKindMismatch {
                    segment: segment.name().to_string(),
                    kind: segment.kind(),
                    literal: segment.expected_literal().map(str::to_string),
                });
            }
            if let Some(literal) = segment.expected_literal()
                && (literal.is_empty() || literal.contains('/'))
            {
                return Err(SchemaError::InvalidLiteral {
                    segment: segment.name().to_string(),
                    literal: literal.to_string(),
                });
            }
            if let Some(field) = segment.field_name()
                && !fields.insert(field)
            {
                return Err(SchemaError::DuplicateField(field.to_string()));
            }
        }

        // Literal names may repeat (`staticProviders`), but must never read as a field
        if let Some(segment) = segments
            .iter()
            .filter(|s| s.is_literal())
            .find(|s| fields.contains(s.name()))
        {
            return Err(SchemaError::LiteralNameCollision(
                segment.name().to_string(),
            ));
        }

        Ok(Self { segments })
    }

    /// Start a schema scoped to `subscriptions/{subscriptionId}`
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Build a schema from a path template
    ///
    /// `{field}` marks a value segment. The value after `subscriptions` is a
    /// subscription id, the value after `resourceGroups` a resource group name
    /// and the literal after `providers` a provider namespace.
    ///
    /// ```
    /// use armpath_core::IdentifierSchema;
    ///
    /// let schema = IdentifierSchema::from_template(
    ///     "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroup}",
    /// )
    /// .unwrap();
    /// assert_eq!(schema.len(), 4);
    /// ```
    pub fn from_template(template: &str) -> Result<Self, SchemaError> {
        let invalid = |reason: &str| SchemaError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = template.strip_prefix('/').unwrap_or(template);
        if trimmed.is_empty() {
            return Err(invalid("template is empty"));
        }

        let mut segments = Vec::new();
        let mut previous: Option<&str> = None;
        for token in trimmed.split('/') {
            if token.is_empty() {
                return Err(invalid("empty segment"));
            }

            if let Some(field) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
                if field.is_empty() || field.contains(['{', '}']) {
                    return Err(invalid(&format!("bad placeholder {token:?}")));
                }
                let segment = match previous {
                    Some(SUBSCRIPTIONS) => Segment::subscription_id(field),
                    Some(RESOURCE_GROUPS) => Segment::resource_group_name(field),
                    _ => Segment::user_specified(field),
                };
                segments.push(segment);
                previous = None;
                continue;
            }

            if token.contains(['{', '}']) {
                return Err(invalid(&format!("bad literal {token:?}")));
            }
            let segment = if previous == Some(PROVIDERS) {
                Segment::resource_provider(token)
            } else {
                Segment::static_literal(token)
            };
            segments.push(segment);
            previous = Some(token);
        }

        Self::new(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a schema is validated to be non-empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Value field names in path order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::field_name)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.field_names().any(|f| f == field)
    }

    /// Path template with `{field}` placeholders
    pub fn template(&self) -> String {
        let mut template = String::new();
        for segment in &self.segments {
            template.push('/');
            match segment.expected_literal() {
                Some(literal) => template.push_str(literal),
                None => {
                    template.push('{');
                    template.push_str(segment.name());
                    template.push('}');
                }
            }
        }
        template
    }

    /// Strict, case-sensitive parse for user input
    pub fn parse(&self, input: &str) -> Result<ParsedIdentifier, ParseError> {
        parse(input, self, true)
    }

    /// Case-insensitive parse for normalizing API responses
    ///
    /// Only literals are normalized; upper-cased values survive unchanged.
    pub fn parse_insensitive(&self, input: &str) -> Result<ParsedIdentifier, ParseError> {
        parse_insensitive(input, self)
    }

    /// Emit the canonical string for the given field values
    pub fn format<V: FieldValues + ?Sized>(&self, values: &V) -> String {
        format(values, self)
    }

    /// Configuration-time validator returning `(warnings, errors)`
    pub fn validate(&self, value: &serde_json::Value, field_label: &str) -> Diagnostics {
        validate(value, field_label, self)
    }
}

impl std::fmt::Display for IdentifierSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template())
    }
}

impl TryFrom<Vec<Segment>> for IdentifierSchema {
    type Error = SchemaError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<IdentifierSchema> for Vec<Segment> {
    fn from(schema: IdentifierSchema) -> Self {
        schema.segments
    }
}

impl std::str::FromStr for IdentifierSchema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_template(s)
    }
}

/// Incremental schema construction
///
/// ```
/// use armpath_core::IdentifierSchema;
///
/// let schema = IdentifierSchema::builder()
///     .resource_group()
///     .provider("Microsoft.Kubernetes")
///     .resource("connectedClusters", "connectedClusterName")
///     .build()
///     .unwrap();
/// assert_eq!(
///     schema.template(),
///     "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroup}/providers/Microsoft.Kubernetes/connectedClusters/{connectedClusterName}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    segments: Vec<Segment>,
}

impl SchemaBuilder {
    fn new() -> Self {
        Self {
            segments: vec![
                Segment::static_literal(SUBSCRIPTIONS),
                Segment::subscription_id(SUBSCRIPTION_ID_FIELD),
            ],
        }
    }

    /// `resourceGroups/{resourceGroup}`
    pub fn resource_group(self) -> Self {
        self.resource_group_as(RESOURCE_GROUP_FIELD)
    }

    /// `resourceGroups/{field}`
    pub fn resource_group_as(self, field: impl Into<String>) -> Self {
        self.segment(Segment::static_literal(RESOURCE_GROUPS))
            .segment(Segment::resource_group_name(field))
    }

    /// `providers/{namespace}`
    pub fn provider(self, namespace: impl Into<String>) -> Self {
        self.segment(Segment::static_literal(PROVIDERS))
            .segment(Segment::resource_provider(namespace))
    }

    /// `{resource_type}/{field}`
    pub fn resource(self, resource_type: impl Into<String>, field: impl Into<String>) -> Self {
        self.literal(resource_type)
            .segment(Segment::user_specified(field))
    }

    pub fn literal(self, literal: impl Into<String>) -> Self {
        self.segment(Segment::static_literal(literal))
    }

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn build(self) -> Result<IdentifierSchema, SchemaError> {
        IdentifierSchema::new(self.segments)
    }
}
