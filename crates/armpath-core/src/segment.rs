//! Segment model
//!
//! A segment describes one `/`-delimited element of a resource path. It either
//! matches a literal token or captures exactly one value, never both.

use serde::{Deserialize, Serialize};

/// Kind of a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Fixed keyword such as `subscriptions` or `connectedClusters`
    StaticLiteral,
    /// Value following `subscriptions`
    SubscriptionId,
    /// Value following `resourceGroups`
    ResourceGroupName,
    /// Provider namespace following `providers`, e.g. `Microsoft.Kubernetes`
    ResourceProviderNamespace,
    /// Any other user-chosen name
    UserSpecifiedName,
}

impl SegmentKind {
    /// Whether segments of this kind match a literal instead of capturing a value
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SegmentKind::StaticLiteral | SegmentKind::ResourceProviderNamespace
        )
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentKind::StaticLiteral => write!(f, "static"),
            SegmentKind::SubscriptionId => write!(f, "subscription"),
            SegmentKind::ResourceGroupName => write!(f, "resource-group"),
            SegmentKind::ResourceProviderNamespace => write!(f, "provider"),
            SegmentKind::UserSpecifiedName => write!(f, "name"),
        }
    }
}

/// One element of an identifier schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    kind: SegmentKind,

    /// Field name for value segments, diagnostic name for literal segments
    name: String,

    /// Canonical text for literal segments
    literal: Option<String>,
}

impl Segment {
    /// Literal keyword, named after its text (`subscriptions` -> `staticSubscriptions`)
    pub fn static_literal(literal: impl Into<String>) -> Self {
        let literal = literal.into();
        Self {
            kind: SegmentKind::StaticLiteral,
            name: static_name(&literal),
            literal: Some(literal),
        }
    }

    /// Literal keyword with an explicit diagnostic name
    pub fn named_literal(name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::StaticLiteral,
            name: name.into(),
            literal: Some(literal.into()),
        }
    }

    /// Provider namespace such as `Microsoft.Kubernetes`
    pub fn resource_provider(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        Self {
            kind: SegmentKind::ResourceProviderNamespace,
            name: static_name(&namespace),
            literal: Some(namespace),
        }
    }

    pub fn subscription_id(field: impl Into<String>) -> Self {
        Self::value(SegmentKind::SubscriptionId, field)
    }

    pub fn resource_group_name(field: impl Into<String>) -> Self {
        Self::value(SegmentKind::ResourceGroupName, field)
    }

    pub fn user_specified(field: impl Into<String>) -> Self {
        Self::value(SegmentKind::UserSpecifiedName, field)
    }

    fn value(kind: SegmentKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            name: field.into(),
            literal: None,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Name used in diagnostics; equals the field name for value segments
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical literal text (literal segments only)
    pub fn expected_literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Name under which the captured value is exposed (value segments only)
    pub fn field_name(&self) -> Option<&str> {
        if self.kind.is_literal() {
            None
        } else {
            Some(&self.name)
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// Compare a token against this segment's literal
    ///
    /// Always false for value segments.
    pub fn matches_literal(&self, token: &str, case_sensitive: bool) -> bool {
        match self.literal.as_deref() {
            Some(literal) if case_sensitive => literal == token,
            Some(literal) => literal.eq_ignore_ascii_case(token),
            None => false,
        }
    }
}

/// Diagnostic name for a literal: `static` + its alphanumerics, first letter raised
fn static_name(literal: &str) -> String {
    let mut name = String::from("static");
    let mut chars = literal.chars().filter(|c| c.is_ascii_alphanumeric());
    if let Some(first) = chars.next() {
        name.push(first.to_ascii_uppercase());
    }
    name.extend(chars);
    name
}
