//! Identifier engine error types

use crate::segment::SegmentKind;
use thiserror::Error;

/// Errors produced while parsing a resource identifier against a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("parsing an empty resource id")]
    Empty,

    #[error("parsing {input:?}: segment {segment:?} not specified")]
    SegmentNotSpecified { input: String, segment: String },

    #[error("parsing {input:?}: expected {expected} segments but found {found}")]
    SegmentCountMismatch {
        input: String,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    /// Name of the offending segment, if the error points at one
    pub fn segment(&self) -> Option<&str> {
        match self {
            ParseError::SegmentNotSpecified { segment, .. } => Some(segment),
            _ => None,
        }
    }

    /// The input that failed to parse (empty for [`ParseError::Empty`])
    pub fn input(&self) -> &str {
        match self {
            ParseError::Empty => "",
            ParseError::SegmentNotSpecified { input, .. }
            | ParseError::SegmentCountMismatch { input, .. } => input,
        }
    }
}

/// Errors raised while constructing an identifier schema
///
/// These are programmer errors in a schema definition, surfaced at
/// construction time so that parse and format never have to consider them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema has no segments")]
    Empty,

    #[error("schema must start with subscriptions/{{subscriptionId}}")]
    MissingSubscriptionScope,

    #[error("field {0:?} is used by more than one segment")]
    DuplicateField(String),

    #[error("segment {0:?} has an empty name")]
    EmptyName(String),

    #[error("segment {segment:?}: kind {kind} does not agree with literal {literal:?}")]
    LiteralKindMismatch {
        segment: String,
        kind: SegmentKind,
        literal: Option<String>,
    },

    #[error("literal segment name {0:?} collides with a field name")]
    LiteralNameCollision(String),

    #[error("segment {segment:?} has an invalid literal {literal:?}")]
    InvalidLiteral { segment: String, literal: String },

    #[error("invalid path template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },
}

/// Errors from the optional format checks layered on top of parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label}: expected a string but got {found}")]
    UnexpectedType { label: String, found: String },

    #[error("{label}: {value:?} is not a valid subscription id (expected a GUID)")]
    InvalidSubscriptionId { label: String, value: String },

    #[error("{label}: {value:?} is not a valid resource group name: {reason}")]
    InvalidResourceGroupName {
        label: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
