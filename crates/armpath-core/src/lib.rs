//! armpath Core
//!
//! Hierarchical resource identifier engine. A resource type's fully
//! qualified path is described as data (an [`IdentifierSchema`]), and one
//! generic parser and formatter work over any schema.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │          resource CRUD layer / armpath CLI        │
//! └───────┬──────────────┬──────────────┬────────────┘
//!         │ parse        │ format       │ validate
//! ┌───────▼──────────────▼──────────────▼────────────┐
//! │                  armpath-core                     │
//! │  ┌────────┐ ┌───────────┐ ┌──────────────────┐   │
//! │  │ Parser │ │ Formatter │ │ Validator adapter│   │
//! │  └───┬────┘ └─────┬─────┘ └────────┬─────────┘   │
//! │      └────────────┼────────────────┘             │
//! │          ┌────────▼─────────┐                    │
//! │          │ IdentifierSchema │ (Segment, ...)     │
//! │          └──────────────────┘                    │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use armpath_core::IdentifierSchema;
//!
//! let schema = IdentifierSchema::builder()
//!     .resource_group()
//!     .provider("Microsoft.Kubernetes")
//!     .resource("connectedClusters", "connectedClusterName")
//!     .build()
//!     .unwrap();
//!
//! let id = "/SUBSCRIPTIONS/sub/RESOURCEGROUPS/rg/PROVIDERS/MICROSOFT.KUBERNETES/CONNECTEDCLUSTERS/c1";
//! assert!(schema.parse(id).is_err());
//!
//! let parsed = schema.parse_insensitive(id).unwrap();
//! assert_eq!(parsed.get("connectedClusterName"), Some("c1"));
//! assert_eq!(
//!     schema.format(&parsed),
//!     "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Kubernetes/connectedClusters/c1"
//! );
//! ```

pub mod error;
pub mod formatter;
pub mod parser;
pub mod schema;
pub mod segment;
pub mod typed;
pub mod validate;

// Re-exports
pub use error::{ParseError, Result, SchemaError, ValidationError};
pub use formatter::{FieldValues, format};
pub use parser::{ParsedIdentifier, parse, parse_insensitive};
pub use schema::{IdentifierSchema, RESOURCE_GROUP_FIELD, SUBSCRIPTION_ID_FIELD, SchemaBuilder};
pub use segment::{Segment, SegmentKind};
pub use typed::ResourceId;
pub use validate::{
    Diagnostics, check_resource_group_name, check_subscription_id, validate,
    validate_resource_group_name, validate_subscription_id, validator_for,
};
