//! Canonical identifier formatter

use crate::parser::ParsedIdentifier;
use crate::schema::IdentifierSchema;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Source of field values for [`format`]
pub trait FieldValues {
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldValues for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> FieldValues for HashMap<&str, &str, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl FieldValues for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldValues for [(&str, &str)] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> FieldValues for [(&str, &str); N] {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }
}

impl FieldValues for ParsedIdentifier {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Emit the canonical string for `values` in schema order
///
/// Never fails. A value segment with no entry in `values` is emitted empty,
/// which yields a string the strict parser will reject; supplying every field
/// is the caller's job.
pub fn format<V: FieldValues + ?Sized>(values: &V, schema: &IdentifierSchema) -> String {
    let mut out = String::new();
    for segment in schema.segments() {
        out.push('/');
        match segment.expected_literal() {
            Some(literal) => out.push_str(literal),
            None => out.push_str(values.field(segment.name()).unwrap_or_default()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> IdentifierSchema {
        IdentifierSchema::builder()
            .resource_group()
            .provider("Microsoft.Kubernetes")
            .resource("connectedClusters", "connectedClusterName")
            .provider("Microsoft.HybridContainerService")
            .resource(
                "provisionedClusterInstances",
                "provisionedClusterInstanceName",
            )
            .build()
            .unwrap()
    }

    const EXPECTED: &str = "/subscriptions/s/resourceGroups/g/providers/Microsoft.Kubernetes/connectedClusters/c/providers/Microsoft.HybridContainerService/provisionedClusterInstances/default";

    #[test]
    fn test_format_from_pairs() {
        let values = [
            ("subscriptionId", "s"),
            ("resourceGroup", "g"),
            ("connectedClusterName", "c"),
            ("provisionedClusterInstanceName", "default"),
        ];
        assert_eq!(format(&values, &schema()), EXPECTED);
    }

    #[test]
    fn test_format_from_maps() {
        let mut owned = HashMap::new();
        owned.insert("subscriptionId".to_string(), "s".to_string());
        owned.insert("resourceGroup".to_string(), "g".to_string());
        owned.insert("connectedClusterName".to_string(), "c".to_string());
        owned.insert(
            "provisionedClusterInstanceName".to_string(),
            "default".to_string(),
        );
        assert_eq!(format(&owned, &schema()), EXPECTED);

        let sorted: BTreeMap<String, String> = owned.into_iter().collect();
        assert_eq!(schema().format(&sorted), EXPECTED);
    }

    #[test]
    fn test_format_is_deterministic() {
        let values = [
            ("subscriptionId", "s"),
            ("resourceGroup", "g"),
            ("connectedClusterName", "c"),
            ("provisionedClusterInstanceName", "default"),
        ];
        let schema = schema();
        assert_eq!(format(&values, &schema), format(&values, &schema));
    }

    #[test]
    fn test_missing_value_is_emitted_empty() {
        let values = [("subscriptionId", "s"), ("resourceGroup", "g")];
        let out = format(&values, &schema());
        assert!(out.contains("/connectedClusters//providers/"));
        assert!(out.ends_with("/provisionedClusterInstances/"));
        assert!(schema().parse(&out).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let values = [
            ("subscriptionId", "s"),
            ("resourceGroup", "g"),
            ("connectedClusterName", "c"),
            ("provisionedClusterInstanceName", "default"),
            ("location", "westus"),
        ];
        assert_eq!(format(&values, &schema()), EXPECTED);
    }
}
