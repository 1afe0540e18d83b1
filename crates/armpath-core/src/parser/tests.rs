use super::*;
use crate::segment::Segment;

const SUBSCRIPTION: &str = "12345678-1234-9876-4563-123456789012";

const PROVISIONED: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Kubernetes/connectedClusters/cluster1/providers/Microsoft.HybridContainerService/provisionedClusterInstances/default";

fn provisioned_schema() -> IdentifierSchema {
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

fn not_specified(segment: &str) -> impl Fn(&ParseError) -> bool + '_ {
    move |e| matches!(e, ParseError::SegmentNotSpecified { segment: s, .. } if s == segment)
}

#[test]
fn test_parse_provisioned_cluster_instance() {
    let parsed = parse(PROVISIONED, &provisioned_schema(), true).unwrap();

    assert_eq!(parsed.len(), 4);
    assert_eq!(parsed.get("subscriptionId"), Some(SUBSCRIPTION));
    assert_eq!(parsed.get("resourceGroup"), Some("group1"));
    assert_eq!(parsed.get("connectedClusterName"), Some("cluster1"));
    assert_eq!(parsed.get("provisionedClusterInstanceName"), Some("default"));
    assert_eq!(parsed.input(), PROVISIONED);
    assert_eq!(parsed.canonical(), PROVISIONED);
}

#[test]
fn test_parse_trailing_slash_empty_name() {
    let input = PROVISIONED.replace("/provisionedClusterInstances/default", "/provisionedClusterInstances/");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();

    assert_eq!(
        err,
        ParseError::SegmentNotSpecified {
            input: input.clone(),
            segment: "provisionedClusterInstanceName".to_string(),
        }
    );
    assert_eq!(err.segment(), Some("provisionedClusterInstanceName"));
    assert_eq!(err.input(), input);
}

#[test]
fn test_parse_uppercase_strict_vs_insensitive() {
    let upper = PROVISIONED.to_uppercase();
    let schema = provisioned_schema();

    let err = parse(&upper, &schema, true).unwrap_err();
    assert!(not_specified("staticSubscriptions")(&err), "{err:?}");

    let parsed = parse_insensitive(&upper, &schema).unwrap();
    // values keep their casing, literals take the schema's
    assert_eq!(parsed.get("connectedClusterName"), Some("CLUSTER1"));
    assert_eq!(parsed.get("provisionedClusterInstanceName"), Some("DEFAULT"));
    assert!(parsed.canonical().starts_with("/subscriptions/"));
    assert!(parsed.canonical().contains("/providers/Microsoft.Kubernetes/connectedClusters/CLUSTER1/"));
    assert_eq!(schema.format(&parsed), parsed.canonical());
}

#[test]
fn test_parse_mixed_case_literals_normalize() {
    let drifted = PROVISIONED
        .replace("resourceGroups", "resourcegroups")
        .replace("Microsoft.Kubernetes", "microsoft.kubernetes")
        .replace("provisionedClusterInstances", "ProvisionedClusterInstances");
    let schema = provisioned_schema();

    assert!(parse(&drifted, &schema, true).is_err());

    let parsed = parse_insensitive(&drifted, &schema).unwrap();
    assert_eq!(parsed.canonical(), PROVISIONED);
    assert_eq!(schema.format(&parsed), PROVISIONED);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse("", &provisioned_schema(), true), Err(ParseError::Empty));
    assert_eq!(parse_insensitive("", &provisioned_schema()), Err(ParseError::Empty));
}

#[test]
fn test_parse_without_leading_slash() {
    let parsed = parse(&PROVISIONED[1..], &provisioned_schema(), true).unwrap();
    assert_eq!(parsed.get("connectedClusterName"), Some("cluster1"));
    assert_eq!(parsed.canonical(), PROVISIONED);
}

#[test]
fn test_parse_only_one_leading_slash_is_dropped() {
    let input = format!("/{PROVISIONED}");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert!(not_specified("staticSubscriptions")(&err), "{err:?}");
}

#[test]
fn test_parse_truncated_input() {
    let input = PROVISIONED.replace("/provisionedClusterInstances/default", "");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert!(not_specified("staticProvisionedClusterInstances")(&err), "{err:?}");

    let input = PROVISIONED.replace("/default", "");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert!(not_specified("provisionedClusterInstanceName")(&err), "{err:?}");
}

#[test]
fn test_parse_extra_segments() {
    let input = format!("{PROVISIONED}/extra/segments");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert_eq!(
        err,
        ParseError::SegmentCountMismatch {
            input,
            expected: 12,
            found: 14,
        }
    );
}

#[test]
fn test_parse_trailing_slash_after_complete_id() {
    let input = format!("{PROVISIONED}/");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert!(matches!(err, ParseError::SegmentCountMismatch { found: 13, .. }));
}

#[test]
fn test_parse_empty_value_in_middle() {
    let input = PROVISIONED.replace("/resourceGroups/group1/", "/resourceGroups//");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    assert!(not_specified("resourceGroup")(&err), "{err:?}");

    let err = parse_insensitive(&input, &provisioned_schema()).unwrap_err();
    assert!(not_specified("resourceGroup")(&err), "{err:?}");
}

#[test]
fn test_parse_wrong_provider() {
    let input = PROVISIONED.replace("Microsoft.HybridContainerService", "Microsoft.ContainerService");
    let err = parse_insensitive(&input, &provisioned_schema()).unwrap_err();
    assert!(not_specified("staticMicrosoftHybridContainerService")(&err), "{err:?}");
}

#[test]
fn test_parse_value_positions_are_never_literals() {
    // a user-chosen name that looks like a keyword is still just a value
    let input = PROVISIONED.replace("/connectedClusters/cluster1", "/connectedClusters/PROVIDERS");
    let parsed = parse(&input, &provisioned_schema(), true).unwrap();
    assert_eq!(parsed.get("connectedClusterName"), Some("PROVIDERS"));
}

#[test]
fn test_parse_other_resource_type_is_rejected() {
    let cluster = "/subscriptions/s/resourceGroups/g/providers/Microsoft.Kubernetes/connectedClusters/c";
    let err = parse(cluster, &provisioned_schema(), true).unwrap_err();
    assert!(not_specified("staticProviders")(&err), "{err:?}");
}

#[test]
fn test_parse_explicit_segments() {
    let schema = IdentifierSchema::new(vec![
        Segment::static_literal("subscriptions"),
        Segment::subscription_id("subscriptionId"),
        Segment::named_literal("staticGroups", "resourceGroups"),
        Segment::resource_group_name("resourceGroupName"),
    ])
    .unwrap();

    let parsed = parse("/subscriptions/s/resourceGroups/g", &schema, true).unwrap();
    assert_eq!(parsed.get("resourceGroupName"), Some("g"));

    let err = parse("/subscriptions/s/groups/g", &schema, true).unwrap_err();
    assert!(not_specified("staticGroups")(&err), "{err:?}");
}

#[test]
fn test_require_missing_field() {
    let parsed = parse(PROVISIONED, &provisioned_schema(), true).unwrap();
    assert_eq!(parsed.require("resourceGroup"), Ok("group1"));

    let err = parsed.require("location").unwrap_err();
    assert_eq!(err.segment(), Some("location"));
}

#[test]
fn test_error_messages_name_input_and_segment() {
    let input = PROVISIONED.replace("/default", "/");
    let err = parse(&input, &provisioned_schema(), true).unwrap_err();
    let message = err.to_string();
    assert!(message.contains(&input));
    assert!(message.contains("provisionedClusterInstanceName"));
    assert!(message.contains("not specified"));
}

#[test]
fn test_parsed_identifier_iter() {
    let parsed = parse(PROVISIONED, &provisioned_schema(), true).unwrap();
    let fields: Vec<&str> = parsed.iter().map(|(k, _)| k).collect();
    assert_eq!(
        fields,
        vec![
            "connectedClusterName",
            "provisionedClusterInstanceName",
            "resourceGroup",
            "subscriptionId"
        ]
    );
    assert_eq!(parsed.clone().into_values().len(), 4);
}
