//! 組み込みリソースタイプ
//!
//! Hybrid AKS / Azure Stack HCI 系リソースの識別子スキーマ。
//! プロセス起動後に一度だけ構築され、以降は読み取り専用で共有される。

use armpath_core::{IdentifierSchema, SchemaBuilder};
use std::sync::LazyLock;

const KUBERNETES: &str = "Microsoft.Kubernetes";
const HYBRID_CONTAINER_SERVICE: &str = "Microsoft.HybridContainerService";
const AZURE_STACK_HCI: &str = "Microsoft.AzureStackHCI";
const HYBRID_COMPUTE: &str = "Microsoft.HybridCompute";
const EXTENDED_LOCATION: &str = "Microsoft.ExtendedLocation";

/// 組み込みスキーマはコード上の定数なので、不正ならば起動時に即座に失敗させる
fn build(builder: SchemaBuilder) -> IdentifierSchema {
    builder
        .build()
        .unwrap_or_else(|e| panic!("built-in schema is malformed: {e}"))
}

fn resource_group() -> SchemaBuilder {
    IdentifierSchema::builder().resource_group()
}

fn connected_cluster() -> SchemaBuilder {
    resource_group()
        .provider(KUBERNETES)
        .resource("connectedClusters", "connectedClusterName")
}

fn provisioned_cluster_instance() -> SchemaBuilder {
    connected_cluster()
        .provider(HYBRID_CONTAINER_SERVICE)
        .resource(
            "provisionedClusterInstances",
            "provisionedClusterInstanceName",
        )
}

fn stack_hci(resource_type: &str, field: &str) -> SchemaBuilder {
    resource_group()
        .provider(AZURE_STACK_HCI)
        .resource(resource_type, field)
}

fn hybrid_compute_machine() -> SchemaBuilder {
    resource_group()
        .provider(HYBRID_COMPUTE)
        .resource("machines", "machineName")
}

pub static RESOURCE_GROUP: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(resource_group()));

pub static CONNECTED_CLUSTER: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(connected_cluster()));

pub static PROVISIONED_CLUSTER_INSTANCE: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(provisioned_cluster_instance()));

pub static HYBRID_IDENTITY_METADATA: LazyLock<IdentifierSchema> = LazyLock::new(|| {
    build(
        provisioned_cluster_instance()
            .resource("hybridIdentityMetadata", "hybridIdentityMetadataName"),
    )
});

pub static AGENT_POOL: LazyLock<IdentifierSchema> = LazyLock::new(|| {
    build(provisioned_cluster_instance().resource("agentPools", "agentPoolName"))
});

pub static STACK_HCI_CLUSTER: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("clusters", "clusterName")));

pub static LOGICAL_NETWORK: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("logicalNetworks", "logicalNetworkName")));

pub static NETWORK_INTERFACE: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("networkInterfaces", "networkInterfaceName")));

pub static STORAGE_CONTAINER: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("storageContainers", "storageContainerName")));

pub static VIRTUAL_HARD_DISK: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("virtualHardDisks", "virtualHardDiskName")));

pub static GALLERY_IMAGE: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(stack_hci("galleryImages", "galleryImageName")));

pub static MARKETPLACE_GALLERY_IMAGE: LazyLock<IdentifierSchema> = LazyLock::new(|| {
    build(stack_hci(
        "marketplaceGalleryImages",
        "marketplaceGalleryImageName",
    ))
});

pub static HYBRID_COMPUTE_MACHINE: LazyLock<IdentifierSchema> =
    LazyLock::new(|| build(hybrid_compute_machine()));

pub static VIRTUAL_MACHINE_INSTANCE: LazyLock<IdentifierSchema> = LazyLock::new(|| {
    build(
        hybrid_compute_machine()
            .provider(AZURE_STACK_HCI)
            .resource("virtualMachineInstances", "virtualMachineInstanceName"),
    )
});

pub static CUSTOM_LOCATION: LazyLock<IdentifierSchema> = LazyLock::new(|| {
    build(
        resource_group()
            .provider(EXTENDED_LOCATION)
            .resource("customLocations", "customLocationName"),
    )
});

/// 組み込みリソースタイプ: (名前, 説明, スキーマ)
pub fn builtin_types() -> [(&'static str, &'static str, &'static IdentifierSchema); 15] {
    [
        ("resource-group", "Resource group", LazyLock::force(&RESOURCE_GROUP)),
        (
            "connected-cluster",
            "Arc-enabled Kubernetes connected cluster",
            LazyLock::force(&CONNECTED_CLUSTER),
        ),
        (
            "provisioned-cluster-instance",
            "AKS Arc provisioned cluster instance on a connected cluster",
            LazyLock::force(&PROVISIONED_CLUSTER_INSTANCE),
        ),
        (
            "hybrid-identity-metadata",
            "Hybrid identity metadata of a provisioned cluster instance",
            LazyLock::force(&HYBRID_IDENTITY_METADATA),
        ),
        (
            "agent-pool",
            "Agent pool of a provisioned cluster instance",
            LazyLock::force(&AGENT_POOL),
        ),
        (
            "stack-hci-cluster",
            "Azure Stack HCI cluster",
            LazyLock::force(&STACK_HCI_CLUSTER),
        ),
        (
            "logical-network",
            "Azure Stack HCI logical network",
            LazyLock::force(&LOGICAL_NETWORK),
        ),
        (
            "network-interface",
            "Azure Stack HCI network interface",
            LazyLock::force(&NETWORK_INTERFACE),
        ),
        (
            "storage-container",
            "Azure Stack HCI storage container",
            LazyLock::force(&STORAGE_CONTAINER),
        ),
        (
            "virtual-hard-disk",
            "Azure Stack HCI virtual hard disk",
            LazyLock::force(&VIRTUAL_HARD_DISK),
        ),
        (
            "gallery-image",
            "Azure Stack HCI gallery image",
            LazyLock::force(&GALLERY_IMAGE),
        ),
        (
            "marketplace-gallery-image",
            "Azure Stack HCI marketplace gallery image",
            LazyLock::force(&MARKETPLACE_GALLERY_IMAGE),
        ),
        (
            "hybrid-compute-machine",
            "Arc-enabled server",
            LazyLock::force(&HYBRID_COMPUTE_MACHINE),
        ),
        (
            "virtual-machine-instance",
            "Azure Stack HCI virtual machine instance on an Arc-enabled server",
            LazyLock::force(&VIRTUAL_MACHINE_INSTANCE),
        ),
        (
            "custom-location",
            "Custom location",
            LazyLock::force(&CUSTOM_LOCATION),
        ),
    ]
}
