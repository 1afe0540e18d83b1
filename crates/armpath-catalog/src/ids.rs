//! 型付きリソース識別子
//!
//! 組み込みスキーマごとの構造体。パース・フォーマットは全て
//! armpath-core の共通エンジンに委譲し、ここではフィールドの射影のみを行う。

use crate::builtin;
use armpath_core::{IdentifierSchema, ParseError, ParsedIdentifier, ResourceId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

macro_rules! resource_id {
    (
        $(#[$meta:meta])*
        $name:ident => $schema:path {
            $($field:ident: $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            pub subscription_id: String,
            pub resource_group: String,
            $(pub $field: String,)+
        }

        impl $name {
            pub fn new(
                subscription_id: impl Into<String>,
                resource_group: impl Into<String>,
                $($field: impl Into<String>,)+
            ) -> Self {
                Self {
                    subscription_id: subscription_id.into(),
                    resource_group: resource_group.into(),
                    $($field: $field.into(),)+
                }
            }

            /// この識別子が属するリソースグループ
            pub fn resource_group_id(&self) -> ResourceGroupId {
                ResourceGroupId::new(&self.subscription_id, &self.resource_group)
            }
        }

        impl ResourceId for $name {
            fn schema() -> &'static IdentifierSchema {
                LazyLock::force(&$schema)
            }

            fn from_parsed(parsed: &ParsedIdentifier) -> armpath_core::Result<Self> {
                Ok(Self {
                    subscription_id: parsed.require("subscriptionId")?.to_string(),
                    resource_group: parsed.require("resourceGroup")?.to_string(),
                    $($field: parsed.require($key)?.to_string(),)+
                })
            }

            fn field_values(&self) -> Vec<(&'static str, &str)> {
                vec![
                    ("subscriptionId", self.subscription_id.as_str()),
                    ("resourceGroup", self.resource_group.as_str()),
                    $(($key, self.$field.as_str()),)+
                ]
            }
        }

        impl_string_forms!($name);
    };
}

/// Display / FromStr / serde を正規文字列形式で実装する
macro_rules! impl_string_forms {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.id())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as ResourceId>::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let id = String::deserialize(deserializer)?;
                <Self as ResourceId>::parse(&id).map_err(D::Error::custom)
            }
        }
    };
}

/// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroup}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceGroupId {
    pub subscription_id: String,
    pub resource_group: String,
}

impl ResourceGroupId {
    pub fn new(subscription_id: impl Into<String>, resource_group: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
        }
    }
}

impl ResourceId for ResourceGroupId {
    fn schema() -> &'static IdentifierSchema {
        LazyLock::force(&builtin::RESOURCE_GROUP)
    }

    fn from_parsed(parsed: &ParsedIdentifier) -> armpath_core::Result<Self> {
        Ok(Self {
            subscription_id: parsed.require("subscriptionId")?.to_string(),
            resource_group: parsed.require("resourceGroup")?.to_string(),
        })
    }

    fn field_values(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("subscriptionId", self.subscription_id.as_str()),
            ("resourceGroup", self.resource_group.as_str()),
        ]
    }
}

impl_string_forms!(ResourceGroupId);

resource_id! {
    /// Arc-enabled Kubernetes クラスター
    ConnectedClusterId => builtin::CONNECTED_CLUSTER {
        connected_cluster_name: "connectedClusterName",
    }
}

resource_id! {
    /// connected cluster 上の provisioned cluster instance
    ProvisionedClusterInstanceId => builtin::PROVISIONED_CLUSTER_INSTANCE {
        connected_cluster_name: "connectedClusterName",
        provisioned_cluster_instance_name: "provisionedClusterInstanceName",
    }
}

resource_id! {
    HybridIdentityMetadataId => builtin::HYBRID_IDENTITY_METADATA {
        connected_cluster_name: "connectedClusterName",
        provisioned_cluster_instance_name: "provisionedClusterInstanceName",
        hybrid_identity_metadata_name: "hybridIdentityMetadataName",
    }
}

resource_id! {
    AgentPoolId => builtin::AGENT_POOL {
        connected_cluster_name: "connectedClusterName",
        provisioned_cluster_instance_name: "provisionedClusterInstanceName",
        agent_pool_name: "agentPoolName",
    }
}

resource_id! {
    StackHciClusterId => builtin::STACK_HCI_CLUSTER {
        cluster_name: "clusterName",
    }
}

resource_id! {
    LogicalNetworkId => builtin::LOGICAL_NETWORK {
        logical_network_name: "logicalNetworkName",
    }
}

resource_id! {
    NetworkInterfaceId => builtin::NETWORK_INTERFACE {
        network_interface_name: "networkInterfaceName",
    }
}

resource_id! {
    StorageContainerId => builtin::STORAGE_CONTAINER {
        storage_container_name: "storageContainerName",
    }
}

resource_id! {
    VirtualHardDiskId => builtin::VIRTUAL_HARD_DISK {
        virtual_hard_disk_name: "virtualHardDiskName",
    }
}

resource_id! {
    GalleryImageId => builtin::GALLERY_IMAGE {
        gallery_image_name: "galleryImageName",
    }
}

resource_id! {
    MarketplaceGalleryImageId => builtin::MARKETPLACE_GALLERY_IMAGE {
        marketplace_gallery_image_name: "marketplaceGalleryImageName",
    }
}

resource_id! {
    /// Arc-enabled サーバー
    HybridComputeMachineId => builtin::HYBRID_COMPUTE_MACHINE {
        machine_name: "machineName",
    }
}

resource_id! {
    /// Arc-enabled サーバーの拡張リソースとしての仮想マシン
    VirtualMachineInstanceId => builtin::VIRTUAL_MACHINE_INSTANCE {
        machine_name: "machineName",
        virtual_machine_instance_name: "virtualMachineInstanceName",
    }
}

resource_id! {
    CustomLocationId => builtin::CUSTOM_LOCATION {
        custom_location_name: "customLocationName",
    }
}

impl ProvisionedClusterInstanceId {
    /// 親の connected cluster
    pub fn connected_cluster_id(&self) -> ConnectedClusterId {
        ConnectedClusterId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.connected_cluster_name,
        )
    }
}

impl HybridIdentityMetadataId {
    pub fn provisioned_cluster_instance_id(&self) -> ProvisionedClusterInstanceId {
        ProvisionedClusterInstanceId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.connected_cluster_name,
            &self.provisioned_cluster_instance_name,
        )
    }
}

impl AgentPoolId {
    pub fn provisioned_cluster_instance_id(&self) -> ProvisionedClusterInstanceId {
        ProvisionedClusterInstanceId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.connected_cluster_name,
            &self.provisioned_cluster_instance_name,
        )
    }
}

impl VirtualMachineInstanceId {
    /// VM をホストする Arc-enabled サーバー
    pub fn machine_id(&self) -> HybridComputeMachineId {
        HybridComputeMachineId::new(
            &self.subscription_id,
            &self.resource_group,
            &self.machine_name,
        )
    }
}
