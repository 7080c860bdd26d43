//! Subnet Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};

/// SubnetSpec defines the desired state of a subnet in an Azure virtual network
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "network.azure.crossplane.io",
    version = "v1alpha3",
    kind = "Subnet",
    status = "SubnetStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"STATE","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct SubnetSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    /// Resource group the virtual network lives in
    #[serde(default)]
    pub resource_group_name: String,

    /// Virtual network the subnet belongs to
    #[serde(default)]
    pub virtual_network_name: String,

    /// Address prefix of the subnet in CIDR notation
    #[serde(default)]
    pub address_prefix: String,
}

/// SubnetStatus defines the observed state of a subnet
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubnetStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state of the subnet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Azure resource ID of the subnet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Azure resource ID of a subnet, empty until the subnet has been observed
pub fn subnet_id(subnet: &Subnet) -> String {
    subnet
        .status
        .as_ref()
        .map(|s| s.id.clone())
        .unwrap_or_default()
}
