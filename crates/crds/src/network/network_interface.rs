//! NetworkInterface Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};

/// NetworkInterfaceSpec defines the desired state of an Azure network interface
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "network.azure.crossplane.io",
    version = "v1alpha3",
    kind = "NetworkInterface",
    status = "NetworkInterfaceStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"LOCATION","type":"string","jsonPath":".spec.location"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    /// Resource group the interface is created in
    #[serde(default)]
    pub resource_group_name: String,

    /// Azure region of the interface
    #[serde(default)]
    pub location: String,

    /// Subnet the primary IP configuration attaches to
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subnet_id: String,
}

/// NetworkInterfaceStatus defines the observed state of a network interface
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state of the interface
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Azure resource ID of the interface
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// Azure resource ID of a network interface, empty until it has been observed
pub fn network_interface_id(nic: &NetworkInterface) -> String {
    nic.status
        .as_ref()
        .map(|s| s.id.clone())
        .unwrap_or_default()
}
