//! ResourceGroup Custom Resource Definition
//!
//! An Azure resource group. Other managed resources reference it through
//! `resourceGroupName`; the value they resolve to is the group's external name.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};

/// ResourceGroupSpec defines the desired state of an Azure resource group
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "azure.crossplane.io",
    version = "v1alpha3",
    kind = "ResourceGroup",
    status = "ResourceGroupStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"LOCATION","type":"string","jsonPath":".spec.location"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    /// Azure region of the resource group
    #[serde(default)]
    pub location: String,
}

/// ResourceGroupStatus defines the observed state of an Azure resource group
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state reported by Azure
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provisioning_state: String,
}
