//! Registry Custom Resource Definition
//!
//! Defines a Kubernetes CRD for managing Azure container registries.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};
use crate::references::{Reference, Selector};

/// RegistrySpec defines the desired state of a container registry
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "compute.azure.crossplane.io",
    version = "v1alpha3",
    kind = "Registry",
    plural = "registries",
    status = "RegistryStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"LOCATION","type":"string","jsonPath":".spec.location"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    /// Name of the resource group the registry is created in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_group_name: String,

    /// Reference to a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_ref: Option<Reference>,

    /// Select a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_selector: Option<Selector>,

    /// SKU of the registry (Classic, Basic, Standard or Premium)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sku: String,

    /// Azure region of the registry; cannot be changed after creation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(flatten)]
    pub properties: RegistryProperties,
}

/// Properties of a container registry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryProperties {
    /// Whether the admin user is enabled
    #[serde(default)]
    pub admin_user_enabled: bool,
}

/// RegistryStatus defines the observed state of a container registry
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Display status of the registry at the time of the last observation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,

    /// Details for the status, including alerts and error messages
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status_message: String,

    /// Provisioning state: Creating, Updating, Deleting, Succeeded, Failed or Canceled
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Login server of the registry
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub login_server: String,
}
