//! AKSCluster Custom Resource Definition
//!
//! Defines a Kubernetes CRD for managing Azure Kubernetes Service clusters.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};
use crate::references::{Reference, Selector};

/// AKSClusterSpec defines the desired state of an AKS cluster
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "compute.azure.crossplane.io",
    version = "v1alpha3",
    kind = "AKSCluster",
    plural = "aksclusters",
    status = "AKSClusterStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"STATE","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"ENDPOINT","type":"string","jsonPath":".status.endpoint"}"#,
    printcolumn = r#"{"name":"LOCATION","type":"string","jsonPath":".spec.location"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AKSClusterSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    #[serde(flatten)]
    pub parameters: AKSClusterParameters,
}

/// Parameters of an AKS cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AKSClusterParameters {
    /// Name of the resource group the cluster is created in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_group_name: String,

    /// Reference to a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_ref: Option<Reference>,

    /// Select a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_selector: Option<Selector>,

    /// Subnet the default node pool is deployed to
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "vnetSubnetID")]
    pub vnet_subnet_id: String,

    /// Reference to a Subnet to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "vnetSubnetIDRef")]
    pub vnet_subnet_id_ref: Option<Reference>,

    /// Select a Subnet to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "vnetSubnetIDSelector")]
    pub vnet_subnet_id_selector: Option<Selector>,

    /// Azure region the cluster is created in
    #[serde(default)]
    pub location: String,

    /// Kubernetes version of the cluster
    #[serde(default)]
    pub version: String,

    /// Number of nodes in the default pool, defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub node_count: Option<i32>,

    /// VM size of the default pool's nodes
    #[serde(default, rename = "nodeVMSize")]
    pub node_vm_size: String,

    /// DNS name prefix of the cluster's API server
    #[serde(default)]
    pub dns_name_prefix: String,

    /// Disable Kubernetes RBAC on the cluster
    #[serde(default, rename = "disableRBAC")]
    pub disable_rbac: bool,
}

/// AKSClusterStatus defines the observed state of an AKS cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AKSClusterStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state reported by Azure
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Azure resource ID of the cluster
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "providerID")]
    pub provider_id: String,

    /// FQDN of the cluster's API server
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint: String,

    /// Object ID of the AD application the cluster authenticates as
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "appObjectID")]
    pub application_object_id: String,

    /// Object ID of the service principal the cluster authenticates as
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "servicePrincipalID")]
    pub service_principal_id: String,

    /// Identifier of an in-flight create or update operation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub running_operation: String,
}
