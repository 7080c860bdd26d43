//! AgentPool Custom Resource Definition
//!
//! Defines a Kubernetes CRD for managing additional node pools of an AKS
//! cluster. The cluster, its resource group and the node subnet can each be
//! given directly or through a reference/selector.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};
use crate::references::{Reference, Selector};

/// AgentPoolSpec defines the desired state of an AKS agent pool
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "compute.azure.crossplane.io",
    version = "v1alpha3",
    kind = "AgentPool",
    status = "AgentPoolStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"STATE","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"NODES","type":"integer","jsonPath":".status.nodeCount"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    #[serde(flatten)]
    pub parameters: AgentPoolParameters,
}

/// Parameters of an AKS agent pool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolParameters {
    /// Name of the resource group the AKS cluster lives in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_group_name: String,

    /// Reference to a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_ref: Option<Reference>,

    /// Select a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_selector: Option<Selector>,

    /// Name of the AKS cluster the pool is added to
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "aksClusterName")]
    pub aks_cluster_name: String,

    /// Reference to an AKSCluster to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "aksClusterNameRef")]
    pub aks_cluster_name_ref: Option<Reference>,

    /// Select an AKSCluster to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "aksClusterNameSelector")]
    pub aks_cluster_name_selector: Option<Selector>,

    /// Subnet the pool's nodes are deployed to
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "vnetSubnetID")]
    pub vnet_subnet_id: String,

    /// Reference to a Subnet to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "vnetSubnetIDRef")]
    pub vnet_subnet_id_ref: Option<Reference>,

    /// Select a Subnet to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "vnetSubnetIDSelector")]
    pub vnet_subnet_id_selector: Option<Selector>,

    /// Number of nodes in the pool, defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub node_count: Option<i32>,

    /// VM size of the nodes, e.g. Standard_B2s
    #[serde(default, rename = "nodeVMSize")]
    pub node_vm_size: String,

    /// Availability zones the nodes are spread over
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
}

/// AgentPoolStatus defines the observed state of an AKS agent pool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state reported by Azure
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Azure resource ID of the agent pool
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "providerID")]
    pub provider_id: String,

    /// Number of nodes Azure reports for the pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i32>,

    /// Availability zones Azure reports for the pool
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_zones: Vec<String>,
}
