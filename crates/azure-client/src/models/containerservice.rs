//! Microsoft.ContainerService models (managed clusters and agent pools)

use serde::{Deserialize, Serialize};

/// Role of an agent pool within its cluster
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentPoolMode {
    /// Hosts critical system pods; every cluster needs one
    System,
    /// Hosts application workloads
    User,
}

/// How the nodes of an agent pool are provisioned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgentPoolType {
    /// Nodes run in a VM scale set
    VirtualMachineScaleSets,
    /// Nodes are standalone VMs in an availability set
    AvailabilitySet,
}

/// Properties of an agent pool, shared by standalone pools and the
/// profiles embedded in a managed cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterAgentPoolProfileProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "vnetSubnetID")]
    pub vnet_subnet_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AgentPoolMode>,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub pool_type: Option<AgentPoolType>,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// A standalone agent pool (`managedClusters/{cluster}/agentPools/{pool}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AgentPool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ManagedClusterAgentPoolProfileProperties>,
}

/// An agent pool profile embedded in a managed cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ManagedClusterAgentPoolProfile {
    pub name: String,

    #[serde(flatten)]
    pub properties: ManagedClusterAgentPoolProfileProperties,
}

/// Service principal a managed cluster runs as
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterServicePrincipalProfile {
    pub client_id: String,

    /// Write only; never returned by Azure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Properties of a managed cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_prefix: Option<String>,

    /// API server FQDN, read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", rename = "enableRBAC")]
    pub enable_rbac: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_pool_profiles: Option<Vec<ManagedClusterAgentPoolProfile>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_principal_profile: Option<ManagedClusterServicePrincipalProfile>,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// A managed Kubernetes cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ManagedCluster {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ManagedClusterProperties>,
}

impl ManagedCluster {
    /// The embedded agent pool profile with the given name
    pub fn agent_pool_profile(&self, name: &str) -> Option<&ManagedClusterAgentPoolProfile> {
        self.properties
            .as_ref()?
            .agent_pool_profiles
            .as_ref()?
            .iter()
            .find(|p| p.name == name)
    }
}
