//! Adapters between compute managed resources and Azure API objects
//!
//! Pure functions: build the request for a managed resource, decide whether
//! the external resource has drifted, and copy observed state back into the
//! managed resource's status.

pub mod agent_pool;
pub mod aks_cluster;
pub mod container_registry;
pub mod virtual_machine;
#[cfg(test)]
mod agent_pool_test;
#[cfg(test)]
mod aks_cluster_test;
#[cfg(test)]
mod container_registry_test;
#[cfg(test)]
mod virtual_machine_test;

pub use agent_pool::*;
pub use aks_cluster::*;
pub use container_registry::*;
pub use virtual_machine::*;

use crds::Condition;

/// Name of the system agent pool profile created with every AKS cluster
pub const AGENT_POOL_PROFILE_NAME: &str = "agentpool";

/// Ready condition matching an Azure provisioning state
pub fn availability_condition(state: &str) -> Condition {
    match state {
        "Succeeded" => Condition::available(),
        "Deleting" => Condition::deleting(),
        _ => Condition::creating(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
