//! Azure compute CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the Azure compute provider,
//! together with the reference resolution that fills in cross-resource
//! fields (resource groups, subnets, network interfaces, AKS clusters).

pub mod common;
pub mod compute;
pub mod error;
pub mod network;
pub mod references;
pub mod resolver;
pub mod resource_group;

pub use common::*;
pub use compute::*;
pub use error::ReferenceError;
pub use network::*;
pub use references::*;
pub use resolver::*;
pub use resource_group::*;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;

/// Every CRD served by this provider, referenced kinds included
pub fn crds() -> Vec<CustomResourceDefinition> {
    vec![
        ResourceGroup::crd(),
        Subnet::crd(),
        NetworkInterface::crd(),
        AKSCluster::crd(),
        AgentPool::crd(),
        Registry::crd(),
        VirtualMachine::crd(),
    ]
}
