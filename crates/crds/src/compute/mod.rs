//! Compute CRDs
//!
//! Managed resources of the `compute.azure.crossplane.io` group:
//! - AKS clusters and their agent pools
//! - Container registries
//! - Virtual machines

pub mod agent_pool;
pub mod aks_cluster;
pub mod registry;
pub mod virtual_machine;
pub mod referencers;

pub use agent_pool::*;
pub use aks_cluster::*;
pub use registry::*;
pub use virtual_machine::*;
pub use referencers::*;

/// Node count used when a cluster or pool does not specify one
pub const DEFAULT_NODE_COUNT: i32 = 1;
