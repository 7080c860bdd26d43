//! Network CRDs
//!
//! Network resources referenced by compute resources:
//! - Subnets (referenced by AKS clusters and agent pools)
//! - Network interfaces (referenced by virtual machines)

pub mod subnet;
pub mod network_interface;

pub use subnet::*;
pub use network_interface::*;
