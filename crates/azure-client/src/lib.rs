//! Azure Management API Client
//!
//! Request and response models for the Azure resource providers behind the
//! compute managed resources, and the adapters that translate between those
//! models and the CRDs in `crds`.
//!
//! # Example
//!
//! ```no_run
//! use azure_client::{agent_pool_needs_update, new_agent_pool, update_agent_pool_status};
//!
//! # fn example(mut pool: crds::AgentPool, observed: azure_client::AgentPool) {
//! // Request body for a PUT of the agent pool
//! let body = new_agent_pool(&pool);
//!
//! // Drift detection against what Azure reports
//! if agent_pool_needs_update(&pool, &observed) {
//!     // issue the update with `body`
//! }
//!
//! // Copy observed state into the status subresource
//! update_agent_pool_status(&mut pool, &observed);
//! # let _ = body;
//! # }
//! ```

pub mod compute;
pub mod error;
pub mod models;

pub use compute::*;
pub use error::AzureError;
pub use models::*;
