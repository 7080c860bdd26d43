//! Azure management API models
//!
//! These models match the ARM JSON shapes of the resource providers the
//! compute managed resources talk to. Optional fields are omitted on the
//! wire when unset.

pub mod compute;
pub mod containerregistry;
pub mod containerservice;

pub use compute::*;
pub use containerregistry::*;
pub use containerservice::*;
