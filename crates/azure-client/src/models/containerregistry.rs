//! Microsoft.ContainerRegistry models

use std::fmt;

use serde::{Deserialize, Serialize};

/// SKU of a container registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Sku {
    /// Classic, Basic, Standard or Premium
    pub name: String,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Provisioning state of a container registry
///
/// States this client does not know about deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProvisioningState {
    /// The registry is being created
    Creating,
    /// The registry is being updated
    Updating,
    /// The registry is being deleted
    Deleting,
    /// The last operation completed
    Succeeded,
    /// The last operation failed
    Failed,
    /// The last operation was canceled
    Canceled,
    /// Any state not listed above
    #[serde(other)]
    Unknown,
}

impl ProvisioningState {
    /// Wire representation of the state
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "Creating",
            Self::Updating => "Updating",
            Self::Deleting => "Deleting",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Canceled => "Canceled",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProvisioningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display status of a registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Properties of a container registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_user_enabled: Option<bool>,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_server: Option<String>,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,

    /// Read only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// A container registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Registry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RegistryProperties>,
}
