//! VirtualMachine Custom Resource Definition
//!
//! Defines a Kubernetes CRD for managing Azure Linux virtual machines.
//! Network interfaces are attached by ID, by reference to a NetworkInterface
//! or by selector.

use std::collections::BTreeMap;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{ResourceSpec, ResourceStatus};
use crate::references::{Reference, Selector, SecretReference};

/// VirtualMachineSpec defines the desired state of a virtual machine
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "compute.azure.crossplane.io",
    version = "v1alpha3",
    kind = "VirtualMachine",
    status = "VirtualMachineStatus",
    category = "crossplane",
    category = "managed",
    category = "azure",
    printcolumn = r#"{"name":"READY","type":"string","jsonPath":".status.conditions[?(@.type=='Ready')].status"}"#,
    printcolumn = r#"{"name":"SYNCED","type":"string","jsonPath":".status.conditions[?(@.type=='Synced')].status"}"#,
    printcolumn = r#"{"name":"SIZE","type":"string","jsonPath":".status.vmSize"}"#,
    printcolumn = r#"{"name":"LOCATION","type":"string","jsonPath":".spec.location"}"#,
    printcolumn = r#"{"name":"AGE","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineSpec {
    #[serde(flatten)]
    pub resource_spec: ResourceSpec,

    /// Name of the resource group the VM is created in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_group_name: String,

    /// Reference to a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_ref: Option<Reference>,

    /// Select a ResourceGroup to retrieve its name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_selector: Option<Selector>,

    /// Azure region of the VM
    #[serde(default)]
    pub location: String,

    /// Availability zones the VM may be placed in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,

    /// Tags applied to the VM
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,

    /// Properties of the VM
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "properties")]
    pub virtual_machine_parameters: Option<VirtualMachineParameters>,
}

/// Properties of a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineParameters {
    /// Hardware settings of the VM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_profile: Option<HardwareProfile>,

    /// Image and OS disk settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_profile: Option<StorageProfile>,

    /// Operating system settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_profile: Option<OsProfile>,

    /// Network interfaces attached to the VM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_profile: Option<NetworkProfile>,
}

/// Hardware settings of a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    /// VM size, e.g. Standard_D2s_v3
    pub vm_size: String,
}

/// Image and OS disk settings of a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    /// Marketplace image the VM is created from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<ImageReference>,

    /// OS disk settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_disk: Option<OsDisk>,
}

/// Marketplace image reference
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub publisher: String,
    pub offer: String,
    pub sku: String,
    /// Image version, `latest` when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// OS disk settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    /// Size of the disk in GB; the image default is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "diskSizeGB")]
    pub disk_size_gb: Option<i32>,

    /// Storage account type of the managed disk, e.g. Premium_LRS
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage_account_type: String,
}

/// Operating system settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OsProfile {
    /// Host name of the VM
    pub computer_name: String,

    /// Name of the administrator account
    pub admin_username: String,

    /// Secret holding the administrator password, if password login is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_password_secret_ref: Option<SecretReference>,

    /// Linux specific settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_configuration: Option<LinuxConfiguration>,
}

/// Linux specific OS settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LinuxConfiguration {
    /// Only allow SSH key authentication
    #[serde(default)]
    pub disable_password_authentication: bool,

    /// SSH public keys installed for the administrator
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_public_keys: Vec<SshPublicKey>,
}

/// An SSH public key installed on the VM
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SshPublicKey {
    /// Path of the authorized_keys file on the VM
    pub path: String,
    /// Public key in OpenSSH format
    pub key_data: String,
}

/// Network interfaces attached to a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterfaceReference>,
}

/// One network interface attachment
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceReference {
    /// Azure resource ID of the interface
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "networkInterfaceID")]
    pub network_interface_id: String,

    /// Reference to a NetworkInterface to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "networkInterfaceIDRef")]
    pub network_interface_id_ref: Option<Reference>,

    /// Select a NetworkInterface to retrieve its ID
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "networkInterfaceIDSelector")]
    pub network_interface_id_selector: Option<Selector>,

    /// Whether this is the VM's primary interface
    #[serde(default)]
    pub primary: bool,
}

/// VirtualMachineStatus defines the observed state of a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineStatus {
    #[serde(flatten)]
    pub resource_status: ResourceStatus,

    /// Provisioning state reported by Azure
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Unique VM ID assigned by Azure
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "vmID")]
    pub vm_id: String,

    /// Azure resource ID of the VM
    #[serde(default, skip_serializing_if = "String::is_empty", rename = "providerID")]
    pub provider_id: String,

    /// VM size Azure reports
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vm_size: String,

    /// Availability zones Azure reports
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,
}
