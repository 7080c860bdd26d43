//! Virtual machine adapters

use crds::compute as v1alpha3;
use tracing::debug;

use super::{availability_condition, non_empty};
use crate::models::{
    HardwareProfile, ImageReference, LinuxConfiguration, ManagedDiskParameters, NetworkInterfaceReference,
    NetworkInterfaceReferenceProperties, NetworkProfile, OsDisk, OsProfile, SshConfiguration, SshPublicKey,
    StorageProfile, VirtualMachine, VirtualMachineProperties,
};

const LATEST_IMAGE_VERSION: &str = "latest";
const CREATE_FROM_IMAGE: &str = "FromImage";

/// Build the Azure virtual machine for a VirtualMachine managed resource
///
/// `admin_password` is the content of the secret named by
/// `osProfile.adminPasswordSecretRef`, when the VM uses one.
pub fn new_virtual_machine(vm: &v1alpha3::VirtualMachine, admin_password: Option<&str>) -> VirtualMachine {
    let spec = &vm.spec;
    let params = spec.virtual_machine_parameters.as_ref();

    VirtualMachine {
        location: non_empty(&spec.location),
        zones: (!spec.zones.is_empty()).then(|| spec.zones.clone()),
        tags: (!spec.tags.is_empty()).then(|| spec.tags.clone()),
        properties: params.map(|p| VirtualMachineProperties {
            hardware_profile: p.hardware_profile.as_ref().map(|h| HardwareProfile {
                vm_size: Some(h.vm_size.clone()),
            }),
            storage_profile: p.storage_profile.as_ref().map(new_storage_profile),
            os_profile: p
                .os_profile
                .as_ref()
                .map(|os| new_os_profile(os, admin_password)),
            network_profile: p.network_profile.as_ref().map(new_network_profile),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn new_storage_profile(s: &v1alpha3::StorageProfile) -> StorageProfile {
    StorageProfile {
        image_reference: s.image_reference.as_ref().map(|img| ImageReference {
            publisher: img.publisher.clone(),
            offer: img.offer.clone(),
            sku: img.sku.clone(),
            version: non_empty(&img.version).unwrap_or_else(|| LATEST_IMAGE_VERSION.to_string()),
        }),
        os_disk: s.os_disk.as_ref().map(|d| OsDisk {
            create_option: CREATE_FROM_IMAGE.to_string(),
            disk_size_gb: d.disk_size_gb,
            managed_disk: non_empty(&d.storage_account_type)
                .map(|storage_account_type| ManagedDiskParameters { storage_account_type }),
        }),
    }
}

fn new_os_profile(os: &v1alpha3::OsProfile, admin_password: Option<&str>) -> OsProfile {
    OsProfile {
        computer_name: os.computer_name.clone(),
        admin_username: os.admin_username.clone(),
        admin_password: admin_password.map(str::to_string),
        linux_configuration: os.linux_configuration.as_ref().map(|l| LinuxConfiguration {
            disable_password_authentication: Some(l.disable_password_authentication),
            ssh: (!l.ssh_public_keys.is_empty()).then(|| SshConfiguration {
                public_keys: l
                    .ssh_public_keys
                    .iter()
                    .map(|k| SshPublicKey {
                        path: k.path.clone(),
                        key_data: k.key_data.clone(),
                    })
                    .collect(),
            }),
        }),
    }
}

fn new_network_profile(n: &v1alpha3::NetworkProfile) -> NetworkProfile {
    NetworkProfile {
        network_interfaces: n
            .network_interfaces
            .iter()
            .map(|nic| NetworkInterfaceReference {
                id: nic.network_interface_id.clone(),
                properties: Some(NetworkInterfaceReferenceProperties {
                    primary: Some(nic.primary),
                }),
            })
            .collect(),
    }
}

fn observed_vm_size(az: &VirtualMachine) -> &str {
    az.properties
        .as_ref()
        .and_then(|p| p.hardware_profile.as_ref())
        .and_then(|h| h.vm_size.as_deref())
        .unwrap_or_default()
}

/// Whether the Azure VM matches the desired size and tags
///
/// The size is only compared when the spec sets a hardware profile.
pub fn virtual_machine_up_to_date(vm: &v1alpha3::VirtualMachine, az: &VirtualMachine) -> bool {
    let desired_size = vm
        .spec
        .virtual_machine_parameters
        .as_ref()
        .and_then(|p| p.hardware_profile.as_ref())
        .map(|h| h.vm_size.as_str());
    let observed_size = observed_vm_size(az);
    if let Some(desired) = desired_size
        && desired != observed_size
    {
        debug!("VM size differs: desired '{}', observed '{}'", desired, observed_size);
        return false;
    }

    let observed_tags = az.tags.clone().unwrap_or_default();
    if vm.spec.tags != observed_tags {
        debug!("VM tags differ: desired {:?}, observed {:?}", vm.spec.tags, observed_tags);
        return false;
    }

    true
}

/// Copy the observed state of an Azure VM into the VirtualMachine status
pub fn update_virtual_machine_status(vm: &mut v1alpha3::VirtualMachine, az: &VirtualMachine) {
    let props = az.properties.as_ref();
    let status = vm.status.get_or_insert_with(Default::default);

    status.state = props
        .and_then(|x| x.provisioning_state.clone())
        .unwrap_or_default();
    status.vm_id = props.and_then(|x| x.vm_id.clone()).unwrap_or_default();
    status.provider_id = az.id.clone().unwrap_or_default();
    status.vm_size = observed_vm_size(az).to_string();
    status.zones = az.zones.clone().unwrap_or_default();

    let ready = availability_condition(&status.state);
    status.resource_status.set_conditions([ready]);
}
