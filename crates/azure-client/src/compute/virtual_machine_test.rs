//! Unit tests for virtual machine adapters

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::compute::*;
    use crate::models::{HardwareProfile, VirtualMachine, VirtualMachineProperties};
    use crds::{
        ConditionType, HardwareProfile as DesiredHardware, ImageReference, LinuxConfiguration,
        NetworkInterfaceReference, NetworkProfile, OsDisk, OsProfile, SshPublicKey, StorageProfile,
        VirtualMachineParameters, VirtualMachineSpec,
    };

    fn vm() -> crds::VirtualMachine {
        crds::VirtualMachine::new(
            "vm",
            VirtualMachineSpec {
                resource_group_name: "rg".to_string(),
                location: "westeurope".to_string(),
                tags: BTreeMap::from([("team".to_string(), "platform".to_string())]),
                virtual_machine_parameters: Some(VirtualMachineParameters {
                    hardware_profile: Some(DesiredHardware {
                        vm_size: "Standard_B2s".to_string(),
                    }),
                    storage_profile: Some(StorageProfile {
                        image_reference: Some(ImageReference {
                            publisher: "Canonical".to_string(),
                            offer: "0001-com-ubuntu-server-jammy".to_string(),
                            sku: "22_04-lts".to_string(),
                            version: String::new(),
                        }),
                        os_disk: Some(OsDisk {
                            disk_size_gb: Some(64),
                            storage_account_type: "Premium_LRS".to_string(),
                        }),
                    }),
                    os_profile: Some(OsProfile {
                        computer_name: "vm".to_string(),
                        admin_username: "azureuser".to_string(),
                        admin_password_secret_ref: None,
                        linux_configuration: Some(LinuxConfiguration {
                            disable_password_authentication: true,
                            ssh_public_keys: vec![SshPublicKey {
                                path: "/home/azureuser/.ssh/authorized_keys".to_string(),
                                key_data: "ssh-ed25519 AAAA".to_string(),
                            }],
                        }),
                    }),
                    network_profile: Some(NetworkProfile {
                        network_interfaces: vec![NetworkInterfaceReference {
                            network_interface_id: "/subscriptions/0000/nic-0".to_string(),
                            primary: true,
                            ..Default::default()
                        }],
                    }),
                }),
                ..Default::default()
            },
        )
    }

    fn observed(vm_size: &str, tags: &[(&str, &str)]) -> VirtualMachine {
        VirtualMachine {
            id: Some("/subscriptions/0000/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm".to_string()),
            tags: Some(
                tags.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            zones: Some(vec!["2".to_string()]),
            properties: Some(VirtualMachineProperties {
                hardware_profile: Some(HardwareProfile {
                    vm_size: Some(vm_size.to_string()),
                }),
                vm_id: Some("6a1c0b7e-0000-4000-8000-000000000000".to_string()),
                provisioning_state: Some("Succeeded".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_virtual_machine() {
        let az = new_virtual_machine(&vm(), None);
        assert_eq!(az.location.as_deref(), Some("westeurope"));
        assert_eq!(az.zones, None);
        let props = az.properties.unwrap();

        let storage = props.storage_profile.unwrap();
        assert_eq!(storage.image_reference.unwrap().version, "latest");
        let disk = storage.os_disk.unwrap();
        assert_eq!(disk.create_option, "FromImage");
        assert_eq!(disk.disk_size_gb, Some(64));
        assert_eq!(disk.managed_disk.unwrap().storage_account_type, "Premium_LRS");

        let os = props.os_profile.unwrap();
        assert_eq!(os.admin_password, None);
        let linux = os.linux_configuration.unwrap();
        assert_eq!(linux.disable_password_authentication, Some(true));
        assert_eq!(linux.ssh.unwrap().public_keys.len(), 1);

        let nics = props.network_profile.unwrap().network_interfaces;
        assert_eq!(nics[0].id, "/subscriptions/0000/nic-0");
        assert_eq!(nics[0].properties.as_ref().unwrap().primary, Some(true));
    }

    #[test]
    fn test_new_virtual_machine_with_password() {
        let az = new_virtual_machine(&vm(), Some("s3cret!"));
        let os = az.properties.unwrap().os_profile.unwrap();
        assert_eq!(os.admin_password.as_deref(), Some("s3cret!"));
    }

    #[test]
    fn test_virtual_machine_up_to_date() {
        let desired = vm();
        assert!(virtual_machine_up_to_date(&desired, &observed("Standard_B2s", &[("team", "platform")])));
        assert!(!virtual_machine_up_to_date(&desired, &observed("Standard_B4ms", &[("team", "platform")])));
        assert!(!virtual_machine_up_to_date(&desired, &observed("Standard_B2s", &[])));
        assert!(!virtual_machine_up_to_date(
            &desired,
            &observed("Standard_B2s", &[("team", "platform"), ("owner", "someone")])
        ));
    }

    #[test]
    fn test_size_ignored_without_hardware_profile() {
        let mut desired = vm();
        if let Some(p) = desired.spec.virtual_machine_parameters.as_mut() {
            p.hardware_profile = None;
        }
        assert!(virtual_machine_up_to_date(&desired, &observed("Standard_B4ms", &[("team", "platform")])));
    }

    #[test]
    fn test_update_virtual_machine_status() {
        let mut v = vm();
        update_virtual_machine_status(&mut v, &observed("Standard_B2s", &[]));
        let status = v.status.unwrap();
        assert_eq!(status.state, "Succeeded");
        assert_eq!(status.vm_id, "6a1c0b7e-0000-4000-8000-000000000000");
        assert!(status.provider_id.ends_with("/virtualMachines/vm"));
        assert_eq!(status.vm_size, "Standard_B2s");
        assert_eq!(status.zones, vec!["2"]);
        assert!(status.resource_status.get_condition(ConditionType::Ready).reason == crds::ConditionReason::Available);
    }
}
