//! Unit tests for container registry adapters

#[cfg(test)]
mod tests {
    use crate::compute::*;
    use crate::models::{ProvisioningState, Registry, RegistryProperties, Sku, Status};
    use crds::{ConditionStatus, ConditionType, RegistryProperties as DesiredProperties, RegistrySpec, RegistryStatus};

    fn registry(sku: &str, admin: bool) -> crds::Registry {
        crds::Registry::new(
            "acr",
            RegistrySpec {
                resource_group_name: "rg".to_string(),
                sku: sku.to_string(),
                location: "westeurope".to_string(),
                properties: DesiredProperties {
                    admin_user_enabled: admin,
                },
                ..Default::default()
            },
        )
    }

    fn observed(sku: &str, admin: Option<bool>) -> Registry {
        Registry {
            id: Some("/subscriptions/0000/resourceGroups/rg/providers/Microsoft.ContainerRegistry/registries/acr".to_string()),
            name: Some("acr".to_string()),
            location: Some("westeurope".to_string()),
            sku: Some(Sku {
                name: sku.to_string(),
                tier: Some(sku.to_string()),
            }),
            properties: Some(RegistryProperties {
                admin_user_enabled: admin,
                login_server: Some("acr.azurecr.io".to_string()),
                provisioning_state: Some(ProvisioningState::Succeeded),
                status: None,
            }),
        }
    }

    #[test]
    fn test_new_registry() {
        let az = new_registry(&registry("Premium", true).spec);
        assert_eq!(az.sku.unwrap().name, "Premium");
        assert_eq!(az.location.as_deref(), Some("westeurope"));
        assert_eq!(az.properties.unwrap().admin_user_enabled, Some(true));
    }

    #[test]
    fn test_registry_up_to_date() {
        assert!(registry_up_to_date(&registry("Basic", false), &observed("Basic", Some(false))));
        assert!(!registry_up_to_date(&registry("Basic", false), &observed("Standard", Some(false))));
        assert!(!registry_up_to_date(&registry("Basic", true), &observed("Basic", Some(false))));
    }

    #[test]
    fn test_registry_sku_ignored_when_unset() {
        assert!(registry_up_to_date(&registry("", false), &observed("Premium", None)));
        assert!(!registry_up_to_date(&registry("", true), &observed("Premium", None)));
    }

    #[test]
    fn test_registry_initialized() {
        let mut r = registry("Basic", false);
        assert!(!registry_initialized(&r));

        for (state, initialized) in [
            ("Succeeded", true),
            ("Failed", true),
            ("Canceled", true),
            ("Creating", false),
            ("Updating", false),
            ("Deleting", false),
            ("", false),
        ] {
            r.status = Some(RegistryStatus {
                state: state.to_string(),
                ..Default::default()
            });
            assert_eq!(registry_initialized(&r), initialized, "state {state:?}");
        }
    }

    #[test]
    fn test_update_registry_status() {
        let mut r = registry("Basic", false);
        let mut az = observed("Basic", Some(false));
        az.properties.as_mut().unwrap().status = Some(Status {
            display_status: Some("Running".to_string()),
            message: Some("Registry is healthy".to_string()),
            timestamp: None,
        });

        update_registry_status(&mut r, &az);
        let status = r.status.as_ref().unwrap();
        assert_eq!(status.state, "Succeeded");
        assert_eq!(status.status, "Running");
        assert_eq!(status.status_message, "Registry is healthy");
        assert_eq!(status.login_server, "acr.azurecr.io");
        assert_eq!(
            status.resource_status.get_condition(ConditionType::Ready).status,
            ConditionStatus::True
        );
        assert!(registry_initialized(&r));

        // display status is cleared once Azure stops reporting it
        update_registry_status(&mut r, &observed("Basic", Some(false)));
        let status = r.status.unwrap();
        assert!(status.status.is_empty());
        assert!(status.status_message.is_empty());
    }

    #[test]
    fn test_provisioning_state_wire_format() {
        let props: RegistryProperties =
            serde_json::from_str(r#"{"provisioningState":"Canceled","adminUserEnabled":false}"#).unwrap();
        assert_eq!(props.provisioning_state, Some(ProvisioningState::Canceled));
        assert_eq!(ProvisioningState::Canceled.to_string(), "Canceled");
    }

    #[test]
    fn test_unlisted_provisioning_state_still_parses() {
        let body = r#"{"sku":{"name":"Basic"},"properties":{"provisioningState":"Migrating","adminUserEnabled":false,"loginServer":"acr.azurecr.io"}}"#;
        let az: Registry = serde_json::from_str(body).unwrap();
        assert_eq!(
            az.properties.as_ref().unwrap().provisioning_state,
            Some(ProvisioningState::Unknown)
        );

        let mut r = registry("Basic", false);
        update_registry_status(&mut r, &az);
        assert!(!registry_initialized(&r));
        let status = r.status.unwrap();
        assert_eq!(status.state, "Unknown");
        assert_eq!(status.login_server, "acr.azurecr.io");
    }
}
