//! Container registry adapters

use crds::compute as v1alpha3;
use tracing::debug;

use super::{availability_condition, non_empty};
use crate::models::{Registry, RegistryProperties, Sku};

/// Build the Azure registry for a Registry spec
pub fn new_registry(spec: &v1alpha3::RegistrySpec) -> Registry {
    Registry {
        location: non_empty(&spec.location),
        sku: Some(Sku {
            name: spec.sku.clone(),
            tier: None,
        }),
        properties: Some(RegistryProperties {
            admin_user_enabled: Some(spec.properties.admin_user_enabled),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Whether the Azure registry matches the desired SKU and admin user setting
///
/// The SKU is only compared when the spec sets one.
pub fn registry_up_to_date(registry: &v1alpha3::Registry, az: &Registry) -> bool {
    let spec = &registry.spec;

    let observed_sku = az.sku.as_ref().map(|s| s.name.as_str()).unwrap_or_default();
    if !spec.sku.is_empty() && spec.sku != observed_sku {
        debug!("Registry SKU differs: desired '{}', observed '{}'", spec.sku, observed_sku);
        return false;
    }

    let observed_admin = az
        .properties
        .as_ref()
        .and_then(|x| x.admin_user_enabled)
        .unwrap_or(false);
    if spec.properties.admin_user_enabled != observed_admin {
        debug!(
            "Registry admin user differs: desired {}, observed {}",
            spec.properties.admin_user_enabled, observed_admin
        );
        return false;
    }

    true
}

/// Whether the registry has reached a terminal provisioning state
pub fn registry_initialized(registry: &v1alpha3::Registry) -> bool {
    let state = registry.status.as_ref().map(|s| s.state.as_str());
    matches!(state, Some("Succeeded" | "Failed" | "Canceled"))
}

/// Copy the observed state of an Azure registry into the Registry status
pub fn update_registry_status(registry: &mut v1alpha3::Registry, az: &Registry) {
    let props = az.properties.as_ref();
    let status = registry.status.get_or_insert_with(Default::default);

    status.state = props
        .and_then(|x| x.provisioning_state)
        .map(|s| s.to_string())
        .unwrap_or_default();

    match props.and_then(|x| x.status.as_ref()) {
        Some(display) => {
            status.status = display.display_status.clone().unwrap_or_default();
            status.status_message = display.message.clone().unwrap_or_default();
        }
        None => {
            status.status.clear();
            status.status_message.clear();
        }
    }

    status.login_server = props
        .and_then(|x| x.login_server.clone())
        .unwrap_or_default();

    let ready = availability_condition(&status.state);
    status.resource_status.set_conditions([ready]);
}
