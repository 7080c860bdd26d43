//! AKS managed cluster adapters

use crds::compute as v1alpha3;
use crds::DEFAULT_NODE_COUNT;
use tracing::debug;

use super::{availability_condition, non_empty, AGENT_POOL_PROFILE_NAME};
use crate::models::{
    AgentPoolMode, AgentPoolType, ManagedCluster, ManagedClusterAgentPoolProfile,
    ManagedClusterAgentPoolProfileProperties, ManagedClusterProperties,
    ManagedClusterServicePrincipalProfile,
};

/// Build the system agent pool profile of an AKS cluster
///
/// The subnet is only set when the cluster names one.
pub fn new_managed_cluster_agent_pool_profile(cluster: &v1alpha3::AKSCluster) -> ManagedClusterAgentPoolProfile {
    let p = &cluster.spec.parameters;
    ManagedClusterAgentPoolProfile {
        name: AGENT_POOL_PROFILE_NAME.to_string(),
        properties: ManagedClusterAgentPoolProfileProperties {
            count: Some(p.node_count.unwrap_or(DEFAULT_NODE_COUNT)),
            vm_size: Some(p.node_vm_size.clone()),
            vnet_subnet_id: non_empty(&p.vnet_subnet_id),
            mode: Some(AgentPoolMode::System),
            pool_type: Some(AgentPoolType::VirtualMachineScaleSets),
            ..Default::default()
        },
    }
}

/// Build the Azure managed cluster for an AKSCluster managed resource
///
/// `app_id` and `secret` are the credentials of the service principal the
/// cluster runs as.
pub fn new_managed_cluster(cluster: &v1alpha3::AKSCluster, app_id: &str, secret: &str) -> ManagedCluster {
    let p = &cluster.spec.parameters;
    ManagedCluster {
        location: non_empty(&p.location),
        properties: Some(ManagedClusterProperties {
            kubernetes_version: non_empty(&p.version),
            dns_prefix: non_empty(&p.dns_name_prefix),
            enable_rbac: Some(!p.disable_rbac),
            agent_pool_profiles: Some(vec![new_managed_cluster_agent_pool_profile(cluster)]),
            service_principal_profile: Some(ManagedClusterServicePrincipalProfile {
                client_id: app_id.to_string(),
                secret: Some(secret.to_string()),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Whether the Azure cluster differs from the desired version or system pool
///
/// The version is only compared when the cluster pins one.
pub fn aks_cluster_needs_update(cluster: &v1alpha3::AKSCluster, az: &ManagedCluster) -> bool {
    let p = &cluster.spec.parameters;

    let observed_version = az
        .properties
        .as_ref()
        .and_then(|x| x.kubernetes_version.as_deref())
        .unwrap_or_default();
    if !p.version.is_empty() && p.version != observed_version {
        debug!(
            "AKS cluster version differs: desired '{}', observed '{}'",
            p.version, observed_version
        );
        return true;
    }

    let Some(profile) = az.agent_pool_profile(AGENT_POOL_PROFILE_NAME) else {
        debug!("AKS cluster has no '{}' agent pool profile", AGENT_POOL_PROFILE_NAME);
        return true;
    };

    let desired_count = p.node_count.unwrap_or(DEFAULT_NODE_COUNT);
    let observed_count = profile.properties.count.unwrap_or(0);
    if desired_count != observed_count {
        debug!(
            "AKS cluster node count differs: desired {}, observed {}",
            desired_count, observed_count
        );
        return true;
    }

    let observed_size = profile.properties.vm_size.as_deref().unwrap_or_default();
    if p.node_vm_size != observed_size {
        debug!(
            "AKS cluster VM size differs: desired '{}', observed '{}'",
            p.node_vm_size, observed_size
        );
        return true;
    }

    false
}

/// Copy the observed state of an Azure cluster into the AKSCluster status
pub fn update_aks_cluster_status(cluster: &mut v1alpha3::AKSCluster, az: &ManagedCluster) {
    let props = az.properties.as_ref();
    let status = cluster.status.get_or_insert_with(Default::default);

    status.state = props
        .and_then(|x| x.provisioning_state.clone())
        .unwrap_or_default();
    status.provider_id = az.id.clone().unwrap_or_default();
    status.endpoint = props.and_then(|x| x.fqdn.clone()).unwrap_or_default();

    let ready = availability_condition(&status.state);
    status.resource_status.set_conditions([ready]);
}
