//! AKS agent pool adapters

use crds::compute as v1alpha3;
use crds::DEFAULT_NODE_COUNT;
use tracing::debug;

use super::{availability_condition, non_empty};
use crate::models::{AgentPool, AgentPoolMode, AgentPoolType, ManagedClusterAgentPoolProfileProperties};

/// Build the Azure agent pool for an AgentPool managed resource
pub fn new_agent_pool(pool: &v1alpha3::AgentPool) -> AgentPool {
    let p = &pool.spec.parameters;
    AgentPool {
        properties: Some(ManagedClusterAgentPoolProfileProperties {
            count: Some(p.node_count.unwrap_or(DEFAULT_NODE_COUNT)),
            vm_size: Some(p.node_vm_size.clone()),
            vnet_subnet_id: non_empty(&p.vnet_subnet_id),
            availability_zones: (!p.availability_zones.is_empty())
                .then(|| p.availability_zones.clone()),
            mode: Some(AgentPoolMode::User),
            pool_type: Some(AgentPoolType::VirtualMachineScaleSets),
            provisioning_state: None,
        }),
        ..Default::default()
    }
}

/// Whether the Azure agent pool differs from the desired node count or VM size
///
/// An unset desired count means the default the pool is created with; an
/// unset observed count compares as 0.
pub fn agent_pool_needs_update(pool: &v1alpha3::AgentPool, az: &AgentPool) -> bool {
    let p = &pool.spec.parameters;
    let props = az.properties.as_ref();

    let desired_count = p.node_count.unwrap_or(DEFAULT_NODE_COUNT);
    let observed_count = props.and_then(|x| x.count).unwrap_or(0);
    if desired_count != observed_count {
        debug!(
            "Agent pool node count differs: desired {}, observed {}",
            desired_count, observed_count
        );
        return true;
    }

    let observed_size = props.and_then(|x| x.vm_size.as_deref()).unwrap_or_default();
    if p.node_vm_size != observed_size {
        debug!(
            "Agent pool VM size differs: desired '{}', observed '{}'",
            p.node_vm_size, observed_size
        );
        return true;
    }

    false
}

/// Copy the observed state of an Azure agent pool into the AgentPool status
pub fn update_agent_pool_status(pool: &mut v1alpha3::AgentPool, az: &AgentPool) {
    let props = az.properties.as_ref();
    let status = pool.status.get_or_insert_with(Default::default);

    status.state = props
        .and_then(|x| x.provisioning_state.clone())
        .unwrap_or_default();
    status.provider_id = az.id.clone().unwrap_or_default();
    status.node_count = props.and_then(|x| x.count);
    status.availability_zones = props
        .and_then(|x| x.availability_zones.clone())
        .unwrap_or_default();

    let ready = availability_condition(&status.state);
    status.resource_status.set_conditions([ready]);
}
