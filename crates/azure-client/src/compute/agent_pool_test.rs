//! Unit tests for agent pool adapters

#[cfg(test)]
mod tests {
    use crate::compute::*;
    use crate::models::{AgentPool, AgentPoolMode, AgentPoolType, ManagedClusterAgentPoolProfileProperties};
    use crds::{AgentPoolParameters, AgentPoolSpec, ConditionStatus, ConditionType};

    fn pool(node_count: Option<i32>, vm_size: &str, subnet: &str) -> crds::AgentPool {
        crds::AgentPool::new(
            "pool-a",
            AgentPoolSpec {
                parameters: AgentPoolParameters {
                    aks_cluster_name: "prod-aks".to_string(),
                    resource_group_name: "rg".to_string(),
                    node_count,
                    node_vm_size: vm_size.to_string(),
                    vnet_subnet_id: subnet.to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
    }

    fn observed(count: Option<i32>, vm_size: &str) -> AgentPool {
        AgentPool {
            id: Some("/subscriptions/0000/resourceGroups/rg/providers/Microsoft.ContainerService/managedClusters/prod-aks/agentPools/pool-a".to_string()),
            name: Some("pool-a".to_string()),
            properties: Some(ManagedClusterAgentPoolProfileProperties {
                count,
                vm_size: Some(vm_size.to_string()),
                provisioning_state: Some("Succeeded".to_string()),
                availability_zones: Some(vec!["1".to_string()]),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_new_agent_pool_defaults_node_count() {
        let az = new_agent_pool(&pool(None, "Standard_B2s", "/subnets/aks"));
        let props = az.properties.unwrap();
        assert_eq!(props.count, Some(1));
        assert_eq!(props.vm_size.as_deref(), Some("Standard_B2s"));
        assert_eq!(props.vnet_subnet_id.as_deref(), Some("/subnets/aks"));
        assert_eq!(props.mode, Some(AgentPoolMode::User));
        assert_eq!(props.pool_type, Some(AgentPoolType::VirtualMachineScaleSets));
        assert_eq!(props.availability_zones, None);
    }

    #[test]
    fn test_new_agent_pool_explicit_count_and_zones() {
        let mut p = pool(Some(5), "Standard_D4s_v3", "");
        p.spec.parameters.availability_zones = vec!["1".to_string(), "3".to_string()];
        let props = new_agent_pool(&p).properties.unwrap();
        assert_eq!(props.count, Some(5));
        assert_eq!(props.vnet_subnet_id, None);
        assert_eq!(props.availability_zones, Some(vec!["1".to_string(), "3".to_string()]));
    }

    #[test]
    fn test_new_agent_pool_wire_format() {
        let json = serde_json::to_value(new_agent_pool(&pool(Some(2), "Standard_B2s", "/subnets/aks"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "properties": {
                    "count": 2,
                    "vmSize": "Standard_B2s",
                    "vnetSubnetID": "/subnets/aks",
                    "mode": "User",
                    "type": "VirtualMachineScaleSets"
                }
            })
        );
    }

    #[test]
    fn test_agent_pool_needs_update() {
        let desired = pool(Some(3), "Standard_B2s", "");
        assert!(!agent_pool_needs_update(&desired, &observed(Some(3), "Standard_B2s")));
        assert!(agent_pool_needs_update(&desired, &observed(Some(2), "Standard_B2s")));
        assert!(agent_pool_needs_update(&desired, &observed(Some(3), "Standard_D2s_v3")));
        assert!(agent_pool_needs_update(&desired, &AgentPool::default()));
    }

    #[test]
    fn test_unset_node_count_matches_created_pool() {
        let desired = crds::AgentPool::new("pool-a", AgentPoolSpec::default());
        let applied = AgentPool {
            properties: new_agent_pool(&desired).properties,
            ..Default::default()
        };
        assert!(!agent_pool_needs_update(&desired, &applied));

        let with_size = pool(None, "Standard_B2s", "");
        assert!(!agent_pool_needs_update(&with_size, &observed(Some(1), "Standard_B2s")));
        assert!(agent_pool_needs_update(&with_size, &observed(None, "Standard_B2s")));
        assert!(agent_pool_needs_update(&with_size, &observed(Some(2), "Standard_B2s")));
    }

    #[test]
    fn test_update_agent_pool_status() {
        let mut p = pool(Some(1), "Standard_B2s", "");
        update_agent_pool_status(&mut p, &observed(Some(1), "Standard_B2s"));

        let status = p.status.unwrap();
        assert_eq!(status.state, "Succeeded");
        assert!(status.provider_id.ends_with("/agentPools/pool-a"));
        assert_eq!(status.node_count, Some(1));
        assert_eq!(status.availability_zones, vec!["1"]);
        let ready = status.resource_status.get_condition(ConditionType::Ready);
        assert_eq!(ready.status, ConditionStatus::True);
    }
}
