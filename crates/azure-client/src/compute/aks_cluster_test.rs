//! Unit tests for AKS cluster adapters

#[cfg(test)]
mod tests {
    use crate::compute::*;
    use crate::models::{
        AgentPoolMode, ManagedCluster, ManagedClusterAgentPoolProfile,
        ManagedClusterAgentPoolProfileProperties, ManagedClusterProperties,
    };
    use crds::{AKSCluster, AKSClusterParameters, AKSClusterSpec, ConditionReason, ConditionType};

    fn cluster(subnet: &str) -> AKSCluster {
        AKSCluster::new(
            "prod-aks",
            AKSClusterSpec {
                parameters: AKSClusterParameters {
                    resource_group_name: "rg".to_string(),
                    vnet_subnet_id: subnet.to_string(),
                    location: "westeurope".to_string(),
                    version: "1.29.4".to_string(),
                    node_count: Some(3),
                    node_vm_size: "Standard_D2s_v3".to_string(),
                    dns_name_prefix: "prod".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
    }

    fn observed(version: &str, count: i32, vm_size: &str) -> ManagedCluster {
        ManagedCluster {
            id: Some("/subscriptions/0000/resourceGroups/rg/providers/Microsoft.ContainerService/managedClusters/prod-aks".to_string()),
            name: Some("prod-aks".to_string()),
            location: Some("westeurope".to_string()),
            properties: Some(ManagedClusterProperties {
                kubernetes_version: Some(version.to_string()),
                fqdn: Some("prod-1a2b3c.hcp.westeurope.azmk8s.io".to_string()),
                provisioning_state: Some("Creating".to_string()),
                agent_pool_profiles: Some(vec![ManagedClusterAgentPoolProfile {
                    name: AGENT_POOL_PROFILE_NAME.to_string(),
                    properties: ManagedClusterAgentPoolProfileProperties {
                        count: Some(count),
                        vm_size: Some(vm_size.to_string()),
                        ..Default::default()
                    },
                }]),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_system_profile_subnet_only_when_set() {
        let with_subnet = new_managed_cluster_agent_pool_profile(&cluster("/subnets/aks"));
        assert_eq!(with_subnet.name, "agentpool");
        assert_eq!(with_subnet.properties.mode, Some(AgentPoolMode::System));
        assert_eq!(with_subnet.properties.vnet_subnet_id.as_deref(), Some("/subnets/aks"));

        let without = new_managed_cluster_agent_pool_profile(&cluster(""));
        assert_eq!(without.properties.vnet_subnet_id, None);
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("vnetSubnetID").is_none());
    }

    #[test]
    fn test_system_profile_default_count() {
        let mut c = cluster("");
        c.spec.parameters.node_count = None;
        assert_eq!(new_managed_cluster_agent_pool_profile(&c).properties.count, Some(1));
    }

    #[test]
    fn test_new_managed_cluster() {
        let mc = new_managed_cluster(&cluster(""), "app-id", "app-secret");
        assert_eq!(mc.location.as_deref(), Some("westeurope"));
        let props = mc.properties.unwrap();
        assert_eq!(props.kubernetes_version.as_deref(), Some("1.29.4"));
        assert_eq!(props.dns_prefix.as_deref(), Some("prod"));
        assert_eq!(props.enable_rbac, Some(true));
        let sp = props.service_principal_profile.unwrap();
        assert_eq!(sp.client_id, "app-id");
        assert_eq!(sp.secret.as_deref(), Some("app-secret"));
        assert_eq!(props.agent_pool_profiles.unwrap().len(), 1);
    }

    #[test]
    fn test_disable_rbac() {
        let mut c = cluster("");
        c.spec.parameters.disable_rbac = true;
        let props = new_managed_cluster(&c, "app-id", "secret").properties.unwrap();
        assert_eq!(props.enable_rbac, Some(false));
    }

    #[test]
    fn test_aks_cluster_needs_update() {
        let desired = cluster("");
        assert!(!aks_cluster_needs_update(&desired, &observed("1.29.4", 3, "Standard_D2s_v3")));
        assert!(aks_cluster_needs_update(&desired, &observed("1.28.9", 3, "Standard_D2s_v3")));
        assert!(aks_cluster_needs_update(&desired, &observed("1.29.4", 2, "Standard_D2s_v3")));
        assert!(aks_cluster_needs_update(&desired, &observed("1.29.4", 3, "Standard_B2s")));
        assert!(aks_cluster_needs_update(&desired, &ManagedCluster::default()));
    }

    #[test]
    fn test_unpinned_version_is_not_compared() {
        let mut desired = cluster("");
        desired.spec.parameters.version.clear();
        assert!(!aks_cluster_needs_update(&desired, &observed("1.30.0", 3, "Standard_D2s_v3")));
    }

    #[test]
    fn test_update_aks_cluster_status() {
        let mut c = cluster("");
        update_aks_cluster_status(&mut c, &observed("1.29.4", 3, "Standard_D2s_v3"));
        let status = c.status.unwrap();
        assert_eq!(status.state, "Creating");
        assert!(status.provider_id.ends_with("/managedClusters/prod-aks"));
        assert_eq!(status.endpoint, "prod-1a2b3c.hcp.westeurope.azmk8s.io");
        let ready = status.resource_status.get_condition(ConditionType::Ready);
        assert_eq!(ready.reason, ConditionReason::Creating);
    }
}
