//! Reference resolution for compute resources
//!
//! Each managed resource resolves its reference fields in declaration order.
//! Errors are wrapped with the path of the field that failed.

use crate::common::external_name;
use crate::error::ReferenceError;
use crate::network::{network_interface_id, subnet_id, NetworkInterface, Subnet};
use crate::resolver::{ApiResolver, ReferenceReader, ResolutionRequest, ResolveReferences};
use crate::resource_group::ResourceGroup;

use super::{AKSCluster, AgentPool, Registry, VirtualMachine};

/// Name of an AKS cluster as referenced by its agent pools
pub fn aks_cluster_name(cluster: &AKSCluster) -> String {
    cluster.metadata.name.clone().unwrap_or_default()
}

#[async_trait::async_trait]
impl ResolveReferences for AgentPool {
    async fn resolve_references<R: ReferenceReader>(&mut self, reader: &R) -> Result<(), ReferenceError> {
        let r = ApiResolver::new(reader, &*self);
        let p = &mut self.spec.parameters;

        let rsp = r
            .resolve(ResolutionRequest::<ResourceGroup> {
                current_value: &p.resource_group_name,
                reference: p.resource_group_name_ref.as_ref(),
                selector: p.resource_group_name_selector.as_ref(),
                extract: external_name::<ResourceGroup>,
                namespace: None,
            })
            .await
            .map_err(|e| e.in_field("spec.resourceGroupName"))?;
        p.resource_group_name = rsp.resolved_value;
        p.resource_group_name_ref = rsp.resolved_reference;

        let rsp = r
            .resolve(ResolutionRequest::<Subnet> {
                current_value: &p.vnet_subnet_id,
                reference: p.vnet_subnet_id_ref.as_ref(),
                selector: p.vnet_subnet_id_selector.as_ref(),
                extract: subnet_id,
                namespace: None,
            })
            .await
            .map_err(|e| e.in_field("spec.vnetSubnetID"))?;
        p.vnet_subnet_id = rsp.resolved_value;
        p.vnet_subnet_id_ref = rsp.resolved_reference;

        let rsp = r
            .resolve(ResolutionRequest::<AKSCluster> {
                current_value: &p.aks_cluster_name,
                reference: p.aks_cluster_name_ref.as_ref(),
                selector: p.aks_cluster_name_selector.as_ref(),
                extract: aks_cluster_name,
                namespace: None,
            })
            .await
            .map_err(|e| e.in_field("spec.aksClusterName"))?;
        p.aks_cluster_name = rsp.resolved_value;
        p.aks_cluster_name_ref = rsp.resolved_reference;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ResolveReferences for AKSCluster {
    async fn resolve_references<R: ReferenceReader>(&mut self, reader: &R) -> Result<(), ReferenceError> {
        let r = ApiResolver::new(reader, &*self);
        let namespace = self.metadata.namespace.clone();
        let p = &mut self.spec.parameters;

        let rsp = r
            .resolve(ResolutionRequest::<ResourceGroup> {
                current_value: &p.resource_group_name,
                reference: p.resource_group_name_ref.as_ref(),
                selector: p.resource_group_name_selector.as_ref(),
                extract: external_name::<ResourceGroup>,
                namespace: namespace.as_deref(),
            })
            .await
            .map_err(|e| e.in_field("spec.resourceGroupName"))?;
        p.resource_group_name = rsp.resolved_value;
        p.resource_group_name_ref = rsp.resolved_reference;

        let rsp = r
            .resolve(ResolutionRequest::<Subnet> {
                current_value: &p.vnet_subnet_id,
                reference: p.vnet_subnet_id_ref.as_ref(),
                selector: p.vnet_subnet_id_selector.as_ref(),
                extract: subnet_id,
                namespace: namespace.as_deref(),
            })
            .await
            .map_err(|e| e.in_field("spec.vnetSubnetID"))?;
        p.vnet_subnet_id = rsp.resolved_value;
        p.vnet_subnet_id_ref = rsp.resolved_reference;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ResolveReferences for Registry {
    async fn resolve_references<R: ReferenceReader>(&mut self, reader: &R) -> Result<(), ReferenceError> {
        let r = ApiResolver::new(reader, &*self);
        let namespace = self.metadata.namespace.clone();
        let spec = &mut self.spec;

        let rsp = r
            .resolve(ResolutionRequest::<ResourceGroup> {
                current_value: &spec.resource_group_name,
                reference: spec.resource_group_name_ref.as_ref(),
                selector: spec.resource_group_name_selector.as_ref(),
                extract: external_name::<ResourceGroup>,
                namespace: namespace.as_deref(),
            })
            .await
            .map_err(|e| e.in_field("spec.resourceGroupName"))?;
        spec.resource_group_name = rsp.resolved_value;
        spec.resource_group_name_ref = rsp.resolved_reference;

        Ok(())
    }
}

#[async_trait::async_trait]
impl ResolveReferences for VirtualMachine {
    async fn resolve_references<R: ReferenceReader>(&mut self, reader: &R) -> Result<(), ReferenceError> {
        let r = ApiResolver::new(reader, &*self);
        let namespace = self.metadata.namespace.clone();
        let spec = &mut self.spec;

        let rsp = r
            .resolve(ResolutionRequest::<ResourceGroup> {
                current_value: &spec.resource_group_name,
                reference: spec.resource_group_name_ref.as_ref(),
                selector: spec.resource_group_name_selector.as_ref(),
                extract: external_name::<ResourceGroup>,
                namespace: namespace.as_deref(),
            })
            .await
            .map_err(|e| e.in_field("spec.resourceGroupName"))?;
        spec.resource_group_name = rsp.resolved_value;
        spec.resource_group_name_ref = rsp.resolved_reference;

        let Some(net_prof) = spec
            .virtual_machine_parameters
            .as_mut()
            .and_then(|p| p.network_profile.as_mut())
        else {
            return Ok(());
        };

        for (i, nic) in net_prof.network_interfaces.iter_mut().enumerate() {
            let rsp = r
                .resolve(ResolutionRequest::<NetworkInterface> {
                    current_value: &nic.network_interface_id,
                    reference: nic.network_interface_id_ref.as_ref(),
                    selector: nic.network_interface_id_selector.as_ref(),
                    extract: network_interface_id,
                    namespace: namespace.as_deref(),
                })
                .await
                .map_err(|e| {
                    e.in_field(format!(
                        "spec.properties.networkProfile.networkInterfaces[{i}].networkInterfaceID"
                    ))
                })?;
            nic.network_interface_id = rsp.resolved_value;
            nic.network_interface_id_ref = rsp.resolved_reference;
        }

        Ok(())
    }
}
