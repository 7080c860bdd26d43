//! ReferenceReader trait for looking up referenced objects
//!
//! This trait abstracts the Kubernetes API reads the resolver needs so the
//! resolver can be unit tested against an in-memory store.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use kube::api::ListParams;
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ReferenceError;

/// Bounds every kind that can be the target of a reference
pub trait Referenceable:
    Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned + Serialize + Send + Sync + 'static
{
}

impl<K> Referenceable for K where
    K: Resource<DynamicType = ()> + Clone + Debug + DeserializeOwned + Serialize + Send + Sync + 'static
{
}

/// Read access to the objects a managed resource can reference
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait ReferenceReader: Send + Sync {
    /// Get an object of kind `K` by name, `None` when it does not exist
    async fn get<K: Referenceable>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<Option<K>, ReferenceError>;

    /// List objects of kind `K` carrying every label in `match_labels`
    async fn list<K: Referenceable>(
        &self,
        namespace: Option<&str>,
        match_labels: &BTreeMap<String, String>,
    ) -> Result<Vec<K>, ReferenceError>;
}

/// Whether `obj` lives in `namespace` (no namespace means any)
pub(crate) fn in_namespace<K: Resource>(obj: &K, namespace: Option<&str>) -> bool {
    match namespace.filter(|ns| !ns.is_empty()) {
        None => true,
        Some(ns) => obj.meta().namespace.as_deref() == Some(ns),
    }
}

/// Render labels as a Kubernetes label selector (`k1=v1,k2=v2`)
pub(crate) fn label_selector(match_labels: &BTreeMap<String, String>) -> String {
    match_labels
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// ReferenceReader backed by the Kubernetes API
///
/// Managed resources of this provider are cluster scoped, so lookups go
/// through the cluster-wide API and namespace scoping is applied to the
/// returned objects.
#[derive(Clone)]
pub struct KubeReader {
    client: Client,
}

impl KubeReader {
    /// Create a reader using the given client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Debug for KubeReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KubeReader")
            .field("default_namespace", &self.client.default_namespace())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ReferenceReader for KubeReader {
    async fn get<K: Referenceable>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<Option<K>, ReferenceError> {
        let api: Api<K> = Api::all(self.client.clone());
        let obj = api.get_opt(name).await?;
        Ok(obj.filter(|o| in_namespace(o, namespace)))
    }

    async fn list<K: Referenceable>(
        &self,
        namespace: Option<&str>,
        match_labels: &BTreeMap<String, String>,
    ) -> Result<Vec<K>, ReferenceError> {
        let api: Api<K> = Api::all(self.client.clone());
        let mut lp = ListParams::default();
        if !match_labels.is_empty() {
            lp = lp.labels(&label_selector(match_labels));
        }
        let list = api.list(&lp).await?;
        debug!("Listed {} {} objects for selector", list.items.len(), K::kind(&()));
        Ok(list
            .items
            .into_iter()
            .filter(|o| in_namespace(o, namespace))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ConfigMap;
    use kube::api::ObjectMeta;

    #[test]
    fn test_label_selector_is_sorted_and_joined() {
        let labels = BTreeMap::from([
            ("env".to_string(), "prod".to_string()),
            ("app".to_string(), "aks".to_string()),
        ]);
        assert_eq!(label_selector(&labels), "app=aks,env=prod");
        assert_eq!(label_selector(&BTreeMap::new()), "");
    }

    #[test]
    fn test_in_namespace() {
        let cm = ConfigMap {
            metadata: ObjectMeta {
                name: Some("a".to_string()),
                namespace: Some("infra".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(in_namespace(&cm, None));
        assert!(in_namespace(&cm, Some("")));
        assert!(in_namespace(&cm, Some("infra")));
        assert!(!in_namespace(&cm, Some("default")));
    }
}
