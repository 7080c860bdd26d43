//! Mock ReferenceReader for unit testing
//!
//! Stores objects in memory so reference resolution can be tested without a
//! running API server.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;

use super::reader::{in_namespace, ReferenceReader, Referenceable};
use crate::error::ReferenceError;
use crate::references::Selector;

#[derive(Debug, Clone)]
struct StoredObject {
    kind: String,
    name: String,
    value: serde_json::Value,
}

/// Mock ReferenceReader for testing
///
/// Objects of any kind can be added; lookups deserialize them back into the
/// requested kind. Every `get`/`list` call is counted so tests can assert that
/// no-op resolutions never hit the store.
#[derive(Debug, Clone, Default)]
pub struct MockReader {
    objects: Arc<Mutex<Vec<StoredObject>>>,
    lookups: Arc<AtomicUsize>,
}

impl MockReader {
    /// Create an empty mock reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the mock store (for test setup)
    pub fn add<K: Referenceable>(&self, obj: &K) {
        let name = obj.meta().name.clone().unwrap_or_default();
        match serde_json::to_value(obj) {
            Ok(value) => {
                self.objects
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(StoredObject {
                        kind: K::kind(&()).to_string(),
                        name,
                        value,
                    });
            }
            Err(e) => warn!("Failed to store {} {} in mock reader: {}", K::kind(&()), name, e),
        }
    }

    /// Number of `get` and `list` calls made so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn objects_of<K: Referenceable>(&self) -> Result<Vec<K>, ReferenceError> {
        let kind = K::kind(&());
        self.objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|o| o.kind == kind)
            .map(|o| serde_json::from_value(o.value.clone()).map_err(ReferenceError::from))
            .collect()
    }
}

#[async_trait::async_trait]
impl ReferenceReader for MockReader {
    async fn get<K: Referenceable>(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<Option<K>, ReferenceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let found = self
            .objects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|o| o.kind == K::kind(&()) && o.name == name)
            .map(|o| o.value.clone());
        match found {
            Some(value) => {
                let obj: K = serde_json::from_value(value)?;
                Ok(Some(obj).filter(|o| in_namespace(o, namespace)))
            }
            None => Ok(None),
        }
    }

    async fn list<K: Referenceable>(
        &self,
        namespace: Option<&str>,
        match_labels: &BTreeMap<String, String>,
    ) -> Result<Vec<K>, ReferenceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let selector = Selector {
            match_labels: match_labels.clone(),
            match_controller_ref: None,
        };
        Ok(self
            .objects_of::<K>()?
            .into_iter()
            .filter(|o| in_namespace(o, namespace) && selector.matches(o.meta().labels.as_ref()))
            .collect())
    }
}
