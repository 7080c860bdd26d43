//! Cross-resource references for managed resources
//!
//! A managed resource can point at another object either directly by name
//! (`*Ref` fields) or indirectly through a label selector (`*Selector` fields).
//! The reference resolver turns either form into a concrete value and records
//! the object it came from in the matching `*Ref` field.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reference to another managed resource by name
///
/// Managed resources in this provider are cluster scoped, so a name is enough
/// to identify the target once its kind is known from the field it sits in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Name of the referenced object
    pub name: String,
}

impl Reference {
    /// Create a reference to the named object
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Selects a referenced managed resource by labels
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// Labels an object must carry (all of them) to be selected
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,

    /// Only select objects controlled by the same controller as the
    /// selecting resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_controller_ref: Option<bool>,
}

impl Selector {
    /// Selector matching every label in `labels`
    pub fn with_labels<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            match_labels: labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            match_controller_ref: None,
        }
    }

    /// Whether candidates must share the selecting resource's controller
    pub fn controllers_must_match(&self) -> bool {
        self.match_controller_ref.unwrap_or(false)
    }

    /// Whether `labels` carries every label this selector asks for
    pub fn matches(&self, labels: Option<&BTreeMap<String, String>>) -> bool {
        self.match_labels.iter().all(|(key, value)| {
            labels
                .and_then(|l| l.get(key))
                .is_some_and(|actual| actual == value)
        })
    }
}

/// A reference to a Kubernetes secret, used for connection details
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the secret
    pub name: String,

    /// Namespace of the secret
    pub namespace: String,
}
