//! Types shared by every managed resource
//!
//! Every managed resource flattens a [`ResourceSpec`] into its spec and a
//! [`ResourceStatus`] into its status, so the provider config, deletion
//! policy and conditions look the same on every kind.

use chrono::{DateTime, Utc};
use kube::Resource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::{Reference, SecretReference};

/// Annotation holding the name of the external (Azure) resource
pub const EXTERNAL_NAME_ANNOTATION: &str = "crossplane.io/external-name";

/// Provider config used when a resource does not name one
pub const DEFAULT_PROVIDER_CONFIG: &str = "default";

/// Fields common to the spec of every managed resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpec {
    /// Secret the connection details of the external resource are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_connection_secret_to_ref: Option<SecretReference>,

    /// Provider config holding the Azure credentials for this resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config_ref: Option<Reference>,

    /// What happens to the external resource when this one is deleted
    #[serde(default)]
    pub deletion_policy: DeletionPolicy,
}

impl ResourceSpec {
    /// Name of the provider config, falling back to `default`
    pub fn provider_config_name(&self) -> &str {
        self.provider_config_ref
            .as_ref()
            .map_or(DEFAULT_PROVIDER_CONFIG, |r| r.name.as_str())
    }
}

/// Deletion policy of a managed resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum DeletionPolicy {
    /// Delete the external resource together with the managed resource
    #[default]
    Delete,
    /// Leave the external resource in place
    Orphan,
}

/// Observed state common to every managed resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    /// Conditions of the resource (at most one per type)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl ResourceStatus {
    /// Set conditions, replacing any existing condition of the same type
    ///
    /// A condition equal to the existing one (ignoring the transition time)
    /// leaves the existing condition untouched.
    pub fn set_conditions(&mut self, conditions: impl IntoIterator<Item = Condition>) {
        for new in conditions {
            match self
                .conditions
                .iter_mut()
                .find(|c| c.condition_type == new.condition_type)
            {
                Some(existing) if existing.equal(&new) => {}
                Some(existing) => *existing = new,
                None => self.conditions.push(new),
            }
        }
    }

    /// The condition of the given type, or an `Unknown` one when unset
    pub fn get_condition(&self, condition_type: ConditionType) -> Condition {
        self.conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
            .cloned()
            .unwrap_or_else(|| Condition {
                condition_type,
                status: ConditionStatus::Unknown,
                last_transition_time: None,
                reason: ConditionReason::Unknown,
                message: None,
            })
    }
}

/// Condition types used by managed resources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum ConditionType {
    /// The external resource is ready for use
    Ready,
    /// The managed resource is in sync with the external resource
    Synced,
}

/// Condition status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum ConditionStatus {
    /// The condition holds
    True,
    /// The condition does not hold
    False,
    /// Not yet observed
    Unknown,
}

/// Machine readable reason for a condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub enum ConditionReason {
    /// The external resource is ready for use
    Available,
    /// The external resource cannot be used
    Unavailable,
    /// The external resource is being created
    Creating,
    /// The external resource is being deleted
    Deleting,
    /// The last reconcile pass succeeded
    ReconcileSuccess,
    /// The last reconcile pass failed
    ReconcileError,
    /// No condition of this type has been set
    Unknown,
}

/// A condition of a managed resource
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of the condition
    #[serde(rename = "type")]
    pub condition_type: ConditionType,

    /// Status of the condition
    pub status: ConditionStatus,

    /// Last time the condition transitioned from one status to another
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    /// Reason for the last transition
    pub reason: ConditionReason,

    /// Human readable details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    fn new(condition_type: ConditionType, status: ConditionStatus, reason: ConditionReason) -> Self {
        Self {
            condition_type,
            status,
            last_transition_time: Some(Utc::now()),
            reason,
            message: None,
        }
    }

    /// The external resource is available for use
    pub fn available() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::True, ConditionReason::Available)
    }

    /// The external resource is not available for use
    pub fn unavailable() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, ConditionReason::Unavailable)
    }

    /// The external resource is being created
    pub fn creating() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, ConditionReason::Creating)
    }

    /// The external resource is being deleted
    pub fn deleting() -> Self {
        Self::new(ConditionType::Ready, ConditionStatus::False, ConditionReason::Deleting)
    }

    /// The last reconcile pass succeeded
    pub fn reconcile_success() -> Self {
        Self::new(ConditionType::Synced, ConditionStatus::True, ConditionReason::ReconcileSuccess)
    }

    /// The last reconcile pass failed with `message`
    pub fn reconcile_error(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(ConditionType::Synced, ConditionStatus::False, ConditionReason::ReconcileError)
        }
    }

    /// Equality ignoring `last_transition_time`
    pub fn equal(&self, other: &Condition) -> bool {
        self.condition_type == other.condition_type
            && self.status == other.status
            && self.reason == other.reason
            && self.message == other.message
    }
}

/// External name of a managed resource, or the empty string when unset
pub fn external_name<K: Resource>(obj: &K) -> String {
    obj.meta()
        .annotations
        .as_ref()
        .and_then(|a| a.get(EXTERNAL_NAME_ANNOTATION))
        .cloned()
        .unwrap_or_default()
}

/// Set the external name of a managed resource
pub fn set_external_name<K: Resource>(obj: &mut K, name: impl Into<String>) {
    obj.meta_mut()
        .annotations
        .get_or_insert_with(Default::default)
        .insert(EXTERNAL_NAME_ANNOTATION.to_string(), name.into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ConfigMap;

    #[test]
    fn test_set_conditions_replaces_same_type() {
        let mut status = ResourceStatus::default();
        status.set_conditions([Condition::creating(), Condition::reconcile_success()]);
        assert_eq!(status.conditions.len(), 2);

        status.set_conditions([Condition::available()]);
        assert_eq!(status.conditions.len(), 2);
        let ready = status.get_condition(ConditionType::Ready);
        assert_eq!(ready.status, ConditionStatus::True);
        assert_eq!(ready.reason, ConditionReason::Available);
    }

    #[test]
    fn test_set_conditions_keeps_transition_time_when_unchanged() {
        let mut status = ResourceStatus::default();
        let mut first = Condition::available();
        first.last_transition_time = None;
        status.set_conditions([first]);

        status.set_conditions([Condition::available()]);
        assert!(
            status.conditions[0].last_transition_time.is_none(),
            "an equal condition must not bump the transition time"
        );
    }

    #[test]
    fn test_get_condition_unknown_when_missing() {
        let status = ResourceStatus::default();
        let synced = status.get_condition(ConditionType::Synced);
        assert_eq!(synced.status, ConditionStatus::Unknown);
        assert_eq!(synced.reason, ConditionReason::Unknown);
    }

    #[test]
    fn test_reconcile_error_carries_message() {
        let c = Condition::reconcile_error("spec.resourceGroupName: no resources matched selector");
        assert_eq!(c.condition_type, ConditionType::Synced);
        assert_eq!(c.status, ConditionStatus::False);
        assert_eq!(
            c.message.as_deref(),
            Some("spec.resourceGroupName: no resources matched selector")
        );
        assert!(!c.equal(&Condition::reconcile_error("other")));
    }

    #[test]
    fn test_provider_config_defaults() {
        let mut spec = ResourceSpec::default();
        assert_eq!(spec.provider_config_name(), "default");
        spec.provider_config_ref = Some(Reference::new("azure-prod"));
        assert_eq!(spec.provider_config_name(), "azure-prod");
        assert_eq!(spec.deletion_policy, DeletionPolicy::Delete);
    }

    #[test]
    fn test_external_name_annotation() {
        let mut cm = ConfigMap::default();
        assert_eq!(external_name(&cm), "");
        set_external_name(&mut cm, "rg-prod-westeurope");
        assert_eq!(external_name(&cm), "rg-prod-westeurope");
    }

    #[test]
    fn test_condition_serializes_type_field() {
        let json = serde_json::to_value(Condition::available()).unwrap();
        assert_eq!(json["type"], "Ready");
        assert_eq!(json["status"], "True");
        assert_eq!(json["reason"], "Available");
    }
}
