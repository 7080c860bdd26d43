//! Reference resolution errors.

use thiserror::Error;

/// Errors that can occur while resolving cross-resource references.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Kubernetes API error
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// The referenced object does not exist
    #[error("cannot get referenced resource: {kind} {name} not found")]
    NotFound {
        /// Kind of the referenced object
        kind: String,
        /// Name of the referenced object
        name: String,
    },

    /// The referenced object exists but the extracted value is empty
    #[error("referenced field was empty (referenced resource may not yet be ready)")]
    EmptyValue,

    /// A selector matched no eligible object
    #[error("no resources matched selector")]
    NoMatch,

    /// Stored object could not be converted into the requested kind
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Resolution of a particular spec field failed
    #[error("{field}: {source}")]
    Field {
        /// Path of the field being resolved, e.g. `spec.vnetSubnetID`
        field: String,
        /// Underlying failure
        source: Box<ReferenceError>,
    },
}

impl ReferenceError {
    /// Wrap this error with the path of the field that failed
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Path of the failing field, if this error has been wrapped
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}
