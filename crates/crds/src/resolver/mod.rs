//! Reference resolution
//!
//! Resolves `*Ref` / `*Selector` fields of a managed resource into the plain
//! value fields they stand for. A field that already carries a value is left
//! alone, which keeps resolution idempotent across reconcile passes.
//!
//! # Example
//!
//! ```no_run
//! use crds::{AgentPool, KubeReader, ResolveReferences};
//!
//! # async fn example(client: kube::Client, mut pool: AgentPool) -> Result<(), crds::ReferenceError> {
//! let reader = KubeReader::new(client);
//! pool.resolve_references(&reader).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use kube::Resource;
use tracing::{debug, info};

use crate::error::ReferenceError;
use crate::references::{Reference, Selector};

pub use reader::{KubeReader, ReferenceReader, Referenceable};
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockReader;

/// Extracts the value a reference resolves to from the referenced object
pub type ExtractValueFn<K> = fn(&K) -> String;

/// A request to resolve one reference field
pub struct ResolutionRequest<'a, K> {
    /// Value currently held by the plain field
    pub current_value: &'a str,
    /// Direct reference, if any
    pub reference: Option<&'a Reference>,
    /// Label selector, if any
    pub selector: Option<&'a Selector>,
    /// How to turn the referenced object into a value
    pub extract: ExtractValueFn<K>,
    /// Namespace the lookup is scoped to (`None` for cluster wide)
    pub namespace: Option<&'a str>,
}

impl<K> fmt::Debug for ResolutionRequest<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionRequest")
            .field("current_value", &self.current_value)
            .field("reference", &self.reference)
            .field("selector", &self.selector)
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl<K> ResolutionRequest<'_, K> {
    /// A request is a no-op when the value is already set, or when there is
    /// nothing to resolve it from
    pub fn is_no_op(&self) -> bool {
        !self.current_value.is_empty() || (self.reference.is_none() && self.selector.is_none())
    }
}

/// The outcome of resolving one reference field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResponse {
    /// Value to store in the plain field
    pub resolved_value: String,
    /// Reference to store in the `*Ref` field
    pub resolved_reference: Option<Reference>,
}

impl ResolutionResponse {
    /// A resolved value must not be empty
    pub fn validate(&self) -> Result<(), ReferenceError> {
        if self.resolved_value.is_empty() {
            return Err(ReferenceError::EmptyValue);
        }
        Ok(())
    }
}

/// The controller owner reference of an object, if it has one
pub fn controller_of(meta: &ObjectMeta) -> Option<&OwnerReference> {
    meta.owner_references
        .as_ref()?
        .iter()
        .find(|o| o.controller == Some(true))
}

/// Resolves references on behalf of one managed resource
///
/// The resolving resource's controller reference is copied on construction so
/// the resource itself can be mutated while resolution proceeds.
pub struct ApiResolver<'a, R> {
    reader: &'a R,
    controller: Option<OwnerReference>,
}

impl<R> fmt::Debug for ApiResolver<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResolver")
            .field("controller", &self.controller.as_ref().map(|c| c.uid.as_str()))
            .finish_non_exhaustive()
    }
}

impl<'a, R: ReferenceReader> ApiResolver<'a, R> {
    /// Create a resolver reading through `reader` for the resource `from`
    pub fn new<M: Resource>(reader: &'a R, from: &M) -> Self {
        Self {
            reader,
            controller: controller_of(from.meta()).cloned(),
        }
    }

    fn shares_controller<K: Resource>(&self, candidate: &K) -> bool {
        match (&self.controller, controller_of(candidate.meta())) {
            (Some(ours), Some(theirs)) => ours.uid == theirs.uid,
            _ => false,
        }
    }

    /// Resolve a single reference field
    pub async fn resolve<K: Referenceable>(
        &self,
        req: ResolutionRequest<'_, K>,
    ) -> Result<ResolutionResponse, ReferenceError> {
        let no_op = ResolutionResponse {
            resolved_value: req.current_value.to_string(),
            resolved_reference: req.reference.cloned(),
        };
        if req.is_no_op() {
            debug!("Reference to {} needs no resolution", K::kind(&()));
            return Ok(no_op);
        }

        let rsp = match (req.reference, req.selector) {
            (Some(reference), _) => {
                let obj: K = self
                    .reader
                    .get(&reference.name, req.namespace)
                    .await?
                    .ok_or_else(|| ReferenceError::NotFound {
                        kind: K::kind(&()).to_string(),
                        name: reference.name.clone(),
                    })?;
                ResolutionResponse {
                    resolved_value: (req.extract)(&obj),
                    resolved_reference: Some(reference.clone()),
                }
            }
            (None, Some(selector)) => {
                let candidates: Vec<K> = self
                    .reader
                    .list(req.namespace, &selector.match_labels)
                    .await?;
                let chosen = candidates
                    .iter()
                    .find(|c| !selector.controllers_must_match() || self.shares_controller(*c))
                    .ok_or(ReferenceError::NoMatch)?;
                ResolutionResponse {
                    resolved_value: (req.extract)(chosen),
                    resolved_reference: Some(Reference::new(
                        chosen.meta().name.clone().unwrap_or_default(),
                    )),
                }
            }
            (None, None) => return Ok(no_op),
        };

        rsp.validate()?;
        info!(
            "Resolved {} reference {:?} to '{}'",
            K::kind(&()),
            rsp.resolved_reference.as_ref().map(|r| r.name.as_str()),
            rsp.resolved_value
        );
        Ok(rsp)
    }
}

/// Implemented by managed resources that carry reference fields
#[async_trait::async_trait]
pub trait ResolveReferences {
    /// Resolve every reference field of this resource in place
    async fn resolve_references<R: ReferenceReader>(&mut self, reader: &R) -> Result<(), ReferenceError>;
}
