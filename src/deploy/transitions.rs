// ABOUTME: Typestate handle through which a dispatch task writes its record.
// ABOUTME: Each method consumes self, so transitions happen once and in order.

use std::sync::Arc;

use super::record::DeploymentRecord;
use super::registry::DeploymentRegistry;
use super::state::{Building, DeploymentStatus, Finished, Pending};
use crate::platform::Deployed;
use crate::types::DeploymentId;

/// Sole writer of one deployment record.
///
/// Created by the orchestrator at submission and moved into the dispatch
/// task. It is not `Clone` and cannot be built outside the crate, so a
/// record has exactly one writer.
#[derive(Debug)]
pub struct Dispatch<S> {
    id: DeploymentId,
    registry: Arc<DeploymentRegistry>,
    state: S,
}

impl<S> Dispatch<S> {
    pub fn id(&self) -> &DeploymentId {
        &self.id
    }

    /// Current snapshot of the record this handle writes.
    pub fn record(&self) -> Option<DeploymentRecord> {
        self.registry.get(&self.id)
    }

    fn transition<T>(self, state: T) -> Dispatch<T> {
        Dispatch {
            id: self.id,
            registry: self.registry,
            state,
        }
    }
}

// =============================================================================
// Pending -> Building
// =============================================================================

impl Dispatch<Pending> {
    pub(crate) fn new(id: DeploymentId, registry: Arc<DeploymentRegistry>) -> Self {
        Dispatch {
            id,
            registry,
            state: Pending,
        }
    }

    /// Mark the record `building`.
    ///
    /// Returns `None` if the record does not exist, in which case the
    /// dispatch is abandoned.
    pub fn begin(self) -> Option<Dispatch<Building>> {
        self.registry
            .update(&self.id, DeploymentRecord::mark_building)?;
        Some(self.transition(Building))
    }
}

// =============================================================================
// Building -> Finished
// =============================================================================

impl Dispatch<Building> {
    /// Mark the record `success` with the adapter's url and message.
    pub fn succeed(self, deployed: Deployed) -> Dispatch<Finished> {
        self.finish(|record| record.mark_success(deployed), DeploymentStatus::Success)
    }

    /// Mark the record `error` with a failure description.
    pub fn fail(self, message: impl Into<String>) -> Dispatch<Finished> {
        let message = message.into();
        self.finish(|record| record.mark_error(message), DeploymentStatus::Error)
    }

    fn finish<F>(self, update: F, status: DeploymentStatus) -> Dispatch<Finished>
    where
        F: FnOnce(&mut DeploymentRecord),
    {
        if self.registry.update(&self.id, update).is_none() {
            tracing::warn!(deployment_id = %self.id, "Record disappeared while building");
        }
        self.transition(Finished { status })
    }
}

impl Dispatch<Finished> {
    /// Terminal status that was written.
    pub fn status(&self) -> DeploymentStatus {
        self.state.status
    }
}
