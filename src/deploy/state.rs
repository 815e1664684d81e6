// ABOUTME: Deployment status values and typestate markers for the dispatch handle.
// ABOUTME: pending -> building -> success | error, with no skipped or repeated steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a deployment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Pending,
    Building,
    Success,
    Error,
}

impl DeploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentStatus::Pending => "pending",
            DeploymentStatus::Building => "building",
            DeploymentStatus::Success => "success",
            DeploymentStatus::Error => "error",
        }
    }

    /// `success` and `error` are final.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeploymentStatus::Success | DeploymentStatus::Error)
    }

    /// `pending` and `building` both read as "in progress" to callers.
    pub fn is_in_progress(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether `next` directly follows `self` in the lifecycle.
    pub fn can_transition_to(&self, next: DeploymentStatus) -> bool {
        matches!(
            (self, next),
            (DeploymentStatus::Pending, DeploymentStatus::Building)
                | (DeploymentStatus::Building, DeploymentStatus::Success)
                | (DeploymentStatus::Building, DeploymentStatus::Error)
        )
    }
}

impl fmt::Display for DeploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record created, dispatch not started.
/// Available actions: `begin()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Pending;

/// Adapter call in flight.
/// Available actions: `succeed()`, `fail()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Building;

/// Terminal status written; the handle can only be inspected.
#[derive(Debug, Clone, Copy)]
pub struct Finished {
    pub(crate) status: DeploymentStatus,
}
