// ABOUTME: The deployment record owned by the orchestrator.
// ABOUTME: Snapshots are handed to callers; only the dispatch handle mutates the stored copy.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::DeploymentStatus;
use crate::platform::Deployed;
use crate::types::{DeploymentId, Platform, Repository};

/// Point-in-time view of one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRecord {
    pub id: DeploymentId,
    pub repository: Repository,
    pub platform: Platform,
    pub branch: String,
    pub status: DeploymentStatus,
    /// Set only once the deployment reaches `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Absent while `pending`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeploymentRecord {
    pub(crate) fn pending(
        id: DeploymentId,
        repository: Repository,
        platform: Platform,
        branch: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            repository,
            platform,
            branch,
            status: DeploymentStatus::Pending,
            url: None,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn mark_building(&mut self) {
        self.advance(DeploymentStatus::Building);
        self.message = Some(format!(
            "Deploying {} ({}) to {}",
            self.repository,
            self.branch,
            self.platform.display_name()
        ));
    }

    pub(crate) fn mark_success(&mut self, deployed: Deployed) {
        self.advance(DeploymentStatus::Success);
        self.url = Some(deployed.url);
        self.message = Some(deployed.message);
    }

    pub(crate) fn mark_error(&mut self, message: String) {
        self.advance(DeploymentStatus::Error);
        self.message = Some(message);
    }

    fn advance(&mut self, next: DeploymentStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "invalid transition {} -> {}",
            self.status,
            next
        );
        self.status = next;
        self.updated_at = Utc::now();
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
