// ABOUTME: Deployment request value handed to the orchestrator.
// ABOUTME: Consumed by submit, so it cannot change after submission.

use super::SubmitError;
use crate::types::{Credential, Platform, Repository};

/// What to deploy, where, and with which credential.
#[derive(Debug)]
pub struct DeploymentRequest {
    pub(super) repository: String,
    pub(super) platform: Platform,
    pub(super) branch: Option<String>,
    pub(super) credential: Credential,
}

impl DeploymentRequest {
    pub fn new(repository: impl Into<String>, platform: Platform, credential: Credential) -> Self {
        Self {
            repository: repository.into(),
            platform,
            branch: None,
            credential,
        }
    }

    /// Parse a request from caller-supplied strings.
    ///
    /// Fails with [`SubmitError::UnknownPlatform`] or
    /// [`SubmitError::EmptyRepository`] before anything is submitted.
    pub fn parse(
        repository: &str,
        platform: &str,
        branch: Option<&str>,
        credential: Credential,
    ) -> Result<Self, SubmitError> {
        let platform: Platform = platform.parse()?;
        let repository = Repository::new(repository)?;
        let mut request = Self::new(repository.as_str(), platform, credential);
        request.branch = branch.map(str::to_string);
        Ok(request)
    }

    /// Deploy a specific branch instead of the default one.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn requested_branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }
}
