// ABOUTME: Railway deployment adapter.
// ABOUTME: Publishes to https://{owner}-{name}.railway.app.

use async_trait::async_trait;

use super::{Deployed, HostedSettings, PlatformAdapter, PlatformError};
use crate::types::{Credential, Platform, Repository};

#[derive(Debug, Clone)]
pub struct RailwayAdapter {
    settings: HostedSettings,
}

impl RailwayAdapter {
    pub fn new(settings: HostedSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl PlatformAdapter for RailwayAdapter {
    async fn deploy(
        &self,
        repository: &Repository,
        branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        self.settings
            .remote_call(Platform::Railway, repository, branch)
            .await?;

        Ok(Deployed::new(
            format!("https://{}.railway.app", repository.slug()),
            "Deployed successfully to Railway",
        ))
    }
}
