// ABOUTME: Vercel deployment adapter.
// ABOUTME: Publishes to https://{name}-{owner}.vercel.app.

use async_trait::async_trait;

use super::{Deployed, HostedSettings, PlatformAdapter, PlatformError};
use crate::types::{Credential, Platform, Repository};

#[derive(Debug, Clone)]
pub struct VercelAdapter {
    settings: HostedSettings,
}

impl VercelAdapter {
    pub fn new(settings: HostedSettings) -> Self {
        Self { settings }
    }

    fn url(repository: &Repository) -> String {
        match repository.owner() {
            Some(owner) => format!("https://{}-{}.vercel.app", repository.name(), owner),
            None => format!("https://{}.vercel.app", repository.name()),
        }
    }
}

#[async_trait]
impl PlatformAdapter for VercelAdapter {
    async fn deploy(
        &self,
        repository: &Repository,
        branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        self.settings
            .remote_call(Platform::Vercel, repository, branch)
            .await?;

        Ok(Deployed::new(
            Self::url(repository),
            "Deployed successfully to Vercel",
        ))
    }
}
