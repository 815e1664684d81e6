// ABOUTME: Netlify deployment adapter.
// ABOUTME: Publishes to https://{owner}-{name}.netlify.app.

use async_trait::async_trait;

use super::{Deployed, HostedSettings, PlatformAdapter, PlatformError};
use crate::types::{Credential, Platform, Repository};

#[derive(Debug, Clone)]
pub struct NetlifyAdapter {
    settings: HostedSettings,
}

impl NetlifyAdapter {
    pub fn new(settings: HostedSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl PlatformAdapter for NetlifyAdapter {
    async fn deploy(
        &self,
        repository: &Repository,
        branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        self.settings
            .remote_call(Platform::Netlify, repository, branch)
            .await?;

        Ok(Deployed::new(
            format!("https://{}.netlify.app", repository.slug()),
            "Deployed successfully to Netlify",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvValue;
    use crate::platform::PlatformErrorKind;
    use std::time::Duration;

    #[tokio::test]
    async fn deploy_builds_slug_url() {
        let adapter = NetlifyAdapter::new(HostedSettings::new(
            EnvValue::Literal("tok".to_string()),
            Duration::ZERO,
        ));
        let repo = Repository::new("acme/site").unwrap();
        let deployed = adapter
            .deploy(&repo, "main", &Credential::new("gh"))
            .await
            .unwrap();
        assert_eq!(deployed.url, "https://acme-site.netlify.app");
    }

    #[tokio::test]
    async fn deploy_without_token_is_configuration_error() {
        let adapter = NetlifyAdapter::new(HostedSettings::new(
            EnvValue::Literal(String::new()),
            Duration::ZERO,
        ));
        let repo = Repository::new("acme/site").unwrap();
        let err = adapter
            .deploy(&repo, "main", &Credential::new("gh"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), PlatformErrorKind::Configuration);
        assert_eq!(err.to_string(), "Netlify token not configured");
    }
}
