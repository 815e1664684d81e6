// ABOUTME: Platform adapter capability and the shipped hosting integrations.
// ABOUTME: Exposes PlatformAdapter, the adapter registry, and Vercel/Netlify/Railway adapters.

mod error;
mod netlify;
mod railway;
mod registry;
mod vercel;

pub use error::{PlatformError, PlatformErrorKind, RemoteSnafu, TokenNotConfiguredSnafu};
pub use netlify::NetlifyAdapter;
pub use railway::RailwayAdapter;
pub use registry::AdapterRegistry;
pub use vercel::VercelAdapter;

use async_trait::async_trait;
use std::time::Duration;

use crate::config::EnvValue;
use crate::types::{Credential, Platform, Repository};

/// Outcome of a successful platform deploy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployed {
    pub url: String,
    pub message: String,
}

impl Deployed {
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Deploys a repository to one hosting platform.
///
/// Implementations return a result or fail; they never see or touch the
/// deployment record. Both missing configuration and remote failures are
/// reported through [`PlatformError`].
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    async fn deploy(
        &self,
        repository: &Repository,
        branch: &str,
        credential: &Credential,
    ) -> Result<Deployed, PlatformError>;
}

/// Settings shared by the hosted platform adapters.
#[derive(Debug, Clone)]
pub struct HostedSettings {
    pub token: EnvValue,
    pub latency: Duration,
}

impl HostedSettings {
    pub fn new(token: EnvValue, latency: Duration) -> Self {
        Self { token, latency }
    }

    /// Token from the platform's default `*_TOKEN` variable.
    pub fn from_env(platform: Platform, latency: Duration) -> Self {
        Self::new(EnvValue::from_env(platform.token_env_var()), latency)
    }

    /// Check the access token and stand in for the remote deploy call.
    async fn remote_call(
        &self,
        platform: Platform,
        repository: &Repository,
        branch: &str,
    ) -> Result<(), PlatformError> {
        if self.token.resolve().is_none() {
            return TokenNotConfiguredSnafu { platform }.fail();
        }

        tracing::debug!(
            %platform,
            %repository,
            branch,
            "Calling platform deploy API"
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Build the shipped adapter for a platform.
pub fn hosted_adapter(
    platform: Platform,
    settings: HostedSettings,
) -> std::sync::Arc<dyn PlatformAdapter> {
    match platform {
        Platform::Vercel => std::sync::Arc::new(VercelAdapter::new(settings)),
        Platform::Netlify => std::sync::Arc::new(NetlifyAdapter::new(settings)),
        Platform::Railway => std::sync::Arc::new(RailwayAdapter::new(settings)),
    }
}
