// ABOUTME: Shared test support for orchestrator integration tests.
// ABOUTME: Stub platform adapters with controllable latency and failure modes.

#![allow(dead_code)]

use async_trait::async_trait;
use launchpad::platform::{Deployed, PlatformAdapter, PlatformError, RemoteSnafu};
use launchpad::types::{Credential, Platform, Repository};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Always succeeds with a fixed url after `delay`.
pub struct StubAdapter {
    pub url: String,
    pub delay: Duration,
    pub calls: Arc<AtomicUsize>,
}

impl StubAdapter {
    pub fn new(url: impl Into<String>, delay: Duration) -> Self {
        Self {
            url: url.into(),
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl PlatformAdapter for StubAdapter {
    async fn deploy(
        &self,
        _repository: &Repository,
        _branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(Deployed::new(self.url.clone(), "Deployed by stub"))
    }
}

/// Builds a per-repository url so concurrent results can be told apart.
pub struct EchoAdapter {
    pub platform: Platform,
    pub delay: Duration,
}

#[async_trait]
impl PlatformAdapter for EchoAdapter {
    async fn deploy(
        &self,
        repository: &Repository,
        branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        tokio::time::sleep(self.delay).await;
        Ok(Deployed::new(
            format!("https://{}.{}.test/{}", repository.slug(), self.platform, branch),
            format!("Deployed {repository}"),
        ))
    }
}

/// Fails with a remote platform error after `delay`.
pub struct FailingAdapter {
    pub platform: Platform,
    pub message: String,
    pub delay: Duration,
}

#[async_trait]
impl PlatformAdapter for FailingAdapter {
    async fn deploy(
        &self,
        _repository: &Repository,
        _branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        tokio::time::sleep(self.delay).await;
        RemoteSnafu {
            platform: self.platform,
            message: self.message.clone(),
        }
        .fail()
    }
}

/// Never returns.
pub struct HangingAdapter;

#[async_trait]
impl PlatformAdapter for HangingAdapter {
    async fn deploy(
        &self,
        _repository: &Repository,
        _branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        std::future::pending().await
    }
}

/// Panics inside the deploy call.
pub struct PanickingAdapter;

#[async_trait]
impl PlatformAdapter for PanickingAdapter {
    async fn deploy(
        &self,
        _repository: &Repository,
        _branch: &str,
        _credential: &Credential,
    ) -> Result<Deployed, PlatformError> {
        panic!("simulated adapter crash");
    }
}

pub fn credential() -> Credential {
    Credential::new("gho_test_token")
}
