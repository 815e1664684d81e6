// ABOUTME: Deployment orchestrator: validates requests, owns records, spawns dispatch tasks.
// ABOUTME: submit returns immediately; each deployment runs on its own task.

use futures::FutureExt;
use parking_lot::Mutex;
use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use super::SubmitError;
use super::record::DeploymentRecord;
use super::registry::DeploymentRegistry;
use super::request::DeploymentRequest;
use super::state::Pending;
use super::transitions::Dispatch;
use crate::config::Config;
use crate::platform::{AdapterRegistry, Deployed, PlatformAdapter, PlatformError};
use crate::types::{Credential, DeploymentId, IdGenerator, Platform, Repository};

/// Knobs that shape how submissions are dispatched.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// Branch used when a request does not name one.
    pub default_branch: String,
    /// Bound on a single adapter call. `None` waits forever.
    pub timeout: Option<Duration>,
    /// Deployments allowed in `building` at once. `None` is unbounded.
    pub max_concurrent: Option<NonZeroUsize>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            default_branch: "main".to_string(),
            timeout: None,
            max_concurrent: None,
        }
    }
}

impl DispatchSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_branch: config.default_branch.clone(),
            timeout: config.timeout,
            max_concurrent: config.max_concurrent,
        }
    }
}

/// Accepts deployment requests and tracks them to a terminal state.
///
/// Dropping the orchestrator aborts any dispatch still in flight; call
/// [`Orchestrator::drain`] first to let them finish.
pub struct Orchestrator {
    records: Arc<DeploymentRegistry>,
    adapters: AdapterRegistry,
    ids: IdGenerator,
    settings: DispatchSettings,
    limiter: Option<Arc<Semaphore>>,
    tasks: Mutex<JoinSet<()>>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("adapters", &self.adapters)
            .field("settings", &self.settings)
            .field("records", &self.records.len())
            .finish()
    }
}

impl Orchestrator {
    pub fn new(adapters: AdapterRegistry) -> Self {
        Self::with_settings(adapters, DispatchSettings::default())
    }

    pub fn with_settings(adapters: AdapterRegistry, settings: DispatchSettings) -> Self {
        let limiter = settings
            .max_concurrent
            .map(|n| Arc::new(Semaphore::new(n.get())));
        Self {
            records: Arc::new(DeploymentRegistry::new()),
            adapters,
            ids: IdGenerator::new(),
            settings,
            limiter,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(
            AdapterRegistry::from_config(config),
            DispatchSettings::from_config(config),
        )
    }

    /// Accept a request and start deploying it in the background.
    ///
    /// Returns the freshly created `pending` record without waiting for the
    /// platform. Validation failures create no record.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::EmptyRepository`] for a blank repository.
    /// - [`SubmitError::PlatformNotRegistered`] when no adapter serves the platform.
    /// - [`SubmitError::NoRuntime`] when called outside a Tokio runtime.
    pub fn submit(&self, request: DeploymentRequest) -> Result<DeploymentRecord, SubmitError> {
        let DeploymentRequest {
            repository,
            platform,
            branch,
            credential,
        } = request;

        let repository = Repository::new(&repository)?;
        let adapter = self
            .adapters
            .get(platform)
            .ok_or(SubmitError::PlatformNotRegistered(platform))?;
        let runtime = Handle::try_current().map_err(|_| SubmitError::NoRuntime)?;

        let branch = branch
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| self.settings.default_branch.clone());

        let id = self.ids.next(platform, &repository);
        let record =
            DeploymentRecord::pending(id.clone(), repository.clone(), platform, branch.clone());
        self.records.insert(record.clone())?;

        info!(
            deployment_id = %id,
            %platform,
            %repository,
            %branch,
            "Deployment submitted"
        );

        let job = DispatchJob {
            dispatch: Dispatch::new(id, Arc::clone(&self.records)),
            adapter,
            platform,
            repository,
            branch,
            credential,
            timeout: self.settings.timeout,
            limiter: self.limiter.clone(),
        };

        let mut tasks = self.tasks.lock();
        while tasks.try_join_next().is_some() {}
        tasks.spawn_on(job.run(), &runtime);

        Ok(record)
    }

    /// Snapshot of a deployment, or `None` for an id this orchestrator never issued.
    pub fn status(&self, id: &DeploymentId) -> Option<DeploymentRecord> {
        self.records.get(id)
    }

    /// Poll until the deployment reaches `success` or `error`.
    ///
    /// Returns `None` if the id is unknown. Waits as long as the deployment
    /// does; wrap in a timeout to bound it.
    pub async fn wait_for_terminal(
        &self,
        id: &DeploymentId,
        poll_interval: Duration,
    ) -> Option<DeploymentRecord> {
        let mut ticker = tokio::time::interval(poll_interval.max(Duration::from_millis(1)));
        loop {
            ticker.tick().await;
            let record = self.status(id)?;
            if record.is_terminal() {
                return Some(record);
            }
        }
    }

    /// Every record, oldest first.
    pub fn list(&self) -> Vec<DeploymentRecord> {
        self.records.list()
    }

    /// Number of deployments not yet in a terminal state.
    pub fn in_flight(&self) -> usize {
        self.records
            .list()
            .iter()
            .filter(|r| r.status.is_in_progress())
            .count()
    }

    /// Platforms this orchestrator accepts.
    pub fn platforms(&self) -> Vec<Platform> {
        self.adapters.platforms()
    }

    /// Wait for every dispatch task spawned so far to finish.
    pub async fn drain(&self) {
        let mut tasks = std::mem::take(&mut *self.tasks.lock());
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                error!("Dispatch task ended abnormally: {}", e);
            }
        }
    }
}

/// Everything a dispatch task needs, moved onto the task.
struct DispatchJob {
    dispatch: Dispatch<Pending>,
    adapter: Arc<dyn PlatformAdapter>,
    platform: Platform,
    repository: Repository,
    branch: String,
    credential: Credential,
    timeout: Option<Duration>,
    limiter: Option<Arc<Semaphore>>,
}

impl DispatchJob {
    async fn run(self) {
        let DispatchJob {
            dispatch,
            adapter,
            platform,
            repository,
            branch,
            credential,
            timeout,
            limiter,
        } = self;

        // Held until the adapter returns; the record stays pending while queued.
        let _permit = match limiter {
            Some(limiter) => limiter.acquire_owned().await.ok(),
            None => None,
        };

        let id = dispatch.id().clone();
        let Some(building) = dispatch.begin() else {
            debug!(deployment_id = %id, "No record to dispatch, skipping");
            return;
        };
        debug!(deployment_id = %id, %platform, "Deployment building");

        let call = AssertUnwindSafe(adapter.deploy(&repository, &branch, &credential)).catch_unwind();
        let outcome = match timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => flatten(platform, result),
                Err(_) => Err(format!(
                    "{} deployment timed out after {}",
                    platform.display_name(),
                    humantime_serde::re::humantime::format_duration(limit)
                )),
            },
            None => flatten(platform, call.await),
        };

        match outcome {
            Ok(deployed) => {
                info!(deployment_id = %id, url = %deployed.url, "Deployment succeeded");
                building.succeed(deployed);
            }
            Err(message) => {
                warn!(deployment_id = %id, error = %message, "Deployment failed");
                building.fail(message);
            }
        }
    }
}

/// Collapse adapter errors and panics into a failure message.
fn flatten(
    platform: Platform,
    result: Result<Result<Deployed, PlatformError>, Box<dyn Any + Send>>,
) -> Result<Deployed, String> {
    match result {
        Ok(Ok(deployed)) => Ok(deployed),
        Ok(Err(e)) => Err(e.to_string()),
        Err(panic) => {
            let detail = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(format!(
                "{} adapter panicked: {}",
                platform.display_name(),
                detail
            ))
        }
    }
}
