// ABOUTME: Deployment identifiers and their generator.
// ABOUTME: Ids combine platform, repository, and a strictly increasing submission stamp.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Platform, Repository};

/// Identifier of a single deployment, unique for the lifetime of its generator.
#[must_use = "ids are the only handle on a submitted deployment"]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentId(String);

impl DeploymentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DeploymentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Issues deployment ids.
///
/// The stamp is the submission time in microseconds, bumped past the previously
/// issued stamp when two submissions land in the same microsecond (or the clock
/// steps backwards). Two ids from one generator therefore never collide, even
/// for the same platform and repository submitted back to back.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_stamp: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, platform: Platform, repository: &Repository) -> DeploymentId {
        let stamp = self.next_stamp();
        DeploymentId(format!("{}-{}-{}", platform, repository.slug(), stamp))
    }

    fn next_stamp(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0);
        let bump = |last: u64| now.max(last.saturating_add(1));
        let previous = match self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
        {
            Ok(prev) | Err(prev) => prev,
        };
        bump(previous)
    }
}
