// ABOUTME: Error types for deployment submission.
// ABOUTME: Raised synchronously before any record exists.

use crate::types::{DeploymentId, ParsePlatformError, Platform, RepositoryError};

/// Errors returned by `Orchestrator::submit` and request parsing.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Platform name does not match any known platform.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// Repository identifier is blank.
    #[error("repository cannot be empty")]
    EmptyRepository,

    /// Platform is known but has no adapter in this orchestrator.
    #[error("no adapter registered for platform {0}")]
    PlatformNotRegistered(Platform),

    /// Dispatch tasks need a Tokio runtime to be spawned on.
    #[error("submit must be called from within a Tokio runtime")]
    NoRuntime,

    /// Generated id collided with an existing record.
    #[error("deployment {0} already exists")]
    DuplicateId(DeploymentId),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    UnknownPlatform,
    EmptyRepository,
    PlatformNotRegistered,
    NoRuntime,
    DuplicateId,
}

impl SubmitError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> SubmitErrorKind {
        match self {
            SubmitError::UnknownPlatform(_) => SubmitErrorKind::UnknownPlatform,
            SubmitError::EmptyRepository => SubmitErrorKind::EmptyRepository,
            SubmitError::PlatformNotRegistered(_) => SubmitErrorKind::PlatformNotRegistered,
            SubmitError::NoRuntime => SubmitErrorKind::NoRuntime,
            SubmitError::DuplicateId(_) => SubmitErrorKind::DuplicateId,
        }
    }

    /// Whether the request itself was invalid, as opposed to an engine fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            SubmitErrorKind::UnknownPlatform
                | SubmitErrorKind::EmptyRepository
                | SubmitErrorKind::PlatformNotRegistered
        )
    }
}

impl From<ParsePlatformError> for SubmitError {
    fn from(err: ParsePlatformError) -> Self {
        SubmitError::UnknownPlatform(err.0)
    }
}

impl From<RepositoryError> for SubmitError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Empty => SubmitError::EmptyRepository,
        }
    }
}
