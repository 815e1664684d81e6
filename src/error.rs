// ABOUTME: Application-wide error types for launchpad.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::deploy::SubmitError;
use crate::types::DeploymentId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("deployment rejected: {0}")]
    Submit(#[from] SubmitError),

    #[error("deployment not found: {0}")]
    DeploymentNotFound(DeploymentId),

    #[error("deployment {id} failed: {message}")]
    DeploymentFailed { id: DeploymentId, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
