// ABOUTME: Validated domain types for deployment requests.
// ABOUTME: Platform keys, repository identifiers, credentials, and deployment ids.

mod credential;
mod id;
mod platform;
mod repository;

pub use credential::Credential;
pub use id::{DeploymentId, IdGenerator};
pub use platform::{ParsePlatformError, Platform};
pub use repository::{Repository, RepositoryError};
