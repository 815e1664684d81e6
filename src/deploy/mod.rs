// ABOUTME: Deployment orchestration engine: records, lifecycle, and background dispatch.
// ABOUTME: Exports the Orchestrator, request/record types, and the typestate dispatch handle.

mod error;
mod orchestrator;
mod record;
mod registry;
mod request;
mod state;
mod transitions;

pub use error::{SubmitError, SubmitErrorKind};
pub use orchestrator::{DispatchSettings, Orchestrator};
pub use record::DeploymentRecord;
pub use registry::DeploymentRegistry;
pub use request::DeploymentRequest;
pub use state::{Building, DeploymentStatus, Finished, Pending};
pub use transitions::Dispatch;
