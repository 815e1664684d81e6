// ABOUTME: Platform adapter error types with SNAFU pattern.
// ABOUTME: Separates missing configuration from failed remote calls.

use snafu::Snafu;

use crate::types::Platform;

/// Failure of a single platform deploy attempt.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PlatformError {
    #[snafu(display("{} token not configured", platform.display_name()))]
    TokenNotConfigured { platform: Platform },

    #[snafu(display("{} API error: {message}", platform.display_name()))]
    Remote { platform: Platform, message: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// The adapter is missing its own access token or settings.
    Configuration,
    /// The platform call itself failed or was rejected.
    Remote,
}

impl PlatformError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PlatformErrorKind {
        match self {
            PlatformError::TokenNotConfigured { .. } => PlatformErrorKind::Configuration,
            PlatformError::Remote { .. } => PlatformErrorKind::Remote,
        }
    }

    /// The platform the failed attempt targeted.
    pub fn platform(&self) -> Platform {
        match self {
            PlatformError::TokenNotConfigured { platform } | PlatformError::Remote { platform, .. } => {
                *platform
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_not_configured_message_names_platform() {
        let err = TokenNotConfiguredSnafu {
            platform: Platform::Netlify,
        }
        .build();
        assert_eq!(err.to_string(), "Netlify token not configured");
        assert_eq!(err.kind(), PlatformErrorKind::Configuration);
    }

    #[test]
    fn remote_error_carries_message() {
        let err = RemoteSnafu {
            platform: Platform::Railway,
            message: "rate limited",
        }
        .build();
        assert_eq!(err.to_string(), "Railway API error: rate limited");
        assert_eq!(err.kind(), PlatformErrorKind::Remote);
        assert_eq!(err.platform(), Platform::Railway);
    }
}
