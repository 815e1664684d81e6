// ABOUTME: Hosting platform identifiers supported by launchpad.
// ABOUTME: Parses user input like "vercel" and names the token env var per platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown platform: {0}")]
pub struct ParsePlatformError(pub String);

/// A hosting target a repository can be deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Platform {
    Vercel,
    Netlify,
    Railway,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Vercel, Platform::Netlify, Platform::Railway];

    /// Lowercase key used in config files, CLI arguments, and deployment ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Vercel => "vercel",
            Platform::Netlify => "netlify",
            Platform::Railway => "railway",
        }
    }

    /// Human-facing name used in result and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Vercel => "Vercel",
            Platform::Netlify => "Netlify",
            Platform::Railway => "Railway",
        }
    }

    /// Environment variable holding the platform access token when none is configured.
    pub fn token_env_var(&self) -> &'static str {
        match self {
            Platform::Vercel => "VERCEL_TOKEN",
            Platform::Netlify => "NETLIFY_TOKEN",
            Platform::Railway => "RAILWAY_TOKEN",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| ParsePlatformError(s.to_string()))
    }
}
