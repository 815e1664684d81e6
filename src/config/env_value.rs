// ABOUTME: Secret values given literally or by reference to an environment variable.
// ABOUTME: Resolution happens at use time so tokens can change without a restart.

use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    pub fn from_env(var: impl Into<String>) -> Self {
        EnvValue::FromEnv {
            var: var.into(),
            default: None,
        }
    }

    /// Resolve to a secret. Unset and empty values both count as absent.
    pub fn resolve(&self) -> Option<SecretString> {
        let value = match self {
            EnvValue::Literal(s) => Some(s.clone()),
            EnvValue::FromEnv { var, default } => std::env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .or_else(|| default.clone()),
        };
        value.filter(|v| !v.is_empty()).map(SecretString::from)
    }
}
