// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates launchpad.yml template files.

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Platform;

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let yaml = generate_template_yaml(&Config::default());
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    let mut yaml = format!(
        r#"default_branch: {}
# Simulated remote call duration
latency: {}
# Bound a single platform call (unbounded when omitted)
# timeout: 5m
# Cap deployments dispatched at once (unbounded when omitted)
# max_concurrent: 8
poll_interval: {}
platforms:
"#,
        config.default_branch,
        humantime_serde::re::humantime::format_duration(config.latency),
        humantime_serde::re::humantime::format_duration(config.poll_interval),
    );

    for platform in Platform::ALL {
        yaml.push_str(&format!(
            "  {}:\n    token:\n      env: {}\n",
            platform,
            platform.token_env_var()
        ));
    }

    yaml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_back_into_defaults() {
        let yaml = generate_template_yaml(&Config::default());
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.default_branch, "main");
        assert_eq!(config.latency, Config::default().latency);
        assert_eq!(config.platforms.len(), Platform::ALL.len());
        assert_eq!(
            config.token_source(Platform::Railway),
            super::super::EnvValue::from_env("RAILWAY_TOKEN")
        );
    }
}
