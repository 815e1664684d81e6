// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, token sources, discovery, and defaults.

use launchpad::config::*;
use launchpad::error::Error;
use launchpad::types::Platform;
use std::time::Duration;

mod parsing {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.default_branch, "main");
        assert_eq!(config.latency, Duration::from_secs(2));
        assert_eq!(config.timeout, None);
        assert_eq!(config.max_concurrent, None);
        assert_eq!(config.poll_interval, Duration::from_millis(250));
        assert_eq!(config.platforms.len(), 3);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
default_branch: develop
latency: 500ms
timeout: 5m
max_concurrent: 4
poll_interval: 1s
platforms:
  vercel:
    token: literal-token
    latency: 10ms
  netlify:
    token:
      env: MY_NETLIFY_TOKEN
      default: fallback
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.default_branch, "develop");
        assert_eq!(config.latency, Duration::from_millis(500));
        assert_eq!(config.timeout, Some(Duration::from_secs(300)));
        assert_eq!(config.max_concurrent.map(|n| n.get()), Some(4));
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.platforms.len(), 2);

        assert_eq!(
            config.token_source(Platform::Vercel),
            EnvValue::Literal("literal-token".to_string())
        );
        assert_eq!(
            config.token_source(Platform::Netlify),
            EnvValue::FromEnv {
                var: "MY_NETLIFY_TOKEN".to_string(),
                default: Some("fallback".to_string()),
            }
        );
        assert_eq!(config.latency_for(Platform::Vercel), Duration::from_millis(10));
        assert_eq!(config.latency_for(Platform::Netlify), Duration::from_millis(500));
    }

    #[test]
    fn platform_without_token_falls_back_to_env_var() {
        let config = Config::from_yaml("platforms:\n  railway: {}\n").unwrap();
        assert_eq!(
            config.token_source(Platform::Railway),
            EnvValue::from_env("RAILWAY_TOKEN")
        );
    }

    #[test]
    fn unknown_platform_key_is_rejected() {
        let err = Config::from_yaml("platforms:\n  heroku: {}\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.to_string().contains("heroku"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Config::from_yaml("defualt_branch: main\n").unwrap_err();
        assert!(err.to_string().contains("defualt_branch"));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        assert!(Config::from_yaml("max_concurrent: 0\n").is_err());
    }

    #[test]
    fn empty_default_branch_is_rejected() {
        let err = Config::from_yaml("default_branch: \"\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::from_yaml("timeout: 0s\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn invalid_duration_is_rejected() {
        assert!(Config::from_yaml("latency: soon\n").is_err());
    }
}

mod tokens {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_token_source_reads_platform_variable() {
        temp_env::with_var("VERCEL_TOKEN", Some("env-token"), || {
            let config = Config::default();
            let token = config.token_source(Platform::Vercel).resolve().unwrap();
            assert_eq!(token.expose_secret(), "env-token");
        });
    }

    #[test]
    fn empty_platform_variable_counts_as_missing() {
        temp_env::with_var("NETLIFY_TOKEN", Some(""), || {
            let config = Config::default();
            assert!(config.token_source(Platform::Netlify).resolve().is_none());
        });
    }
}

mod discovery {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_primary_filename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "default_branch: primary\n").unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.default_branch, "primary");
    }

    #[test]
    fn discovers_alternate_locations() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_ALT), "default_branch: alt\n").unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().default_branch, "alt");

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".launchpad")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "default_branch: nested\n").unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().default_branch, "nested");
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover_or_default(dir.path()).unwrap();
        assert_eq!(config.default_branch, "main");
    }

    #[test]
    fn broken_config_is_not_replaced_by_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "latency: [").unwrap();
        assert!(Config::discover_or_default(dir.path()).is_err());
    }
}

mod init {
    use super::*;
    use std::fs;

    #[test]
    fn init_writes_loadable_template() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), false).unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.platforms.len(), Platform::ALL.len());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "default_branch: keep\n").unwrap();

        let err = init_config(dir.path(), false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));

        init_config(dir.path(), true).unwrap();
        assert_eq!(Config::discover(dir.path()).unwrap().default_branch, "main");
    }
}
