// ABOUTME: Registry mapping each platform to its adapter implementation.
// ABOUTME: Built once at startup from config or by hand, read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use super::{HostedSettings, PlatformAdapter, hosted_adapter};
use crate::config::Config;
use crate::types::Platform;

#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: HashMap<Platform, Arc<dyn PlatformAdapter>>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("platforms", &self.platforms())
            .finish()
    }
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the shipped adapter for every platform listed in the config.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for &platform in config.platforms.keys() {
            let settings =
                HostedSettings::new(config.token_source(platform), config.latency_for(platform));
            registry.register(platform, hosted_adapter(platform, settings));
        }
        registry
    }

    /// Register an adapter, replacing any previous one for the platform.
    pub fn register(&mut self, platform: Platform, adapter: Arc<dyn PlatformAdapter>) {
        if self.adapters.insert(platform, adapter).is_some() {
            tracing::debug!(%platform, "Replaced platform adapter");
        }
    }

    /// Builder-style [`AdapterRegistry::register`].
    pub fn with(mut self, platform: Platform, adapter: impl PlatformAdapter + 'static) -> Self {
        self.register(platform, Arc::new(adapter));
        self
    }

    pub fn get(&self, platform: Platform) -> Option<Arc<dyn PlatformAdapter>> {
        self.adapters.get(&platform).cloned()
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.adapters.contains_key(&platform)
    }

    /// Registered platforms in stable order.
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<_> = self.adapters.keys().copied().collect();
        platforms.sort();
        platforms
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::VercelAdapter;
    use std::time::Duration;

    #[test]
    fn default_config_registers_all_platforms() {
        let registry = AdapterRegistry::from_config(&Config::default());
        assert_eq!(registry.platforms(), Platform::ALL.to_vec());
    }

    #[test]
    fn config_limits_registered_platforms() {
        let config = Config::from_yaml("platforms:\n  netlify: {}\n").unwrap();
        let registry = AdapterRegistry::from_config(&config);
        assert_eq!(registry.platforms(), vec![Platform::Netlify]);
        assert!(registry.get(Platform::Vercel).is_none());
    }

    #[test]
    fn with_registers_adapter() {
        let registry = AdapterRegistry::new().with(
            Platform::Vercel,
            VercelAdapter::new(HostedSettings::from_env(Platform::Vercel, Duration::ZERO)),
        );
        assert!(registry.contains(Platform::Vercel));
        assert!(!registry.contains(Platform::Railway));
    }
}
