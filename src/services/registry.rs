use crate::models::{
    DefaultConfig, DefaultConfigOverrides, GlobalConfig, GlobalConfigOverrides,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::{default_config, global_config};

/// Key under which the default factory is exposed to the application shell.
pub const DEFAULT_CONFIG_KEY: &str = "./defaultConfigs";

pub type DefaultConfigFn = fn(Option<&DefaultConfigOverrides>) -> DefaultConfig;
pub type GlobalConfigFn = fn(Option<&GlobalConfigOverrides>) -> GlobalConfig;

/// A factory registered under a name.
#[derive(Debug, Clone, Copy)]
pub enum ConfigFactory {
    Default(DefaultConfigFn),
    Global(GlobalConfigFn),
}

impl ConfigFactory {
    pub fn builtin_default() -> Self {
        Self::Default(default_config)
    }

    pub fn builtin_global() -> Self {
        Self::Global(global_config)
    }

    /// Run the factory against an untyped override object.
    ///
    /// `Value::Null` is treated as "no overrides".
    pub fn invoke(&self, overrides: &Value) -> ConfigRecord {
        let absent = overrides.is_null();
        match self {
            Self::Default(build) => {
                let parsed = DefaultConfigOverrides::from_value(overrides);
                ConfigRecord::Default(build((!absent).then_some(&parsed)))
            }
            Self::Global(build) => {
                let parsed = GlobalConfigOverrides::from_value(overrides);
                ConfigRecord::Global(build((!absent).then_some(&parsed)))
            }
        }
    }
}

/// Output of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigRecord {
    Default(DefaultConfig),
    Global(GlobalConfig),
}

/// Name-to-factory mapping handed to the application shell.
///
/// Keys keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    factories: IndexMap<String, ConfigFactory>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the default factory under [`DEFAULT_CONFIG_KEY`].
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_CONFIG_KEY, ConfigFactory::builtin_default());
        registry
    }

    /// Register `factory` under `key`, returning the factory it replaced.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        factory: ConfigFactory,
    ) -> Option<ConfigFactory> {
        let key = key.into();
        tracing::debug!("Registering config factory '{}'", key);
        self.factories.insert(key, factory)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigFactory> {
        self.factories.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Look up `key` and run its factory. `None` if nothing is registered there.
    pub fn invoke(&self, key: &str, overrides: &Value) -> Option<ConfigRecord> {
        self.get(key).map(|factory| factory.invoke(overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_registry() {
        let registry = ConfigRegistry::with_builtin();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["./defaultConfigs"]);
    }

    #[test]
    fn test_invoke_default_factory() {
        let registry = ConfigRegistry::with_builtin();
        let record = registry
            .invoke(DEFAULT_CONFIG_KEY, &json!({ "apiKey": "abc123" }))
            .unwrap();

        match record {
            ConfigRecord::Default(config) => assert_eq!(config.api_key(), "abc123"),
            other => panic!("unexpected record: {:?}", other),
        }
    }

    #[test]
    fn test_invoke_unknown_key() {
        let registry = ConfigRegistry::with_builtin();
        assert!(registry.invoke("./missing", &Value::Null).is_none());
    }

    #[test]
    fn test_register_replaces_and_keeps_order() {
        let mut registry = ConfigRegistry::with_builtin();
        assert!(
            registry
                .register("./globalConfiguration", ConfigFactory::builtin_global())
                .is_none()
        );
        let previous = registry.register(DEFAULT_CONFIG_KEY, ConfigFactory::builtin_default());

        assert!(matches!(previous, Some(ConfigFactory::Default(_))));
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec!["./defaultConfigs", "./globalConfiguration"]
        );
    }

    #[test]
    fn test_global_record_serializes_flat() {
        let record = ConfigFactory::builtin_global().invoke(&Value::Null);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "baseUrl": "https://api.example.com",
                "trackingApiKey": "YOUR_TRACKING_API_KEY",
                "routes": { "publicRoutes": [], "protectedRoutes": [], "sharedRoutes": [] }
            })
        );
    }
}
