//! Property tests for the configuration factories
//!
//! Covers the fallback rules for every string input, the fixed empty routes,
//! and idempotence of repeated builds.

use imperium_bootstrap::services::{
    ConfigFactory, ConfigRecord, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TRACKING_API_KEY,
};
use imperium_bootstrap::{
    DefaultConfigOverrides, GlobalConfigOverrides, RouteSet, default_config, global_config,
};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn default_config_uses_supplied_key(key in ".+") {
        let config = default_config(Some(&DefaultConfigOverrides::with_api_key(key.clone())));
        prop_assert_eq!(config.api_key(), key.as_str());
        prop_assert_eq!(config.routes(), &RouteSet::default());
    }

    #[test]
    fn global_config_uses_supplied_fields(base in ".+", tracking in ".+") {
        let overrides = GlobalConfigOverrides {
            base_url: Some(base.clone()),
            tracking_api_key: Some(tracking.clone()),
        };
        let config = global_config(Some(&overrides));
        prop_assert_eq!(config.base_url(), base.as_str());
        prop_assert_eq!(config.tracking_api_key(), tracking.as_str());
        prop_assert!(config.routes().is_empty());
    }

    #[test]
    fn factories_are_idempotent(key in proptest::option::of(".*")) {
        let overrides = DefaultConfigOverrides { api_key: key };
        let first = default_config(Some(&overrides));
        let second = default_config(Some(&overrides));
        prop_assert_eq!(&first, &second);
        prop_assert_ne!(first.api_key().as_ptr(), second.api_key().as_ptr());
    }

    #[test]
    fn routes_ignore_any_override_object(routes in proptest::collection::vec("[a-z/]{1,12}", 0..5)) {
        let overrides = json!({
            "apiKey": "abc",
            "routes": { "publicRoutes": routes.clone(), "sharedRoutes": routes }
        });
        let record = ConfigFactory::builtin_default().invoke(&overrides);
        let ConfigRecord::Default(config) = record else {
            panic!("default factory produced a global record");
        };
        prop_assert!(config.routes().is_empty());
    }
}

#[test]
fn test_absent_fields_use_placeholders() {
    assert_eq!(default_config(None).api_key(), DEFAULT_API_KEY);
    assert_eq!(
        default_config(Some(&DefaultConfigOverrides::default())).api_key(),
        DEFAULT_API_KEY
    );

    let config = global_config(Some(&GlobalConfigOverrides::default()));
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.tracking_api_key(), DEFAULT_TRACKING_API_KEY);
}

#[test]
fn test_default_config_scenario() {
    let config = default_config(Some(&DefaultConfigOverrides::with_api_key("abc123")));
    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "apiKey": "abc123",
            "routes": { "publicRoutes": [], "protectedRoutes": [], "sharedRoutes": [] }
        })
    );
}

#[test]
fn test_global_config_scenario() {
    assert_eq!(
        serde_json::to_value(global_config(None)).unwrap(),
        json!({
            "baseUrl": "https://api.example.com",
            "trackingApiKey": "YOUR_TRACKING_API_KEY",
            "routes": { "publicRoutes": [], "protectedRoutes": [], "sharedRoutes": [] }
        })
    );
}

#[test]
fn test_untyped_overrides_of_any_shape() {
    let factory = ConfigFactory::builtin_global();
    for overrides in [json!(null), json!(7), json!([]), json!({ "baseUrl": false })] {
        assert_eq!(
            factory.invoke(&overrides),
            ConfigRecord::Global(global_config(None))
        );
    }
}
