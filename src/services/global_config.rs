use crate::models::{GlobalConfig, GlobalConfigOverrides, RouteSet};

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_TRACKING_API_KEY: &str = "YOUR_TRACKING_API_KEY";

/// Build the global configuration record.
///
/// Each string field falls back to its literal independently. Routes are
/// always the empty [`RouteSet`].
pub fn global_config(overrides: Option<&GlobalConfigOverrides>) -> GlobalConfig {
    let base_url = or_default(overrides.and_then(|o| o.base_url.as_deref()), DEFAULT_BASE_URL);
    let tracking_api_key = or_default(
        overrides.and_then(|o| o.tracking_api_key.as_deref()),
        DEFAULT_TRACKING_API_KEY,
    );

    GlobalConfig::new(base_url, tracking_api_key, RouteSet::default())
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
