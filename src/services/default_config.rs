use crate::models::{DefaultConfig, DefaultConfigOverrides, RouteSet};

/// Placeholder access key used when the caller supplies none.
pub const DEFAULT_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Build the default configuration record.
///
/// `api_key` falls back to [`DEFAULT_API_KEY`] when absent or empty. Routes are
/// always the empty [`RouteSet`]; route overrides are not read.
pub fn default_config(overrides: Option<&DefaultConfigOverrides>) -> DefaultConfig {
    let api_key = overrides
        .and_then(|o| o.api_key.as_deref())
        .filter(|key| !key.is_empty())
        .unwrap_or(DEFAULT_API_KEY);

    DefaultConfig::new(api_key.to_string(), RouteSet::default())
}
