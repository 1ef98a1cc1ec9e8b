use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Route descriptors grouped by audience.
///
/// All three lists are always present. Order within a list is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSet {
    #[serde(default)]
    pub public_routes: Vec<String>,

    #[serde(default)]
    pub protected_routes: Vec<String>,

    #[serde(default)]
    pub shared_routes: Vec<String>,
}

impl RouteSet {
    /// True when no list holds a route.
    pub fn is_empty(&self) -> bool {
        self.public_routes.is_empty()
            && self.protected_routes.is_empty()
            && self.shared_routes.is_empty()
    }
}

/// Local settings handed to the application shell.
///
/// Built by [`crate::services::default_config`]; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    api_key: String,
    routes: RouteSet,
}

impl DefaultConfig {
    pub(crate) fn new(api_key: String, routes: RouteSet) -> Self {
        Self { api_key, routes }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }
}

/// Shared settings handed to the application shell.
///
/// Built by [`crate::services::global_config`]; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    base_url: String,
    tracking_api_key: String,
    routes: RouteSet,
}

impl GlobalConfig {
    pub(crate) fn new(base_url: String, tracking_api_key: String, routes: RouteSet) -> Self {
        Self {
            base_url,
            tracking_api_key,
            routes,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tracking_api_key(&self) -> &str {
        &self.tracking_api_key
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }
}

/// Caller-supplied overrides for [`DefaultConfig`].
///
/// Accepts `apiKey` (as written by the web shell) or `api_key`. Unknown keys,
/// including `routes`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultConfigOverrides {
    #[serde(
        default,
        rename = "apiKey",
        alias = "api_key",
        alias = "apikey",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_key: Option<String>,
}

impl DefaultConfigOverrides {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    /// Read overrides off an arbitrary value.
    ///
    /// Non-object input, unknown keys and non-string fields are ignored.
    pub fn from_value(value: &Value) -> Self {
        Self {
            api_key: string_field(value, &["apiKey", "api_key"]),
        }
    }

    /// Fields set in `overlay` replace fields set here.
    pub fn layered(self, overlay: Self) -> Self {
        Self {
            api_key: overlay.api_key.or(self.api_key),
        }
    }
}

/// Caller-supplied overrides for [`GlobalConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfigOverrides {
    #[serde(
        default,
        rename = "baseUrl",
        alias = "base_url",
        alias = "baseurl",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_url: Option<String>,

    #[serde(
        default,
        rename = "trackingApiKey",
        alias = "tracking_api_key",
        alias = "trackingapikey",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_api_key: Option<String>,
}

impl GlobalConfigOverrides {
    pub fn from_value(value: &Value) -> Self {
        Self {
            base_url: string_field(value, &["baseUrl", "base_url"]),
            tracking_api_key: string_field(value, &["trackingApiKey", "tracking_api_key"]),
        }
    }

    pub fn layered(self, overlay: Self) -> Self {
        Self {
            base_url: overlay.base_url.or(self.base_url),
            tracking_api_key: overlay.tracking_api_key.or(self.tracking_api_key),
        }
    }
}

fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}
