//! Services module - the configuration factories.
//!
//! Two independent, pure factories produce the records the application shell
//! receives at startup. Neither reads ambient state or fails.
//!
//! # Components
//!
//! - [`default_config`]: builds a [`DefaultConfig`](crate::models::DefaultConfig)
//!   from optional [`DefaultConfigOverrides`](crate::models::DefaultConfigOverrides)
//! - [`global_config`]: builds a [`GlobalConfig`](crate::models::GlobalConfig)
//!   from optional [`GlobalConfigOverrides`](crate::models::GlobalConfigOverrides)
//! - [`ConfigRegistry`]: the name-to-factory mapping forwarded to the shell
//!
//! # Fallback Rules
//!
//! - A string field that is missing or empty takes its placeholder literal
//! - Unknown override fields are ignored
//! - `routes` is always the empty [`RouteSet`](crate::models::RouteSet), even when
//!   the caller supplies route lists
//!
//! # Usage Example
//!
//! ```
//! use imperium_bootstrap::models::DefaultConfigOverrides;
//! use imperium_bootstrap::services::{default_config, global_config};
//!
//! let local = default_config(Some(&DefaultConfigOverrides::with_api_key("abc123")));
//! assert_eq!(local.api_key(), "abc123");
//!
//! let shared = global_config(None);
//! assert_eq!(shared.base_url(), "https://api.example.com");
//! ```

pub mod default_config;
pub mod global_config;
pub mod registry;

pub use default_config::{DEFAULT_API_KEY, default_config};
pub use global_config::{DEFAULT_BASE_URL, DEFAULT_TRACKING_API_KEY, global_config};
pub use registry::{ConfigFactory, ConfigRecord, ConfigRegistry, DEFAULT_CONFIG_KEY};
