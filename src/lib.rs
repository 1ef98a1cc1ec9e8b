// Imperium Bootstrap - configuration bootstrap for the Imperium LMS application shell
//
// This is the library crate containing the configuration factories and data structures.
// The binary crate (main.rs) loads overrides and hands the result to a host.

pub mod config;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use host::{App, AppHost, AppProps, HostError, ManifestHost};
pub use models::{DefaultConfig, DefaultConfigOverrides, GlobalConfig, GlobalConfigOverrides, RouteSet};
pub use services::{ConfigRegistry, default_config, global_config};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
