//! Data models for the Imperium bootstrap.
//!
//! - [`DefaultConfig`]: local settings (access key and route lists)
//! - [`GlobalConfig`]: shared settings (base address, tracking key and route lists)
//! - [`RouteSet`]: the public/protected/shared grouping used by both records
//! - [`DefaultConfigOverrides`] / [`GlobalConfigOverrides`]: partial inputs to the factories
//!
//! # Architecture Note
//!
//! The records serialize with the camelCase names the web shell expects
//! (`apiKey`, `publicRoutes`, ...). They are immutable once built: fields are
//! private and only read through accessors.

pub mod config;

pub use config::{
    DefaultConfig, DefaultConfigOverrides, GlobalConfig, GlobalConfigOverrides, RouteSet,
};
