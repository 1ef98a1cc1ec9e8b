// Host module - the composition boundary
//
// The application shell that renders the UI is an external, pre-built component.
// This module models it as a trait and only forwards configuration to it:
// - AppProps: the two configuration records plus the name-to-factory registry
// - AppHost: the external component's mount entry point
// - App: forwards props to a host unchanged
// - ManifestHost: a host that writes the props as JSON, used by the binary

use crate::models::{DefaultConfig, GlobalConfig};
use crate::services::ConfigRegistry;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Properties handed to the application shell.
#[derive(Debug, Clone)]
pub struct AppProps {
    pub default_config: DefaultConfig,
    pub global_config: GlobalConfig,
    pub configs: ConfigRegistry,
}

impl AppProps {
    pub fn new(
        default_config: DefaultConfig,
        global_config: GlobalConfig,
        configs: ConfigRegistry,
    ) -> Self {
        Self {
            default_config,
            global_config,
            configs,
        }
    }

    /// Serializable view of the props. Factories are listed by key.
    pub fn manifest(&self) -> PropsManifest<'_> {
        PropsManifest {
            default_config: &self.default_config,
            global_config: &self.global_config,
            configs: self.configs.keys().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropsManifest<'a> {
    pub default_config: &'a DefaultConfig,
    pub global_config: &'a GlobalConfig,
    pub configs: Vec<&'a str>,
}

/// Errors reported by a host while mounting
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to serialize props: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Host I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Host rejected props: {0}")]
    Rejected(String),
}

/// The external rendering component.
///
/// Implementations receive the props exactly as built; nothing about how they
/// render is assumed here.
pub trait AppHost {
    fn mount(&mut self, props: &AppProps) -> Result<(), HostError>;
}

/// Thin wrapper that forwards props to its host.
pub struct App<H: AppHost> {
    host: H,
}

impl<H: AppHost> App<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn render(&mut self, props: &AppProps) -> Result<(), HostError> {
        tracing::debug!(
            "Forwarding props to host ({} registered factories)",
            props.configs.len()
        );
        self.host.mount(props)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

/// Host that writes the props as a pretty-printed JSON manifest.
pub struct ManifestHost<W: Write> {
    writer: W,
}

impl<W: Write> ManifestHost<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AppHost for ManifestHost<W> {
    fn mount(&mut self, props: &AppProps) -> Result<(), HostError> {
        serde_json::to_writer_pretty(&mut self.writer, &props.manifest())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        tracing::info!("Props manifest written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{default_config, global_config};

    struct RecordingHost {
        mounted: Vec<AppProps>,
    }

    impl AppHost for RecordingHost {
        fn mount(&mut self, props: &AppProps) -> Result<(), HostError> {
            self.mounted.push(props.clone());
            Ok(())
        }
    }

    fn builtin_props() -> AppProps {
        AppProps::new(
            default_config(None),
            global_config(None),
            ConfigRegistry::with_builtin(),
        )
    }

    #[test]
    fn test_app_forwards_props_unchanged() {
        let props = builtin_props();
        let mut app = App::new(RecordingHost { mounted: Vec::new() });
        app.render(&props).unwrap();

        let host = app.into_host();
        assert_eq!(host.mounted.len(), 1);
        assert_eq!(host.mounted[0].default_config, props.default_config);
        assert_eq!(host.mounted[0].global_config, props.global_config);
    }

    #[test]
    fn test_manifest_lists_factory_keys() {
        let props = builtin_props();
        let manifest = serde_json::to_value(props.manifest()).unwrap();
        assert_eq!(manifest["configs"], serde_json::json!(["./defaultConfigs"]));
        assert_eq!(manifest["defaultConfig"]["apiKey"], "YOUR_API_KEY_HERE");
    }
}
