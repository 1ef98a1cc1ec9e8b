use crate::host::AppProps;
use crate::models::{DefaultConfigOverrides, GlobalConfigOverrides};
use crate::services::{ConfigRegistry, default_config, global_config};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

pub mod aliases;

pub use aliases::{AliasTable, CONFIG_ALIAS, GLOBAL_ALIAS};

/// Default prefix for environment overrides (`IMPERIUM_DEFAULT_API_KEY`, ...).
pub const DEFAULT_ENV_PREFIX: &str = "IMPERIUM";

const DEFAULT_OVERRIDES_FILE: &str = "@config/defaultConfigs.yaml";
const GLOBAL_OVERRIDES_FILE: &str = "@global/globalConfiguration.yaml";

/// Loads and saves the override files feeding the two factories.
///
/// Manages two files, both optional:
/// - Default overrides (`@config/defaultConfigs.yaml`): `apiKey`
/// - Global overrides (`@global/globalConfiguration.yaml`): `baseUrl`, `trackingApiKey`
///
/// Environment variables are layered on top of each file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    aliases: AliasTable,
    default_overrides_path: Utf8PathBuf,
    global_overrides_path: Utf8PathBuf,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// Create a ConfigManager rooted at `root`.
    ///
    /// The `config/` and `global/` directories are created if missing.
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Result<Self> {
        let aliases = AliasTable::new(root);

        for dir in aliases.dirs() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {}", dir))?;
            }
        }

        let default_overrides_path = aliases
            .resolve(DEFAULT_OVERRIDES_FILE)
            .with_context(|| format!("Unresolvable path: {}", DEFAULT_OVERRIDES_FILE))?;
        let global_overrides_path = aliases
            .resolve(GLOBAL_OVERRIDES_FILE)
            .with_context(|| format!("Unresolvable path: {}", GLOBAL_OVERRIDES_FILE))?;

        Ok(Self {
            aliases,
            default_overrides_path,
            global_overrides_path,
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        })
    }

    /// Read environment overrides under `prefix` instead of `IMPERIUM`.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment variables entirely.
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Load overrides for the default factory: file first, then environment.
    pub fn load_default_overrides(&self) -> Result<DefaultConfigOverrides> {
        let file: DefaultConfigOverrides = self.load_file(&self.default_overrides_path)?;
        let env: DefaultConfigOverrides = self.load_env("DEFAULT")?;
        Ok(file.layered(env))
    }

    /// Load overrides for the global factory: file first, then environment.
    pub fn load_global_overrides(&self) -> Result<GlobalConfigOverrides> {
        let file: GlobalConfigOverrides = self.load_file(&self.global_overrides_path)?;
        let env: GlobalConfigOverrides = self.load_env("GLOBAL")?;
        Ok(file.layered(env))
    }

    pub fn save_default_overrides(&self, overrides: &DefaultConfigOverrides) -> Result<()> {
        self.save_file(&self.default_overrides_path, overrides)
    }

    pub fn save_global_overrides(&self, overrides: &GlobalConfigOverrides) -> Result<()> {
        self.save_file(&self.global_overrides_path, overrides)
    }

    /// Load both override sets, run both factories and collect the shell props.
    pub fn build_props(&self) -> Result<AppProps> {
        let default_overrides = self.load_default_overrides()?;
        let global_overrides = self.load_global_overrides()?;

        let props = AppProps::new(
            default_config(Some(&default_overrides)),
            global_config(Some(&global_overrides)),
            ConfigRegistry::with_builtin(),
        );

        tracing::info!(
            "Built configuration - base_url: {}, registered factories: {}",
            props.global_config.base_url(),
            props.configs.len()
        );
        Ok(props)
    }

    fn load_file<T>(&self, path: &Utf8Path) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        if !path.exists() {
            tracing::warn!("Override file not found at {}, using defaults", path);
            return Ok(T::default());
        }

        let file_contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read override file: {}", path))?;

        if file_contents.trim().is_empty() {
            tracing::debug!("Override file {} is empty", path);
            return Ok(T::default());
        }

        let overrides: T = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse override file: {}", path))?;

        tracing::info!("Loaded overrides from {}", path);
        Ok(overrides)
    }

    fn load_env<T>(&self, section: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(prefix) = &self.env_prefix else {
            return Ok(T::default());
        };
        let prefix = format!("{}_{}", prefix, section);

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(&prefix)
                    .prefix_separator("_")
                    .ignore_empty(true),
            )
            .build()
            .with_context(|| format!("Failed to read environment overrides: {}_*", prefix))?;

        settings
            .try_deserialize::<T>()
            .with_context(|| format!("Invalid environment overrides: {}_*", prefix))
    }

    fn save_file<T: Serialize>(&self, path: &Utf8Path, overrides: &T) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(overrides).context("Failed to serialize overrides to YAML")?;

        fs::write(path, yaml_string)
            .with_context(|| format!("Failed to write override file: {}", path))?;

        tracing::info!("Saved overrides to {}", path);
        Ok(())
    }

    pub fn default_overrides_path(&self) -> &Utf8Path {
        &self.default_overrides_path
    }

    pub fn global_overrides_path(&self) -> &Utf8Path {
        &self.global_overrides_path
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn root(&self) -> &Utf8Path {
        self.aliases.root()
    }
}
