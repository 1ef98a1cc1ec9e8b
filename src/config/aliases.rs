use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;

/// Alias for the directory holding local (default) configuration.
pub const CONFIG_ALIAS: &str = "@config";

/// Alias for the directory holding shared (global) configuration.
pub const GLOBAL_ALIAS: &str = "@global";

/// Maps `@name` prefixes to directories under a project root.
///
/// `@config/defaultConfigs.yaml` resolves to `<root>/config/defaultConfigs.yaml`.
#[derive(Debug, Clone)]
pub struct AliasTable {
    root: Utf8PathBuf,
    aliases: IndexMap<String, Utf8PathBuf>,
}

impl AliasTable {
    /// Table with the `@config` and `@global` aliases registered.
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let mut aliases = IndexMap::new();
        aliases.insert(CONFIG_ALIAS.to_string(), root.join("config"));
        aliases.insert(GLOBAL_ALIAS.to_string(), root.join("global"));
        Self { root, aliases }
    }

    pub fn insert(&mut self, alias: impl Into<String>, dir: impl Into<Utf8PathBuf>) {
        self.aliases.insert(alias.into(), dir.into());
    }

    /// Directory an alias points at.
    pub fn dir(&self, alias: &str) -> Option<&Utf8Path> {
        self.aliases.get(alias).map(Utf8PathBuf::as_path)
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Utf8Path> {
        self.aliases.values().map(Utf8PathBuf::as_path)
    }

    /// Resolve a specifier to a path.
    ///
    /// Specifiers starting with `@` must name a registered alias, otherwise
    /// `None` is returned. Anything else is joined onto the root.
    pub fn resolve(&self, specifier: &str) -> Option<Utf8PathBuf> {
        if !specifier.starts_with('@') {
            return Some(self.root.join(specifier));
        }

        let (alias, rest) = match specifier.split_once('/') {
            Some((alias, rest)) => (alias, rest),
            None => (specifier, ""),
        };

        let dir = self.aliases.get(alias)?;
        if rest.is_empty() {
            Some(dir.clone())
        } else {
            Some(dir.join(rest))
        }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}
