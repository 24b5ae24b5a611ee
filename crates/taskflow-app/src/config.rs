use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use taskflow_store_fs::FileStore;
use tracing::debug;

const CONFIG_DIR: &str = ".taskflow";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_KEY: &str = "taskflow";
const DEFAULT_VERSION: u32 = 1;

/// Top-level project configuration loaded from `.taskflow/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Where and how snapshots are stored.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ProjectConfig {
    /// Load configuration from a known working directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", config_path.display()))
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error for malformed TOML or invalid settings.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Open the file store described by `[storage]`, relative to `workdir`.
    #[must_use]
    pub fn open_store(&self, workdir: impl AsRef<Path>) -> FileStore {
        FileStore::new(self.storage.path(workdir), self.storage.version())
    }

    fn validate(&self) -> Result<()> {
        self.storage.ensure_valid_key()?;
        self.storage.ensure_valid_version()
    }
}

/// Storage configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_key")]
    key: String,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    dir: Option<PathBuf>,
}

fn default_key() -> String {
    DEFAULT_KEY.to_owned()
}

const fn default_version() -> u32 {
    DEFAULT_VERSION
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            version: DEFAULT_VERSION,
            dir: None,
        }
    }
}

impl StorageConfig {
    /// Storage key naming the snapshot.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Schema version stamped on saved snapshots.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Directory override, if configured.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Snapshot location: `<dir>/<key>.json`, with `dir` defaulting to
    /// `<workdir>/.taskflow`. Relative `dir` values resolve against `workdir`.
    #[must_use]
    pub fn path(&self, workdir: impl AsRef<Path>) -> PathBuf {
        let workdir = workdir.as_ref();
        let dir = self
            .dir
            .as_ref()
            .map_or_else(|| workdir.join(CONFIG_DIR), |dir| workdir.join(dir));
        dir.join(format!("{}.json", self.key))
    }

    fn ensure_valid_key(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            bail!("storage key must not be empty");
        }
        if self.key.contains(['/', '\\']) {
            bail!("storage key '{}' must not contain path separators", self.key);
        }
        Ok(())
    }

    fn ensure_valid_version(&self) -> Result<()> {
        if self.version == 0 {
            bail!("storage version must be at least 1");
        }
        Ok(())
    }
}
