//! Configuration management for the forge using the prefer crate.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name used for config file discovery (`charforge.toml`, `charforge.json`, ...).
pub const CONFIG_NAME: &str = "charforge";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse {format} config '{}': {message}", path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },

    #[error("Failed to determine working directory: {0}")]
    WorkingDir(#[source] io::Error),
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory static assets are written beneath.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "ROOT")]
    pub root: Option<String>,
    /// Default seed for character synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no file is found or the file is unusable.
    pub async fn load() -> Self {
        Self::load_named(CONFIG_NAME).await
    }

    /// Discover and load the config file for `name`.
    /// `name` may be a bare name searched in the standard locations or a path.
    pub async fn load_named(name: &str) -> Self {
        match prefer::load(name).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(e) => {
                tracing::debug!("No usable config for '{}': {}", name, e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config text, choosing the format from `path`'s extension.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |format, message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_err("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_err("JSON", e.to_string())),
        }
    }

    /// Get the base directory for resolving relative paths.
    /// Returns the config file's parent directory if available, otherwise None.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path: &Path, base_dir: &Path) -> PathBuf {
        resolve_path(path, base_dir)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref root) = self.root {
            settings.root = self.resolve_path(Path::new(root), base_dir);
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
    }
}

/// Tilde expansion only applies to UTF-8 paths; anything else is kept byte-for-byte.
fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    let path = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    };

    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Application settings, resolved once and passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory static assets are written beneath.
    pub root: PathBuf,
    /// Seed for synthesis when none is given on the command line.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings with a custom asset root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Asset root from the command line or `FORGE_ROOT`.
    pub root: Option<PathBuf>,
}

/// Load settings: defaults, then the config file, then command line overrides.
pub async fn load_settings_with_options(options: LoadOptions) -> Result<Settings, ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };
    let cwd = std::env::current_dir().map_err(ConfigError::WorkingDir)?;

    let base_dir = if options.use_cwd {
        cwd.clone()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.clone())
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir);

    if let Some(root) = options.root {
        settings.root = resolve_path(&root, &cwd);
    }

    tracing::debug!(
        "Settings resolved: root={}, seed={:?}",
        settings.root.display(),
        settings.seed
    );
    Ok(settings)
}
