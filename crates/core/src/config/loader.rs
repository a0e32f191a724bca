use std::path::{Path, PathBuf};

use crate::config::directives::AnalyzerConfig;
use crate::config::parser::ConfigParser;
use crate::error::{LesbarError, Result};

/// File name of the analyzer config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "sites.txt";

/// Locates and loads the analyzer config file
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Explicit config file, e.g. from `--config`
    path: Option<PathBuf>,
    /// Directory searched for `sites.txt` when no explicit path is set
    config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader without any search locations
    pub fn new() -> Self {
        Self { path: None, config_dir: None }
    }

    pub fn builder() -> ConfigLoaderBuilder {
        ConfigLoaderBuilder::new()
    }

    /// The file that [`load`](Self::load) reads, if any location is known
    pub fn config_path(&self) -> Option<PathBuf> {
        self.path
            .clone()
            .or_else(|| self.config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)))
    }

    /// Load the analyzer config.
    ///
    /// An explicit path must exist. The default location is optional: if
    /// `sites.txt` is absent, defaults are returned. Relative sitemap paths
    /// are resolved against the config file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::FileNotFound`] for a missing explicit path and
    /// [`LesbarError::ConfigError`] for parse errors.
    pub fn load(&self) -> Result<AnalyzerConfig> {
        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(LesbarError::FileNotFound(path.clone()));
            }
            return Self::load_file(path);
        }

        match self.config_path() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(AnalyzerConfig::default()),
        }
    }

    fn load_file(path: &Path) -> Result<AnalyzerConfig> {
        let mut config = ConfigParser::parse_file(path)?;
        if let Some(parent) = path.parent() {
            config.resolve_paths(parent);
        }
        tracing::debug!(path = %path.display(), sites = config.sites.len(), "loaded analyzer config");
        Ok(config)
    }

    /// Get default config directory (~/.config/lesbar)
    fn default_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("lesbar"))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let mut builder = ConfigLoaderBuilder::new();

        if let Some(dir) = Self::default_config_dir() {
            builder = builder.config_dir(dir);
        }

        builder.build()
    }
}

/// Builder for ConfigLoader
#[derive(Debug, Default)]
pub struct ConfigLoaderBuilder {
    path: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

impl ConfigLoaderBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self { path: None, config_dir: None }
    }

    /// Set an explicit config file
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the config directory
    pub fn config_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the ConfigLoader
    pub fn build(self) -> ConfigLoader {
        ConfigLoader { path: self.path, config_dir: self.config_dir }
    }
}
