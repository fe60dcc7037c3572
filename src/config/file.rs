//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/makeproject/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [engine]
//! name = "wendy"
//! bundle_prefix = "org.elmindreda"
//! cmake_minimum = "2.8"
//!
//! [layout]
//! extra_dirs = ["data/maps", "data/scripts"]
//!
//! [output]
//! verbose = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::engine::EngineSettings;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Engine wiring
    #[serde(default)]
    pub engine: FileEngineConfig,

    /// Directory layout
    #[serde(default)]
    pub layout: FileLayoutConfig,

    /// Console output
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Engine options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileEngineConfig {
    /// Engine name (e.g. `"wendy"`)
    pub name: Option<String>,

    /// Bundle identifier prefix (e.g. `"org.elmindreda"`)
    pub bundle_prefix: Option<String>,

    /// Minimum `CMake` version (e.g. `"2.8"`)
    pub cmake_minimum: Option<String>,
}

/// Layout options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLayoutConfig {
    /// Directories created in addition to the standard layout
    pub extra_dirs: Option<Vec<PathBuf>>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Whether to print one line per filesystem action
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/makeproject/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("makeproject").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// Engine settings with unset keys filled from the built-in defaults.
    #[must_use]
    pub fn engine_settings(&self) -> EngineSettings {
        let defaults = EngineSettings::default();
        EngineSettings {
            name: self.engine.name.clone().unwrap_or(defaults.name),
            bundle_prefix: self
                .engine
                .bundle_prefix
                .clone()
                .unwrap_or(defaults.bundle_prefix),
            cmake_minimum: self
                .engine
                .cmake_minimum
                .clone()
                .unwrap_or(defaults.cmake_minimum),
        }
    }
}
