//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (TODO: implement file reading)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values offered at the prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub cmake_min_version: String,
    pub project_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                cmake_min_version: cmforge_core::domain::DEFAULT_CMAKE_MIN_VERSION.into(),
                project_name: cmforge_core::domain::DEFAULT_PROJECT_NAME.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// File reading is not yet implemented; this always returns the built-in
    /// defaults.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Path to the default configuration file.
    ///
    /// Resolved via `directories::ProjectDirs`, falling back to
    /// `.cmforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cmforge", "cmforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cmforge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cmake_version_matches_domain_constant() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.cmake_min_version, "3.14");
        assert_eq!(cfg.defaults.project_name, "NoName");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_returns_defaults() {
        let cfg = AppConfig::load().unwrap();
        assert_eq!(cfg.defaults.cmake_min_version, "3.14");
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
