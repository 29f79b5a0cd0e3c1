//! Configuration management for Poflow.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Workflow configuration.
///
/// Every value defaults to the name the gettext toolchain expects, so a
/// bare `poflow` run needs no configuration at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Required extension of the source file (without the dot)
    pub source_extension: String,

    /// Language mode passed to the extraction tool via `-L`
    pub extract_language: String,

    /// File name of the extracted catalog
    pub catalog_file: String,

    /// File name of the language registry
    pub registry_file: String,

    /// Root directory for compiled catalogs
    pub locale_dir: String,

    /// Domain used when the domain prompt is left blank
    pub default_domain: String,

    /// Extraction tool executable
    pub xgettext_bin: String,

    /// Compilation tool executable
    pub msgfmt_bin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: "glade".to_string(),
            extract_language: "Glade".to_string(),
            catalog_file: "messages.po".to_string(),
            registry_file: "LANGUAGES".to_string(),
            locale_dir: "locale".to_string(),
            default_domain: "messages".to_string(),
            xgettext_bin: "xgettext".to_string(),
            msgfmt_bin: "msgfmt".to_string(),
        }
    }
}

impl Config {
    /// Load configuration for a workflow rooted at `workdir`.
    ///
    /// Looks for config in:
    /// 1. `.poflow.toml` in the working directory
    /// 2. `~/.config/poflow/config.toml`
    /// 3. Falls back to defaults
    pub fn load(workdir: &Path) -> anyhow::Result<Self> {
        let local_config = workdir.join(".poflow.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("poflow").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the global config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("poflow"))
    }
}
