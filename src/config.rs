//! Layered configuration.
//!
//! Sources, lowest priority first:
//! - Default values
//! - `xmldoc.toml` in the current directory (if present)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `XMLDOC_` and use double
//! underscores to separate nested levels:
//! - `XMLDOC_DOCUMENTATION__CULTURE=de-DE` sets `documentation.culture`
//! - `XMLDOC_DOCUMENTATION__MAX_PATH_LENGTH=260` sets `documentation.max_path_length`
//! - `XMLDOC_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::locale::Culture;
use crate::paths::DEFAULT_MAX_PATH_LENGTH;

const CONFIG_FILE: &str = "xmldoc.toml";
const ENV_PREFIX: &str = "XMLDOC_";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Documentation lookup settings
    #[serde(default)]
    pub documentation: DocumentationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DocumentationConfig {
    /// Culture used for localized documentation directories.
    /// Unset means the ambient locale (`LC_ALL`, `LC_MESSAGES`, `LANG`) at lookup time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,

    /// Candidate paths longer than this are treated as unresolvable
    #[serde(default = "default_max_path_length")]
    pub max_path_length: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `xmldoc = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_max_path_length() -> usize {
    DEFAULT_MAX_PATH_LENGTH
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            documentation: DocumentationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            culture: None,
            max_path_length: default_max_path_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl DocumentationConfig {
    /// Configured culture, or the ambient one read now.
    pub fn culture(&self) -> Culture {
        match self.culture.as_deref() {
            Some(name) => Culture::new(name),
            None => Culture::current(),
        }
    }
}

impl Settings {
    /// Load configuration from defaults, `xmldoc.toml`, and the environment
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration with a specific file layered over the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore (__) separates nested levels,
            // single underscore (_) remains as is within field names
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(path.to_path_buf())
    }
}
