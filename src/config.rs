use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "semver-update.toml";

/// Represents the complete configuration for semver-update.
///
/// Names the version file to operate on and the default behavior flags the
/// command line can switch on.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default version file name.
fn default_version_file() -> String {
    "VERSION".to_string()
}

/// Default behavior flags.
///
/// Each flag can only be switched on from the command line, never off.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Process units that are modules of a parent project
    #[serde(default)]
    pub process_module: bool,

    /// Append the SNAPSHOT pre-release marker to updated versions
    #[serde(default)]
    pub snapshot: bool,

    /// Print the version to stdout on verify-current
    #[serde(default)]
    pub force_stdout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-update.toml` in current directory
/// 3. `.semver-update.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| SemverError::config(e.to_string()))
}
