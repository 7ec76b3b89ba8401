//! Configuration for the rawkeys demo.
//!
//! Settings are read from a TOML file. A missing file means defaults.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

pub use settings::Settings;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "RAWKEYS_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolve the configuration file path.
///
/// An explicit path wins, then `RAWKEYS_CONFIG`, then
/// `<config dir>/rawkeys/config.toml`.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join("rawkeys").join("config.toml"))
}

/// Load and validate settings from `path`.
///
/// Returns defaults if the file does not exist.
pub fn load(path: &Path) -> Result<Settings> {
    let settings = match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Settings::default()
        }
        Err(e) => return Err(e.into()),
    };

    settings.validate()?;
    Ok(settings)
}
