//! Form configuration: which choice sources to load, from where, and the
//! default login base.
//!
//! Read from a JSON file. Every field is optional; missing fields take the
//! built-in defaults.

mod error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

use crate::model::DEFAULT_LOGIN;

/// Choice sources loaded when the config does not name any, in field order.
pub const DEFAULT_SOURCES: &[&str] = &[
    "role.txt",
    "headLead.txt",
    "fullname.txt",
    "position.txt",
    "department.txt",
    "protectedInfoAccess.txt",
    "desks.txt",
    "region.txt",
    "personalNumber.txt",
    "pointOfSale.txt",
    "coordinator.txt",
    "BaseMarketFinanceSectors.txt",
    "CredDocInvestOperatons.txt",
    "middleOfficeSub.txt",
    "lawyersSub.txt",
    "percIndCoordinator.txt",
];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the choice sources are resolved against.
    pub lists_dir: PathBuf,
    /// Choice source file names, one dropdown each, in display order.
    pub sources: Vec<String>,
    /// Login base shown at startup and restored by a reset.
    pub default_login: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lists_dir: PathBuf::from("."),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            default_login: DEFAULT_LOGIN.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user config file
    /// (`~/.config/migcon/config.json` on Linux) is used when present and the
    /// defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) => match Self::from_file(&path) {
                    Err(ConfigError::Io { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Ok(Self::default())
                    }
                    result => result,
                },
                None => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Returns the per-user config file path, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("migcon").join("config.json"))
}
