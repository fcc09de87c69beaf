//! Configuration options.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG_FILE_NAME: &str = ".spath.json";
const DEFAULT_SEPARATOR: &str = " -> ";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file [{0}]: {1}")]
    Read(PathBuf, #[source] io::Error),

    #[error("Config file [{0}] must be a valid JSON file: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Tool options. Can be loaded from a config file, command line flags take precedence.
#[derive(Clone, Default, PartialEq, Eq, Debug, Deserialize)]
pub struct Config {
    /// Graph file used when none is given on the command line.
    pub graph: Option<PathBuf>,

    /// Print every relaxed edge during a search.
    #[serde(default)]
    pub trace: bool,

    /// Printed between node ids of a path (" -> " by default).
    pub separator: Option<String>,
}

impl Config {
    /// Read the config from `path`, or from `~/.spath.json` if no path given.
    /// A missing default config file is not an error, a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::read_config_file(path);
        }
        match Self::default_location() {
            Some(path) => Ok(Self::read_optional_config_file(&path)?.unwrap_or_default()),
            None => Ok(Config::default()), // Unable to locate HOME dir
        }
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(DEFAULT_CONFIG_FILE_NAME);
            path
        })
    }

    fn parse_config(json: &[u8], path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_slice(json).map_err(|e| ConfigError::Parse(path.to_owned(), e))
    }

    fn read_config_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read(path).map_err(|e| ConfigError::Read(path.to_owned(), e))?;
        let config = Self::parse_config(&json, path)?;
        debug!("using config file [{}]: {:?}", path.display(), config);
        Ok(config)
    }

    fn read_optional_config_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::read_config_file(path) {
            Ok(conf) => Ok(Some(conf)),
            Err(ConfigError::Read(_, err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
