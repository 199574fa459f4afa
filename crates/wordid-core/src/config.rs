use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::case::Case;
use crate::error::Result;
use crate::generator::{DEFAULT_DELIMITER, DEFAULT_PARTS};

/// Generator settings as stored in `config.toml`.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub delimiter: String,
    pub parts: usize,
    /// Word list on disk. The built-in list when unset.
    pub dictionary: Option<PathBuf>,
    pub case: Case,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            delimiter: DEFAULT_DELIMITER.to_string(),
            parts: DEFAULT_PARTS,
            dictionary: None,
            case: Case::Keep,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }
}
