use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SwatNavError};
use crate::tokenizer::DEFAULT_HEADER_SCAN;

/// Name of the configuration file stored inside the `.swatnav` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store swatnav settings in a dataset.
pub const SWATNAV_DIR: &str = ".swatnav";

/// Per-dataset configuration.
///
/// Everything has a sensible default; a dataset without a config file is
/// fully usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// File name of the SQLite project database inside the dataset root, if
    /// the dataset carries one.
    pub database_file: Option<String>,
    /// Maximum number of leading lines scanned when locating a file header.
    pub max_header_lines: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            version: 1,
            database_file: None,
            max_header_lines: DEFAULT_HEADER_SCAN,
        }
    }
}

/// Returns the path to the `.swatnav` directory within the given dataset root.
pub fn get_swatnav_dir(dataset_root: &Path) -> PathBuf {
    dataset_root.join(SWATNAV_DIR)
}

/// Returns the path to the configuration file within the `.swatnav` directory.
pub fn get_config_path(dataset_root: &Path) -> PathBuf {
    get_swatnav_dir(dataset_root).join(CONFIG_FILENAME)
}

/// Loads the dataset configuration from disk.
///
/// If the configuration file does not exist, returns the default
/// configuration.
pub fn load_config(dataset_root: &Path) -> Result<DatasetConfig> {
    let config_path = get_config_path(dataset_root);

    if !config_path.exists() {
        return Ok(DatasetConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| SwatNavError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: DatasetConfig =
        serde_json::from_str(&contents).map_err(|e| SwatNavError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Saves the dataset configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final
/// location, so a partial write never corrupts the configuration.
pub fn save_config(dataset_root: &Path, config: &DatasetConfig) -> Result<()> {
    let swatnav_dir = get_swatnav_dir(dataset_root);
    fs::create_dir_all(&swatnav_dir).map_err(|e| SwatNavError::Config {
        message: format!(
            "failed to create swatnav directory '{}': {}",
            swatnav_dir.display(),
            e
        ),
    })?;

    let config_path = get_config_path(dataset_root);
    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| SwatNavError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| SwatNavError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| SwatNavError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}

/// Resolves the path of the dataset's SQLite database, if one is configured
/// and present on disk.
pub fn database_path(dataset_root: &Path, config: &DatasetConfig) -> Option<PathBuf> {
    let name = config.database_file.as_deref()?;
    let path = dataset_root.join(name);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}
