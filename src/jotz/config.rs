use crate::error::{JotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "notebook.json";

/// Configuration for jotz, stored as config.json next to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotzConfig {
    /// File name of the notebook JSON inside the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for JotzConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl JotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotzError::Io)?;
        let config: JotzConfig =
            serde_json::from_str(&content).map_err(JotzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotzError::Serialization)?;
        fs::write(config_path, content).map_err(JotzError::Io)?;
        Ok(())
    }

    /// Full path of the notebook file inside `data_dir`.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_file_name() {
        let config = JotzConfig::default();
        assert_eq!(config.data_file, "notebook.json");
    }

    #[test]
    fn load_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = JotzConfig::load(dir.path()).unwrap();
        assert_eq!(config, JotzConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let config = JotzConfig {
            data_file: "notes.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = JotzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "notes.json");
    }

    #[test]
    fn data_path_joins_dir_and_file() {
        let config = JotzConfig::default();
        let path = config.data_path(Path::new("/tmp/jotz"));
        assert_eq!(path, PathBuf::from("/tmp/jotz/notebook.json"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{nope").unwrap();
        assert!(JotzConfig::load(dir.path()).is_err());
    }
}
