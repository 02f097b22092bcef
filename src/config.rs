// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::SearchOptions;
use crate::entropy::{Precision, DEFAULT_ALPHA, DEFAULT_Q};
use crate::error::ConfigError;
use crate::persist::{ConflictPolicy, RecordFormat};

/// Default stem of the record file.
pub const DEFAULT_STEM: &str = "perfection_entropies";

/// Main configuration.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the lookup tables
    pub data_dir: PathBuf,

    /// Directory receiving record files
    pub output_dir: PathBuf,

    /// Perfection search parameters
    pub search: SearchOptions,

    pub entropy: EntropyConfig,

    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntropyConfig {
    pub precision: Precision,
    pub tsallis_q: f64,
    pub renyi_alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub format: RecordFormat,
    pub stem: String,
    pub on_conflict: ConflictPolicy,
}

impl Default for Config {
    fn default() -> Self {
        let data = PathBuf::from("data");
        Self {
            data_dir: data.clone(),
            output_dir: data,
            search: SearchOptions::default(),
            entropy: EntropyConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            tsallis_q: DEFAULT_Q,
            renyi_alpha: DEFAULT_ALPHA,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            format: RecordFormat::default(),
            stem: DEFAULT_STEM.to_string(),
            on_conflict: ConflictPolicy::default(),
        }
    }
}

impl Config {
    /// Create config with both directories at `data_dir`
    pub fn from_data_dir(data_dir: PathBuf) -> Self {
        Self {
            output_dir: data_dir.clone(),
            data_dir,
            ..Default::default()
        }
    }

    /// Load config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"data_dir": "/tables", "entropy": {"precision": "inf"}, "store": {"format": "list"}}"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tables"));
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.entropy.precision, Precision::Exact);
        assert_eq!(config.entropy.tsallis_q, DEFAULT_Q);
        assert_eq!(config.entropy.renyi_alpha, DEFAULT_ALPHA);
        assert_eq!(config.store.format, RecordFormat::List);
        assert_eq!(config.store.stem, DEFAULT_STEM);
        assert_eq!(config.search, SearchOptions::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let mut config = Config::from_data_dir(dir.path().to_path_buf());
        config.store.on_conflict = ConflictPolicy::Abort;
        config.search.stop = 2;
        config.save(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = TempDir::new().unwrap();
        let missing = Config::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"entropy": {"precision": "many"}}"#).unwrap();
        assert!(matches!(Config::from_file(&path).unwrap_err(), ConfigError::Parse(_)));
    }
}
