use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRationConfig {
    pub grass_silage: Option<u32>,
    pub maize_silage: Option<u32>,
    pub hay: Option<u32>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileShareRange {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub step: Option<u32>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSearchConfig {
    pub grass_silage: Option<FileShareRange>,
    pub maize_silage: Option<FileShareRange>,
    pub max_hay_share: Option<u32>,
    pub min_true_protein: Option<f64>,
    pub min_crude_fiber: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub feed_table: Option<PathBuf>,
    pub ration: Option<FileRationConfig>,
    pub search: Option<FileSearchConfig>,
}

impl FileConfig {
    /// Loads a config file. A relative `feed-table` path is taken relative to
    /// the directory holding the config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: FileConfig =
            toml::from_str(&content).map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;

        if let (Some(table_path), Some(base)) = (config.feed_table.as_mut(), path.parent()) {
            if table_path.is_relative() {
                *table_path = base.join(&*table_path);
            }
        }
        Ok(config)
    }
}
