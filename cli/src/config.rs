//! Run configuration assembled from flags and prompt answers

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use cycle_detection::Category;
use daily_report::csv_path;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No parent folders provided")]
    NoFolders,

    #[error("No CSV file name provided")]
    NoOutputName,
}

/// Values given on the command line, before any prompting
#[derive(Debug, Clone, Default)]
pub struct ConfigFlags {
    pub folders: BTreeMap<Category, PathBuf>,
    pub output_name: Option<String>,
    pub json_path: Option<PathBuf>,
    /// Never prompt; unanswered values count as empty
    pub non_interactive: bool,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root folder per category; a skipped category has no entry
    pub folders: BTreeMap<Category, PathBuf>,
    /// Output base name, `.csv` is appended
    pub output_name: String,
    pub json_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(
        folders: BTreeMap<Category, PathBuf>,
        output_name: &str,
        json_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if folders.is_empty() {
            return Err(ConfigError::NoFolders);
        }
        let output_name = output_name.trim();
        if output_name.is_empty() {
            return Err(ConfigError::NoOutputName);
        }

        Ok(Self {
            folders,
            output_name: output_name.to_string(),
            json_path,
        })
    }

    pub fn csv_path(&self) -> PathBuf {
        csv_path(&self.output_name)
    }
}
