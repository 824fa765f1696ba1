use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::namer::NameTemplate;

pub const HISTORY_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryFile {
    /// Schema version for compatibility
    pub version: String,

    /// When the run was executed
    pub executed_at: DateTime<Utc>,

    /// Directory the walk started from
    pub root: PathBuf,

    pub recursive: bool,

    pub template: NameTemplate,

    /// Tool version that created this history
    pub tool_version: String,

    /// Successful renames, in the order they happened
    pub changes: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Directory containing the file
    pub directory: PathBuf,

    /// Original file name
    pub source: String,

    /// New file name
    pub destination: String,
}

impl HistoryEntry {
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(&self.source)
    }

    pub fn destination_path(&self) -> PathBuf {
        self.directory.join(&self.destination)
    }
}
