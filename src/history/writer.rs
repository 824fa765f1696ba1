use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::namer::NameTemplate;
use crate::walker::{RenameStatus, WalkSummary};

use super::types::*;

/// Error types for history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to write history file: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to serialize history: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Failed to read history file: {0}")]
    ReadError(String),

    #[error("History file version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
}

/// Write the renames performed by a walk to `path`.
///
/// An existing file at `path` is never replaced: the log goes to a sibling
/// name carrying the run's timestamp instead. Returns the path actually written.
pub fn write_history(
    summary: &WalkSummary,
    recursive: bool,
    template: NameTemplate,
    path: &Path,
) -> Result<PathBuf, HistoryError> {
    let history = create_history_from_summary(summary, recursive, template);

    if path.exists() {
        warn!("History file already exists: {:?}", path);
        let unique_path = unique_history_path(&history, path);
        if unique_path.exists() {
            return Err(HistoryError::WriteError(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", unique_path.display()),
            )));
        }
        return write_to_path(&history, &unique_path);
    }

    write_to_path(&history, path)
}

/// `<stem>-<YYYYmmdd-HHMMSS>-<millis><ext>` next to `path`
fn unique_history_path(history: &HistoryFile, path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "history".to_string());
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let unique_filename = format!(
        "{}-{}-{}{}",
        stem,
        history.executed_at.format("%Y%m%d-%H%M%S"),
        history.executed_at.timestamp_subsec_millis(),
        extension
    );
    path.with_file_name(unique_filename)
}

fn create_history_from_summary(
    summary: &WalkSummary,
    recursive: bool,
    template: NameTemplate,
) -> HistoryFile {
    let changes: Vec<HistoryEntry> = summary
        .records
        .iter()
        .filter(|r| r.status == RenameStatus::Renamed)
        .map(|r| HistoryEntry {
            directory: r.directory.clone(),
            source: r.source_name.clone(),
            destination: r.destination_name.clone(),
        })
        .collect();

    HistoryFile {
        version: HISTORY_VERSION.to_string(),
        executed_at: Utc::now(),
        root: summary.root.clone(),
        recursive,
        template,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        changes,
    }
}

fn write_to_path(history: &HistoryFile, path: &Path) -> Result<PathBuf, HistoryError> {
    // Write to temporary file first
    let mut temp_name = path.file_name().map(OsString::from).unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    {
        let file = File::create(&temp_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, history)?;
    }

    // Atomic rename
    fs::rename(&temp_path, path)?;

    info!("History written to: {:?}", path);

    Ok(path.to_path_buf())
}
