use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::history::{read_history, HistoryError};
use crate::progress::Progress;
use crate::scanner::Filesystem;

#[derive(Debug, thiserror::Error)]
pub enum RevertError {
    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RevertOptions {
    pub dry_run: bool,
}

/// A single revert operation
#[derive(Debug, Clone)]
pub struct RevertOperation {
    pub current_path: PathBuf,
    pub current_name: String,
    pub revert_path: PathBuf,
    pub revert_name: String,
    /// Why the file could not be restored, if it could not
    pub error: Option<String>,
}

impl RevertOperation {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of a revert operation
#[derive(Debug)]
pub struct RevertResult {
    pub operations: Vec<RevertOperation>,
    pub original_history: PathBuf,
    pub dry_run: bool,
}

impl RevertResult {
    pub fn restored_count(&self) -> usize {
        self.operations.iter().filter(|op| op.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.operations.len() - self.restored_count()
    }
}

/// Undo the renames recorded in a history file.
///
/// Entries are restored newest first. An entry that cannot be restored is
/// reported and skipped; the rest still proceed.
pub fn revert_from_history<F: Filesystem>(
    fs: &F,
    history_path: &Path,
    options: &RevertOptions,
    progress: &mut Progress,
) -> Result<RevertResult, RevertError> {
    info!("Loading history from: {:?}", history_path);

    let history = read_history(history_path)?;

    info!(
        "History contains {} changes from {}",
        history.changes.len(),
        history.executed_at
    );

    progress.revert_start(history.changes.len(), &history.executed_at.to_string());

    let total = history.changes.len();
    let mut operations = Vec::with_capacity(total);

    for (i, entry) in history.changes.iter().rev().enumerate() {
        let current_path = entry.destination_path();
        let revert_path = entry.source_path();

        debug!("Checking revert: {} -> {}", entry.destination, entry.source);

        let error = if !fs.exists(&current_path) {
            Some(format!("'{}' not found", entry.destination))
        } else if fs.exists(&revert_path) {
            Some(format!("'{}' already exists", entry.source))
        } else if options.dry_run {
            None
        } else {
            fs.rename(&current_path, &revert_path).err().map(|e| e.to_string())
        };

        match &error {
            Some(reason) => {
                warn!(
                    from = %entry.destination,
                    to = %entry.source,
                    reason = %reason,
                    "Revert failed"
                );
                progress.rename_failed(i + 1, total, &entry.destination, reason);
            }
            None => {
                info!("Reverting: {} -> {}", entry.destination, entry.source);
                progress.rename_progress(i + 1, total, &entry.destination, &entry.source);
            }
        }

        operations.push(RevertOperation {
            current_path,
            current_name: entry.destination.clone(),
            revert_path,
            revert_name: entry.source.clone(),
            error,
        });
    }

    Ok(RevertResult {
        operations,
        original_history: history_path.to_path_buf(),
        dry_run: options.dry_run,
    })
}
