mod types;

pub use types::*;

use std::path::Path;
use tracing::{debug, info, trace, warn};

use crate::namer::{classify, CounterTable, Namer};
use crate::progress::Progress;
use crate::scanner::{DirectoryEntry, Filesystem, ScannerError};

/// Options for a walk
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Descend into subdirectories, depth-first
    pub recursive: bool,
    /// Plan names without renaming anything
    pub dry_run: bool,
}

/// Runs the recover-then-rename pass over a directory tree
pub struct Walker<'a, F: Filesystem> {
    fs: &'a F,
    namer: Namer,
    options: WalkOptions,
}

impl<'a, F: Filesystem> Walker<'a, F> {
    pub fn new(fs: &'a F, namer: Namer, options: WalkOptions) -> Self {
        Self { fs, namer, options }
    }

    /// Seed a counter table from the files in `dir` that are already renamed
    pub fn recover_counters(&self, dir: &Path) -> Result<CounterTable, ScannerError> {
        let mut counters = CounterTable::new();

        for entry in self.fs.list_children(dir)? {
            if !entry.is_file() || !self.namer.is_renamed(&entry.name) {
                continue;
            }

            let tag = classify(&entry.name);
            match self.namer.recover_counter(&entry.name, tag) {
                Some(sequence) => {
                    trace!(name = %entry.name, tag = %tag, sequence, "Recovered counter");
                    counters.observe(tag, sequence);
                }
                None => {
                    trace!(name = %entry.name, "Marked name does not match template, skipping");
                }
            }
        }

        debug!(path = ?dir, types = counters.len(), "Counters recovered");

        Ok(counters)
    }

    /// Rename every unmarked file in `dir`, in name order.
    ///
    /// A sequence number is spent as soon as it is assigned, so a failed
    /// rename leaves a gap instead of handing its number to the next file.
    pub fn rename_unmarked(
        &self,
        dir: &Path,
        counters: &mut CounterTable,
        progress: &mut Progress,
    ) -> Result<RenameOutcome, ScannerError> {
        let mut pending: Vec<DirectoryEntry> = self
            .fs
            .list_children(dir)?
            .into_iter()
            .filter(|e| e.is_file() && !self.namer.is_renamed(&e.name))
            .collect();

        // Sequence numbers follow this order
        pending.sort_by(|a, b| a.name.cmp(&b.name));

        let mut outcome = RenameOutcome::new(dir);
        let total = pending.len();

        if pending.is_empty() {
            info!(path = ?dir, "Nothing to rename");
            progress.nothing_to_rename(dir);
            return Ok(outcome);
        }

        for (i, entry) in pending.iter().enumerate() {
            let Some(planned) = self.namer.plan(&entry.name, counters) else {
                let tag = classify(&entry.name);
                let reason = format!("sequence exhausted for type {}", tag);
                warn!(from = %entry.name, reason = %reason, "Rename failed");
                progress.rename_failed(i + 1, total, &entry.name, &reason);

                outcome.records.push(RenameRecord {
                    directory: dir.to_path_buf(),
                    source_name: entry.name.clone(),
                    destination_name: String::new(),
                    tag,
                    sequence: counters.get(tag),
                    status: RenameStatus::Failed(reason),
                });
                continue;
            };
            counters.set(planned.tag, planned.sequence);

            let destination = dir.join(&planned.name);

            let status = if self.options.dry_run {
                if self.fs.exists(&destination) {
                    RenameStatus::Failed("Destination already exists".to_string())
                } else {
                    RenameStatus::Planned
                }
            } else {
                match self.fs.rename(&entry.path, &destination) {
                    Ok(()) => RenameStatus::Renamed,
                    Err(e) => RenameStatus::Failed(e.to_string()),
                }
            };

            match &status {
                RenameStatus::Failed(reason) => {
                    warn!(
                        from = %entry.name,
                        to = %planned.name,
                        reason = %reason,
                        "Rename failed"
                    );
                    progress.rename_failed(i + 1, total, &entry.name, reason);
                }
                RenameStatus::Planned => {
                    info!("Would rename: {} -> {}", entry.name, planned.name);
                    progress.rename_progress(i + 1, total, &entry.name, &planned.name);
                }
                RenameStatus::Renamed => {
                    info!("Renamed: {} -> {}", entry.name, planned.name);
                    progress.rename_progress(i + 1, total, &entry.name, &planned.name);
                }
            }

            outcome.records.push(RenameRecord {
                directory: dir.to_path_buf(),
                source_name: entry.name.clone(),
                destination_name: planned.name,
                tag: planned.tag,
                sequence: planned.sequence,
                status,
            });
        }

        if !outcome.any_succeeded() {
            progress.warn(&format!("No files were renamed in {}", dir.display()));
        }

        Ok(outcome)
    }

    /// Process `root`, and its subdirectories when walking recursively.
    ///
    /// Only a failure to list `root` itself is returned as an error;
    /// unreadable subdirectories are reported and recorded in the summary.
    pub fn walk(&self, root: &Path, progress: &mut Progress) -> Result<WalkSummary, ScannerError> {
        let mut summary = WalkSummary::new(root, self.options.dry_run);
        self.walk_directory(root, progress, &mut summary)?;

        info!(
            directories = summary.directories_visited,
            renamed = summary.succeeded_count(),
            failed = summary.failed_count(),
            skipped = summary.skipped.len(),
            "Walk complete"
        );

        Ok(summary)
    }

    fn walk_directory(
        &self,
        dir: &Path,
        progress: &mut Progress,
        summary: &mut WalkSummary,
    ) -> Result<(), ScannerError> {
        if self.options.recursive {
            progress.directory_start(dir);
        }

        // Counters live only for this directory's pass
        let mut counters = self.recover_counters(dir)?;
        let outcome = self.rename_unmarked(dir, &mut counters, progress)?;
        summary.add_outcome(outcome);

        if !self.options.recursive {
            return Ok(());
        }

        let subdirs: Vec<DirectoryEntry> = self
            .fs
            .list_children(dir)?
            .into_iter()
            .filter(DirectoryEntry::is_dir)
            .collect();

        for subdir in subdirs {
            if let Err(e) = self.walk_directory(&subdir.path, progress, summary) {
                warn!(path = ?subdir.path, error = %e, "Skipping unreadable directory");
                progress.warn(&format!("Skipping {}: {}", subdir.path.display(), e));
                summary.skipped.push(SkippedDirectory {
                    path: subdir.path,
                    reason: e.to_string(),
                });
            }
        }

        Ok(())
    }
}
