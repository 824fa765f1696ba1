use std::path::{Path, PathBuf};

use crate::namer::TypeTag;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameStatus {
    Renamed,
    /// Dry run: the rename would be attempted
    Planned,
    /// The rename failed (or would fail, in a dry run)
    Failed(String),
}

/// A single rename attempt
#[derive(Debug, Clone)]
pub struct RenameRecord {
    /// Directory holding both the original and the renamed file
    pub directory: PathBuf,
    pub source_name: String,
    pub destination_name: String,
    pub tag: TypeTag,
    pub sequence: u32,
    pub status: RenameStatus,
}

impl RenameRecord {
    pub fn source_path(&self) -> PathBuf {
        self.directory.join(&self.source_name)
    }

    pub fn destination_path(&self) -> PathBuf {
        self.directory.join(&self.destination_name)
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, RenameStatus::Renamed | RenameStatus::Planned)
    }
}

/// Result of one directory's rename pass
#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub directory: PathBuf,
    pub records: Vec<RenameRecord>,
}

impl RenameOutcome {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
            records: Vec::new(),
        }
    }

    /// True when at least one file was (or would be) renamed
    pub fn any_succeeded(&self) -> bool {
        self.records.iter().any(RenameRecord::succeeded)
    }

    pub fn succeeded_count(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.records.len() - self.succeeded_count()
    }
}

/// A directory whose listing failed below the root
#[derive(Debug, Clone)]
pub struct SkippedDirectory {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate of every directory pass in one walk
#[derive(Debug, Clone)]
pub struct WalkSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub directories_visited: usize,
    pub skipped: Vec<SkippedDirectory>,
    pub records: Vec<RenameRecord>,
}

impl WalkSummary {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            directories_visited: 0,
            skipped: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn add_outcome(&mut self, outcome: RenameOutcome) {
        self.directories_visited += 1;
        self.records.extend(outcome.records);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &RenameRecord> {
        self.records.iter().filter(|r| r.succeeded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RenameRecord> {
        self.records.iter().filter(|r| !r.succeeded())
    }

    pub fn succeeded_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }
}
