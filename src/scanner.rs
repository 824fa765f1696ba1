use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, devices, symlinks to directories
    Other,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: String, path: PathBuf, kind: EntryKind) -> Self {
        Self { name, path, kind }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Filesystem operations the walker depends on
pub trait Filesystem {
    /// Immediate children of `dir`, sorted by name
    fn list_children(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, ScannerError>;

    /// Rename `from` to `to`, refusing to replace an existing entry
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// The host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn list_children(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
        scan_directory(dir)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // fs::rename silently replaces files on unix
        if self.exists(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "Destination already exists",
            ));
        }
        fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

pub fn scan_directory(target: &Path) -> Result<Vec<DirectoryEntry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                warn!(name = ?raw, "Skipping entry with non UTF-8 name");
                continue;
            }
        };

        let file_type = entry.file_type()?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        trace!(name = %name, kind = ?kind, "Found entry");
        entries.push(DirectoryEntry::new(name, path, kind));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}
