pub mod cli;
pub mod error;
pub mod history;
pub mod logging;
pub mod namer;
pub mod output;
pub mod progress;
pub mod revert;
pub mod scanner;
pub mod walker;

pub use error::{AppError, ExitCode};
pub use namer::{
    classify, extension_of, name_without_extension, CounterTable, NameTemplate, Namer,
    PlannedName, TypeTag,
};
pub use scanner::{
    scan_directory, DirectoryEntry, EntryKind, Filesystem, LocalFilesystem, ScannerError,
};
pub use walker::{RenameOutcome, RenameRecord, RenameStatus, WalkOptions, WalkSummary, Walker};
