mod codes;

pub use codes::ExitCode;

use crate::history::HistoryError;
use crate::revert::RevertError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("History file error: {message}")]
    HistoryError {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::HistoryError { .. } => ExitCode::HistoryError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::HistoryError { path, message } => {
                let path_info = path
                    .as_ref()
                    .map(|p| format!("File: {}\n", p.display()))
                    .unwrap_or_default();

                format!(
                    "History file error:\n  {}\n{}\n\
                     Ensure the history file exists and is valid JSON.",
                    message, path_info
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }

    pub fn history(path: Option<PathBuf>, err: HistoryError) -> Self {
        AppError::HistoryError {
            path,
            message: err.to_string(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        AppError::history(None, err)
    }
}

impl From<RevertError> for AppError {
    fn from(err: RevertError) -> Self {
        match err {
            RevertError::History(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = AppError::DirectoryNotFound {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::NotADirectory {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);

        let err = AppError::PermissionDenied {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::PermissionError);
    }

    #[test]
    fn test_detailed_message_includes_context() {
        let err = AppError::HistoryError {
            path: Some(PathBuf::from("/tmp/history.json")),
            message: "Invalid JSON".to_string(),
        };

        let msg = err.detailed_message();
        assert!(msg.contains("Invalid JSON"));
        assert!(msg.contains("/tmp/history.json"));
    }

    #[test]
    fn test_scanner_error_conversion() {
        let scanner_err = ScannerError::PathNotFound(PathBuf::from("/missing"));
        let app_err: AppError = scanner_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::DirectoryNotFound);
    }

    #[test]
    fn test_revert_error_conversion() {
        let revert_err = RevertError::History(HistoryError::ReadError("bad".to_string()));
        let app_err: AppError = revert_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::HistoryError);
    }
}
