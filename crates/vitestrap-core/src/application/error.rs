//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The user aborted the prompt sequence.
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt adapter returned an index outside the option list.
    #[error("Selection {index} is out of range for '{prompt}' ({options} options)")]
    InvalidSelection {
        prompt: String,
        index: usize,
        options: usize,
    },

    /// The prompt backend itself failed (terminal gone, I/O error).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// An external program could not be started.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// An external program exited unsuccessfully.
    #[error("Command `{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Target directory already exists before generation.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The generator returned but the project root is not there.
    #[error("Project directory was not created at {path}")]
    ProjectRootMissing { path: PathBuf },

    /// A generator file expected by the scaffold writer is absent.
    #[error("Expected generator file is missing: {path}")]
    BoilerplateMissing { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    StateLockError,
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::CommandNotFound { program } => vec![
                format!("'{}' is not installed or not on your PATH", program),
                "Install Node.js (which ships npm) from https://nodejs.org".into(),
                "Or pick another manager with --package-manager".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("External command failed: {}", command),
                "Check the command output above for details".into(),
                "Remove the partially created project before retrying".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::ProjectRootMissing { path } => vec![
                format!("Expected the generator to create {}", path.display()),
                "Check the generator output above".into(),
            ],
            Self::BoilerplateMissing { path } => vec![
                format!("{} was not produced by the generator", path.display()),
                "Set [scaffold] on_missing_boilerplate = \"skip\" to continue anyway".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ProjectRootMissing { .. } | Self::BoilerplateMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidSelection { .. }
            | Self::PromptFailed { .. }
            | Self::CommandNotFound { .. }
            | Self::CommandFailed { .. }
            | Self::FilesystemError { .. }
            | Self::StateLockError => ErrorCategory::Internal,
        }
    }
}
