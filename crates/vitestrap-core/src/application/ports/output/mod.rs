//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `vitestrap-adapters` crate and the CLI provide implementations.

use std::path::Path;

use crate::domain::{CommandSpec, UiLibrary};
use crate::error::VitestrapResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vitestrap_adapters::filesystem::LocalFilesystem` (production)
/// - `vitestrap_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Callers always pass absolute paths built from the project root;
///   adapters never consult the process working directory.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> VitestrapResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> VitestrapResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> VitestrapResult<()>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> VitestrapResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for running external programs.
///
/// Implementations block until the program exits and let it share the
/// terminal, so generator prompts reach the user.
///
/// Implemented by:
/// - `vitestrap_adapters::process::SystemCommandRunner` (production)
/// - `vitestrap_adapters::process::RecordingCommandRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as its working directory.
    ///
    /// Errors with `CommandNotFound` when the program cannot be spawned and
    /// `CommandFailed` on a non-zero exit.
    fn run(&self, command: &CommandSpec, cwd: &Path) -> VitestrapResult<()>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `DialoguerPrompter` in the CLI (interactive terminal)
/// - `vitestrap_adapters::prompt::DefaultsPrompter` (`--yes`)
/// - `vitestrap_adapters::prompt::ScriptedPrompter` (testing)
pub trait Prompter {
    /// Single-select question. Returns the index into `items`.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> VitestrapResult<usize>;

    /// Yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> VitestrapResult<bool>;
}

/// A user-visible stage of the create workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    Generating,
    Installing,
    ConfiguringTailwind,
    SettingUpShadcn,
    Scaffolding,
}

impl WorkflowStep {
    /// The configuration step for `ui`; only Tailwind and shadcn have one.
    pub const fn configuring(ui: UiLibrary) -> Option<Self> {
        match ui {
            UiLibrary::TailwindCss => Some(Self::ConfiguringTailwind),
            UiLibrary::Shadcn => Some(Self::SettingUpShadcn),
            UiLibrary::None | UiLibrary::Mui => None,
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::Generating => "Creating a new React project using Vite...",
            Self::Installing => "Installing all selected dependencies...",
            Self::ConfiguringTailwind => "Configuring Tailwind CSS for Vite...",
            Self::SettingUpShadcn => "Setting up Shadcn UI...",
            Self::Scaffolding => "Creating common folder structure and files...",
        }
    }
}

/// Port for announcing workflow steps as they start.
///
/// Implemented by the CLI's step printer. Runs without one stay silent.
pub trait Progress {
    fn step(&self, step: WorkflowStep);
}
