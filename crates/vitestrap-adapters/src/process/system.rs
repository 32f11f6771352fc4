//! Runs external programs with `std::process::Command`.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};
use vitestrap_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::VitestrapResult,
};

/// Production runner.
///
/// The child inherits stdin, stdout and stderr, so generator prompts and
/// install progress go straight to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner {
    stdout_to_stderr: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the child's stdout to our stderr, keeping stdout free for a
    /// machine-readable report.
    pub fn with_stdout_to_stderr(mut self) -> Self {
        self.stdout_to_stderr = true;
        self
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> VitestrapResult<()> {
        info!(
            command = %command,
            cwd = %cwd.display(),
            stdout_to_stderr = self.stdout_to_stderr,
            "Running"
        );

        let status = Command::new(resolve_program(command.program()))
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_error(command, cwd, e))?;

        debug!(command = %command, ?status, "Finished");
        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into())
        }
    }
}

fn spawn_error(
    command: &CommandSpec,
    cwd: &Path,
    e: io::Error,
) -> vitestrap_core::error::VitestrapError {
    match e.kind() {
        io::ErrorKind::NotFound if cwd.is_dir() => ApplicationError::CommandNotFound {
            program: command.program().to_string(),
        }
        .into(),
        _ => ApplicationError::FilesystemError {
            path: cwd.to_path_buf(),
            reason: format!("Failed to start `{}`: {}", command, e),
        }
        .into(),
    }
}

/// Package manager shims are batch files on Windows.
#[cfg(windows)]
fn resolve_program(program: &str) -> String {
    match program {
        "npm" | "npx" | "pnpm" | "yarn" => format!("{program}.cmd"),
        _ => program.to_string(),
    }
}

#[cfg(not(windows))]
fn resolve_program(program: &str) -> String {
    program.to_string()
}
