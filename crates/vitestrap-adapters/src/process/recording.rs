//! Command runner that records invocations instead of spawning processes.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use vitestrap_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::VitestrapResult,
};

type Hook = dyn Fn(&CommandSpec, &Path) -> VitestrapResult<()> + Send + Sync;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: CommandSpec,
    pub cwd: PathBuf,
}

/// Test runner.
///
/// Clones share the log. An optional hook runs for every command and can
/// simulate side effects (creating the generator skeleton) or fail.
#[derive(Clone, Default)]
pub struct RecordingCommandRunner {
    log: Arc<Mutex<Vec<RecordedCommand>>>,
    hook: Option<Arc<Hook>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` after recording each command; its result is returned.
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(&CommandSpec, &Path) -> VitestrapResult<()> + Send + Sync + 'static,
    {
        Self {
            log: Arc::default(),
            hook: Some(Arc::new(hook)),
        }
    }

    /// Everything run so far, in order.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Rendered command lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.commands()
            .iter()
            .map(|r| r.command.to_string())
            .collect()
    }
}

impl fmt::Debug for RecordingCommandRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingCommandRunner")
            .field("log", &self.log)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, command: &CommandSpec, cwd: &Path) -> VitestrapResult<()> {
        self.log
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .push(RecordedCommand {
                command: command.clone(),
                cwd: cwd.to_path_buf(),
            });

        match &self.hook {
            Some(hook) => hook(command, cwd),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_with_cwd() {
        let runner = RecordingCommandRunner::new();
        runner
            .run(&CommandSpec::new("npm", ["install", "axios"]), Path::new("/w/app"))
            .unwrap();
        runner
            .run(&CommandSpec::new("npm", ["--version"]), Path::new("/w"))
            .unwrap();

        let commands = runner.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].cwd, PathBuf::from("/w/app"));
        assert_eq!(runner.lines()[1], "npm --version");
    }

    #[test]
    fn hook_failure_is_returned_after_recording() {
        let runner = RecordingCommandRunner::with_hook(|cmd, _| {
            Err(ApplicationError::CommandFailed {
                command: cmd.to_string(),
                code: Some(1),
            }
            .into())
        });
        let handle = runner.clone();

        assert!(runner
            .run(&CommandSpec::new("npm", ["install"]), Path::new("/w"))
            .is_err());
        assert_eq!(handle.commands().len(), 1);
    }
}
