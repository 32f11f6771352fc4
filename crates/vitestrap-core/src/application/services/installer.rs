//! Dependency installation.
//!
//! One package-manager call per non-empty batch: runtime first, then dev.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::CommandRunner,
    domain::{CommandSpec, InstallPlan, PackageManager},
    error::VitestrapResult,
};

/// Installs the packages of an [`InstallPlan`].
pub struct DependencyInstaller<'a> {
    runner: &'a dyn CommandRunner,
    package_manager: PackageManager,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(runner: &'a dyn CommandRunner, package_manager: PackageManager) -> Self {
        Self {
            runner,
            package_manager,
        }
    }

    /// Commands that [`Self::install`] would run, in order.
    pub fn commands(&self, plan: &InstallPlan) -> Vec<CommandSpec> {
        [
            CommandSpec::install(self.package_manager, plan.runtime(), false),
            CommandSpec::install(self.package_manager, plan.dev(), true),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Run the install commands inside `root`. No retry on failure.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn install(&self, plan: &InstallPlan, root: &Path) -> VitestrapResult<Vec<CommandSpec>> {
        let commands = self.commands(plan);
        if commands.is_empty() {
            debug!("No packages selected, skipping install");
            return Ok(commands);
        }

        for command in &commands {
            info!(command = %command, "Installing dependencies");
            self.runner.run(command, root)?;
        }
        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockCommandRunner};
    use crate::domain::{Answers, DataFetching, StateManagement};

    #[test]
    fn empty_plan_runs_nothing() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let plan = InstallPlan::from_answers(&Answers::builder().router(false).build());
        let ran = DependencyInstaller::new(&runner, PackageManager::Npm)
            .install(&plan, Path::new("/work/app"))
            .unwrap();
        assert!(ran.is_empty());
    }

    #[test]
    fn runtime_packages_go_in_one_call() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, cwd| {
                cmd.args() == ["install", "react-router-dom", "zustand", "axios"]
                    && cwd == Path::new("/work/app")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let answers = Answers::builder()
            .state_management(StateManagement::Zustand)
            .data_fetching(DataFetching::Axios)
            .build();
        let plan = InstallPlan::from_answers(&answers);
        let ran = DependencyInstaller::new(&runner, PackageManager::Npm)
            .install(&plan, Path::new("/work/app"))
            .unwrap();
        assert_eq!(ran.len(), 1);
    }

    #[test]
    fn install_failure_is_fatal() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|cmd, _| {
            Err(ApplicationError::CommandFailed {
                command: cmd.to_string(),
                code: Some(1),
            }
            .into())
        });

        let plan = InstallPlan::from_answers(&Answers::default());
        let err = DependencyInstaller::new(&runner, PackageManager::Pnpm)
            .install(&plan, Path::new("/work/app"))
            .unwrap_err();
        assert!(err.to_string().contains("pnpm add react-router-dom"));
    }

    #[test]
    fn commands_uses_manager_verbs() {
        let runner = MockCommandRunner::new();
        let plan = InstallPlan::from_answers(&Answers::default());
        let cmds = DependencyInstaller::new(&runner, PackageManager::Bun).commands(&plan);
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].to_string(), "bun add react-router-dom");
    }
}
