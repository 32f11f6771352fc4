//! Project generator invocation (`create vite`).

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::CommandRunner,
    domain::{CommandSpec, PackageManager, ProjectName, ViteTemplate},
    error::VitestrapResult,
};

/// Runs the external generator that creates the project skeleton.
pub struct GeneratorInvoker<'a> {
    runner: &'a dyn CommandRunner,
    package_manager: PackageManager,
    template: ViteTemplate,
}

impl<'a> GeneratorInvoker<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        package_manager: PackageManager,
        template: ViteTemplate,
    ) -> Self {
        Self {
            runner,
            package_manager,
            template,
        }
    }

    /// The command that [`Self::invoke`] runs.
    pub fn command(&self, name: &ProjectName) -> CommandSpec {
        CommandSpec::create_vite(self.package_manager, name, self.template)
    }

    /// Generate `name` inside `base_dir`.
    ///
    /// No cleanup is attempted on failure.
    #[instrument(skip_all, fields(project = %name))]
    pub fn invoke(&self, name: &ProjectName, base_dir: &Path) -> VitestrapResult<CommandSpec> {
        let command = self.command(name);
        info!(command = %command, "Generating project skeleton");
        self.runner.run(&command, base_dir)?;
        Ok(command)
    }
}
