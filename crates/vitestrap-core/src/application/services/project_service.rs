//! Project Service - main application orchestrator.
//!
//! This service coordinates the entire workflow:
//! 1. Validate the target directory
//! 2. Collect choices
//! 3. Generate the skeleton
//! 4. Install dependencies
//! 5. Configure the UI library
//! 6. Write the scaffold
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{CommandRunner, Filesystem, Progress, Prompter, WorkflowStep},
        services::{
            choice_collector::ChoiceCollector,
            configurator::{Guidance, PostInstallConfigurator},
            generator::GeneratorInvoker,
            installer::DependencyInstaller,
            project_root::ProjectRoot,
            scaffold_writer::{ScaffoldOutcome, ScaffoldWriter},
        },
    },
    domain::{
        Answers, CommandSpec, InstallPlan, MissingFilePolicy, PackageManager, ProjectName,
        ScaffoldLayout, ViteTemplate,
    },
    error::VitestrapResult,
};

/// Toolchain and policy knobs for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkflowOptions {
    pub package_manager: PackageManager,
    pub template: ViteTemplate,
    pub missing_files: MissingFilePolicy,
    /// Pre-selected prompt answers.
    pub defaults: Answers,
}

/// Everything a run would do, computed without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowPlan {
    pub project: ProjectName,
    pub root: ProjectRoot,
    pub answers: Answers,
    pub install: InstallPlan,
    pub commands: Vec<CommandSpec>,
    pub patched_file: Option<PathBuf>,
    pub guidance: Vec<Guidance>,
    pub layout: ScaffoldLayout,
}

/// Record of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    pub project: ProjectName,
    pub root: ProjectRoot,
    pub answers: Answers,
    pub install: InstallPlan,
    pub commands: Vec<CommandSpec>,
    pub patched: Vec<PathBuf>,
    pub guidance: Vec<Guidance>,
    pub scaffold: ScaffoldOutcome,
    /// Shell line that starts the dev server.
    pub dev_command: String,
}

/// Main project service.
///
/// Owns the three driven ports and runs the steps strictly in sequence.
pub struct ProjectService {
    prompter: Box<dyn Prompter>,
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    progress: Option<Box<dyn Progress>>,
    options: WorkflowOptions,
}

impl ProjectService {
    /// Create a new project service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use vitestrap_core::application::{ProjectService, WorkflowOptions};
    ///
    /// let service = ProjectService::new(
    ///     prompter,   // impl Prompter
    ///     runner,     // impl CommandRunner
    ///     filesystem, // impl Filesystem
    ///     WorkflowOptions::default(),
    /// );
    /// ```
    pub fn new(
        prompter: Box<dyn Prompter>,
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        options: WorkflowOptions,
    ) -> Self {
        Self {
            prompter,
            runner,
            filesystem,
            progress: None,
            options,
        }
    }

    /// Announce each step of [`Self::create`] through `progress`.
    pub fn with_progress(mut self, progress: Box<dyn Progress>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Resolve the project root and make sure nothing is there yet.
    pub fn preflight(&self, name: &ProjectName, base_dir: &Path) -> VitestrapResult<ProjectRoot> {
        let root = ProjectRoot::resolve(base_dir, name);
        root.ensure_vacant(self.filesystem.as_ref())?;
        Ok(root)
    }

    /// Ask the question sequence.
    pub fn collect(&self) -> VitestrapResult<Answers> {
        ChoiceCollector::new(self.prompter.as_ref(), self.options.defaults).collect()
    }

    /// Describe the run for `answers` without touching anything.
    pub fn plan(&self, name: &ProjectName, base_dir: &Path, answers: Answers) -> WorkflowPlan {
        let root = ProjectRoot::resolve(base_dir, name);
        let install = InstallPlan::from_answers(&answers);
        let configurator = self.configurator();

        let mut commands = vec![self.generator().command(name)];
        commands.extend(self.installer().commands(&install));

        WorkflowPlan {
            project: name.clone(),
            root,
            answers,
            commands,
            patched_file: configurator.patch_target(answers.ui_library()),
            guidance: configurator.guidance(answers.ui_library()),
            layout: ScaffoldLayout::new(self.options.template, answers.ui_library()),
            install,
        }
    }

    /// Run the whole workflow for `name` inside `base_dir`.
    ///
    /// Any failure aborts the run; nothing already created is rolled back.
    #[instrument(
        skip_all,
        fields(project = %name, base_dir = %base_dir.display())
    )]
    pub fn create(&self, name: &ProjectName, base_dir: &Path) -> VitestrapResult<WorkflowReport> {
        // 1. Target must not exist
        let root = self.preflight(name, base_dir)?;

        // 2. Choices
        let answers = self.collect()?;
        info!(%answers, "Setting up new React project");

        // 3. Skeleton
        self.announce(WorkflowStep::Generating);
        let mut commands = vec![self.generator().invoke(name, base_dir)?];
        root.ensure_present(self.filesystem.as_ref())?;

        // 4. Dependencies
        self.announce(WorkflowStep::Installing);
        let install = InstallPlan::from_answers(&answers);
        commands.extend(self.installer().install(&install, root.path())?);

        // 5. Source wiring
        if let Some(step) = WorkflowStep::configuring(answers.ui_library()) {
            self.announce(step);
        }
        let configured = self
            .configurator()
            .configure(answers.ui_library(), root.path())?;

        // 6. Folder convention
        self.announce(WorkflowStep::Scaffolding);
        let layout = ScaffoldLayout::new(self.options.template, answers.ui_library());
        let scaffold = ScaffoldWriter::new(self.filesystem.as_ref(), self.options.missing_files)
            .write(&layout, root.path())?;

        info!("Project created successfully");
        Ok(WorkflowReport {
            project: name.clone(),
            root,
            answers,
            install,
            commands,
            patched: configured.patched,
            guidance: configured.guidance,
            scaffold,
            dev_command: self.options.package_manager.dev_script(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn announce(&self, step: WorkflowStep) {
        debug!(?step, "Step started");
        if let Some(progress) = &self.progress {
            progress.step(step);
        }
    }

    fn generator(&self) -> GeneratorInvoker<'_> {
        GeneratorInvoker::new(
            self.runner.as_ref(),
            self.options.package_manager,
            self.options.template,
        )
    }

    fn installer(&self) -> DependencyInstaller<'_> {
        DependencyInstaller::new(self.runner.as_ref(), self.options.package_manager)
    }

    fn configurator(&self) -> PostInstallConfigurator<'_> {
        PostInstallConfigurator::new(
            self.filesystem.as_ref(),
            self.options.package_manager,
            self.options.template,
        )
    }
}
