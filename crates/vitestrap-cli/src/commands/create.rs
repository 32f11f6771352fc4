//! Implementation of `vitestrap <PROJECT_NAME>`.
//!
//! Responsibility: turn flags and config into [`WorkflowOptions`], wire the
//! production adapters into a [`ProjectService`], and display the result. No
//! business logic lives here.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use vitestrap_adapters::{DefaultsPrompter, LocalFilesystem, SystemCommandRunner};
use vitestrap_core::{
    application::{
        ProjectService, WorkflowOptions, WorkflowPlan, WorkflowReport,
        ports::{Progress, Prompter, WorkflowStep},
    },
    domain::ProjectName,
    error::VitestrapError,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the create workflow.
///
/// Dispatch sequence:
/// 1. Validate the project name
/// 2. Merge config and flags into workflow options
/// 3. Pick the prompter (`--yes` skips the questions)
/// 4. `--dry-run`: check the target, collect answers, print the plan
/// 5. Otherwise run the full workflow and print next steps
#[instrument(skip_all, fields(project = %cli.name))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Name
    let name = ProjectName::new(cli.name.as_str()).map_err(VitestrapError::from)?;

    // 2. Options
    let options = resolve_options(&cli, &config);
    debug!(
        package_manager = %options.package_manager,
        template = %options.template,
        missing_files = %options.missing_files,
        defaults = %options.defaults,
        "Options resolved"
    );

    let base_dir = std::env::current_dir()?;

    // 3. Adapters. JSON runs keep child output off stdout.
    let runner = if output.is_json() {
        SystemCommandRunner::new().with_stdout_to_stderr()
    } else {
        SystemCommandRunner::new()
    };
    let mut service = ProjectService::new(
        prompter(cli.yes)?,
        Box::new(runner),
        Box::new(LocalFilesystem::new()),
        options,
    );
    if !output.is_json() {
        service = service.with_progress(Box::new(StepPrinter(output.clone())));
    }

    // 4. Dry run: describe but do not run.
    if cli.dry_run {
        service.preflight(&name, &base_dir)?;
        let answers = service.collect()?;
        let plan = service.plan(&name, &base_dir, answers);
        return render_plan(&plan, &output);
    }

    // 5. The real thing
    if !output.is_json() {
        output.header(&format!("\nSetting up new React project: {name}"))?;
    }
    let report = service.create(&name, &base_dir)?;
    info!(project = %name, root = %report.root.path().display(), "Workflow finished");

    render_report(&report, &base_dir, &output)
}

/// Config values, with command-line flags taking precedence.
pub fn resolve_options(cli: &Cli, config: &AppConfig) -> WorkflowOptions {
    let mut options = config.workflow_options();
    if let Some(pm) = cli.package_manager {
        options.package_manager = pm.into();
    }
    if let Some(template) = cli.template {
        options.template = template.into();
    }
    options
}

fn prompter(yes: bool) -> CliResult<Box<dyn Prompter>> {
    if yes {
        return Ok(Box::new(DefaultsPrompter));
    }
    interactive_prompter()
}

#[cfg(feature = "interactive")]
fn interactive_prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(crate::prompt::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn interactive_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Prints a header line as each workflow step starts.
struct StepPrinter(OutputManager);

impl Progress for StepPrinter {
    fn step(&self, step: WorkflowStep) {
        if let Err(e) = self.0.header(&format!("\n{}", step.message())) {
            warn!(error = %e, "Could not print step header");
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_report(report: &WorkflowReport, base_dir: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for skipped in &report.scaffold.skipped {
        output.warning(&format!(
            "{} was not produced by the generator; skipped",
            skipped.display()
        ))?;
    }

    for guidance in &report.guidance {
        output.print("")?;
        output.info(&guidance.message)?;
        output.print(&format!("  {}", guidance.command))?;
    }

    output.print("")?;
    output.success(&format!(
        "Project \"{}\" has been successfully created!",
        report.project
    ))?;
    output.print("")?;
    output.print("To get started, run the following commands:")?;
    output.print(&format!("  cd {}", relative_root(report, base_dir)))?;
    output.print(&format!("  {}", report.dev_command))?;
    Ok(())
}

fn render_plan(plan: &WorkflowPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.project,
        plan.root.path().display()
    ))?;
    output.detail("Answers", &plan.answers.to_string())?;

    for command in &plan.commands {
        output.detail("Run", &command.to_string())?;
    }
    if let Some(file) = &plan.patched_file {
        output.detail("Patch", &file.display().to_string())?;
    }
    for dir in plan.layout.directories() {
        output.detail("Create", &format!("{}/", dir.display()))?;
    }
    for file in plan.layout.removals() {
        output.detail("Remove", &file.display().to_string())?;
    }
    for file in plan.layout.files() {
        output.detail("Write", &file.path.display().to_string())?;
    }
    for guidance in &plan.guidance {
        output.detail("Then run", &guidance.command)?;
    }
    Ok(())
}

/// `cd` target as typed by the user, falling back to the absolute root.
fn relative_root(report: &WorkflowReport, base_dir: &Path) -> String {
    report
        .root
        .path()
        .strip_prefix(base_dir)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| report.root.path().display().to_string())
}
