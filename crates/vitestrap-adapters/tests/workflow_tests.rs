//! End-to-end workflow tests against the in-memory adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use vitestrap_adapters::{
    MemoryFilesystem, RecordingCommandRunner, ScriptedPrompter,
    prompt::{DefaultsPrompter, Reply},
};
use vitestrap_core::{
    application::{
        ApplicationError, ProjectService, WorkflowOptions,
        ports::{Progress, Prompter, WorkflowStep},
        services::choice_collector::{
            DATA_FETCHING_PROMPT, FORM_HANDLING_PROMPT, ROUTER_PROMPT, STATE_MANAGEMENT_PROMPT,
            UI_LIBRARY_PROMPT,
        },
    },
    domain::{
        DomainError, GENERIC_STYLESHEET, MissingFilePolicy, PackageManager, ProjectName,
        TAILWIND_STYLESHEET, ViteTemplate,
    },
    error::VitestrapError,
};

const BASE: &str = "/work";

/// Runner whose `create` command lays down a vite skeleton in `fs`.
fn generator_runner(fs: &MemoryFilesystem, template: ViteTemplate) -> RecordingCommandRunner {
    let fs = fs.clone();
    RecordingCommandRunner::with_hook(move |command, cwd| {
        if command.args().first().map(String::as_str) == Some("create") {
            let name = command
                .args()
                .iter()
                .find(|a| !a.starts_with("create") && !a.starts_with("vite") && !a.starts_with('-'))
                .cloned()
                .unwrap_or_default();
            fs.seed_vite_skeleton(&cwd.join(name), template)?;
        }
        Ok(())
    })
}

fn service(
    prompter: impl Prompter + 'static,
    runner: &RecordingCommandRunner,
    fs: &MemoryFilesystem,
    options: WorkflowOptions,
) -> ProjectService {
    ProjectService::new(
        Box::new(prompter),
        Box::new(runner.clone()),
        Box::new(fs.clone()),
        options,
    )
}

fn name(s: &str) -> ProjectName {
    ProjectName::new(s).unwrap()
}

fn root(project: &str) -> PathBuf {
    Path::new(BASE).join(project)
}

#[test]
fn scenario_router_only() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let prompter = ScriptedPrompter::new([
        Reply::Select(0),
        Reply::Confirm(true),
        Reply::Select(0),
        Reply::Select(0),
        Reply::Select(0),
    ]);

    let report = service(prompter.clone(), &runner, &fs, WorkflowOptions::default())
        .create(&name("my-app"), Path::new(BASE))
        .unwrap();

    assert_eq!(
        runner.lines(),
        vec![
            "npm create vite@latest my-app -- --template react",
            "npm install react-router-dom",
        ]
    );
    assert_eq!(runner.commands()[0].cwd, PathBuf::from(BASE));
    assert_eq!(runner.commands()[1].cwd, root("my-app"));

    assert_eq!(
        prompter.asked(),
        vec![
            UI_LIBRARY_PROMPT,
            ROUTER_PROMPT,
            STATE_MANAGEMENT_PROMPT,
            DATA_FETCHING_PROMPT,
            FORM_HANDLING_PROMPT,
        ]
    );

    let app = root("my-app");
    assert_eq!(
        fs.read_file(app.join("src/index.css")).as_deref(),
        Some(GENERIC_STYLESHEET)
    );
    assert!(fs.read_file(app.join("src/App.css")).is_none());
    assert!(fs.read_file(app.join("src/assets/react.svg")).is_none());
    assert!(
        fs.read_file(app.join("src/App.jsx"))
            .unwrap()
            .contains("<div >App</div>")
    );
    assert!(
        fs.read_file(app.join("src/pages/HomePage.jsx"))
            .unwrap()
            .contains("Welcome to the Home Page!")
    );
    for dir in ["components", "pages", "assets", "hooks", "utils", "services"] {
        assert!(
            vitestrap_core::application::ports::Filesystem::exists(
                &fs,
                &app.join("src").join(dir)
            ),
            "missing src/{dir}"
        );
    }

    // Vite config left untouched without Tailwind
    assert!(
        !fs.read_file(app.join("vite.config.js"))
            .unwrap()
            .contains("tailwindcss")
    );
    assert!(report.patched.is_empty());
    assert!(report.guidance.is_empty());
    assert_eq!(report.dev_command, "npm run dev");
}

#[test]
fn scenario_tailwind_stack() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let prompter = ScriptedPrompter::new([
        Reply::Select(1),
        Reply::Confirm(false),
        Reply::Select(1),
        Reply::Select(1),
        Reply::Select(2),
    ]);

    let report = service(prompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("shop"), Path::new(BASE))
        .unwrap();

    assert_eq!(
        runner.lines()[1],
        "npm install tailwindcss @tailwindcss/vite zustand axios formik"
    );
    assert_eq!(runner.lines().len(), 2);

    let config = fs.read_file(root("shop").join("vite.config.js")).unwrap();
    assert!(config.starts_with("import tailwindcss from '@tailwindcss/vite';\n"));
    assert!(config.contains("plugins: [\n    tailwindcss(),react()]"));
    assert_eq!(config.matches("tailwindcss(),").count(), 1);

    assert_eq!(
        fs.read_file(root("shop").join("src/index.css")).as_deref(),
        Some(TAILWIND_STYLESHEET)
    );
    assert_eq!(report.patched, vec![PathBuf::from("vite.config.js")]);
}

#[test]
fn shadcn_returns_guidance_and_leaves_config_alone() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let prompter = ScriptedPrompter::new([
        Reply::Select(3),
        Reply::Confirm(false),
        Reply::Select(0),
        Reply::Select(0),
        Reply::Select(0),
    ]);

    let report = service(prompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("ui"), Path::new(BASE))
        .unwrap();

    // Nothing to install for shadcn without other picks
    assert_eq!(runner.lines().len(), 1);
    assert_eq!(report.guidance.len(), 1);
    assert_eq!(report.guidance[0].command, "npx shadcn-ui@latest init");
    assert!(
        !fs.read_file(root("ui").join("vite.config.js"))
            .unwrap()
            .contains("tailwindcss")
    );
}

#[test]
fn pnpm_and_typescript_template() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::ReactTs);
    let options = WorkflowOptions {
        package_manager: PackageManager::Pnpm,
        template: ViteTemplate::ReactTs,
        ..WorkflowOptions::default()
    };

    let report = service(DefaultsPrompter, &runner, &fs, options)
        .create(&name("ts-app"), Path::new(BASE))
        .unwrap();

    assert_eq!(
        runner.lines(),
        vec![
            "pnpm create vite ts-app --template react-ts",
            "pnpm add react-router-dom",
        ]
    );
    assert!(fs.read_file(root("ts-app").join("src/App.tsx")).is_some());
    assert!(
        fs.read_file(root("ts-app").join("src/pages/HomePage.tsx"))
            .is_some()
    );
    assert_eq!(report.dev_command, "pnpm run dev");
}

#[test]
fn cancelling_a_prompt_runs_nothing() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let prompter = ScriptedPrompter::new([Reply::Select(0), Reply::Cancel]);

    let err = service(prompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("app"), Path::new(BASE))
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(runner.commands().is_empty());
    assert!(fs.list_files().is_empty());
}

#[test]
fn existing_project_directory_is_rejected_up_front() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(root("taken").join("keep.txt"), "mine").unwrap();
    let runner = generator_runner(&fs, ViteTemplate::React);

    let err = service(DefaultsPrompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("taken"), Path::new(BASE))
        .unwrap_err();

    assert_eq!(
        err,
        VitestrapError::Application(ApplicationError::ProjectExists { path: root("taken") })
    );
    assert!(runner.commands().is_empty());
}

#[test]
fn generator_failure_stops_the_run() {
    let fs = MemoryFilesystem::new();
    let runner = RecordingCommandRunner::with_hook(|command, _| {
        Err(ApplicationError::CommandFailed {
            command: command.to_string(),
            code: Some(1),
        }
        .into())
    });

    let err = service(DefaultsPrompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("app"), Path::new(BASE))
        .unwrap_err();

    assert!(matches!(
        err,
        VitestrapError::Application(ApplicationError::CommandFailed { code: Some(1), .. })
    ));
    assert_eq!(runner.commands().len(), 1);
    assert!(fs.list_files().is_empty());
}

#[test]
fn install_failure_leaves_generated_project_unpatched() {
    let fs = MemoryFilesystem::new();
    let seed = fs.clone();
    let runner = RecordingCommandRunner::with_hook(move |command, cwd| {
        if command.args().first().map(String::as_str) == Some("create") {
            seed.seed_vite_skeleton(&cwd.join("app"), ViteTemplate::React)
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: Some(1),
            }
            .into())
        }
    });
    let prompter = ScriptedPrompter::new([
        Reply::Select(1),
        Reply::Default,
        Reply::Default,
        Reply::Default,
        Reply::Default,
    ]);

    let err = service(prompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("app"), Path::new(BASE))
        .unwrap_err();

    assert!(err.to_string().contains("npm install tailwindcss"));
    let config = fs.read_file(root("app").join("vite.config.js")).unwrap();
    assert!(!config.contains("tailwindcss"));
    // Generator output stays on disk
    assert!(fs.read_file(root("app").join("src/App.css")).is_some());
}

#[test]
fn missing_plugins_marker_aborts_before_writing() {
    let fs = MemoryFilesystem::new();
    let seed = fs.clone();
    let runner = RecordingCommandRunner::with_hook(move |command, cwd| {
        if command.args().first().map(String::as_str) == Some("create") {
            let app = cwd.join("app");
            seed.seed_vite_skeleton(&app, ViteTemplate::React)?;
            seed.seed_file(app.join("vite.config.js"), "export default {}\n")?;
        }
        Ok(())
    });
    let prompter = ScriptedPrompter::new([
        Reply::Select(1),
        Reply::Default,
        Reply::Default,
        Reply::Default,
        Reply::Default,
    ]);

    let err = service(prompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("app"), Path::new(BASE))
        .unwrap_err();

    assert!(matches!(
        err,
        VitestrapError::Domain(DomainError::PatchMarkerMissing { .. })
    ));
    assert_eq!(
        fs.read_file(root("app").join("vite.config.js")).as_deref(),
        Some("export default {}\n")
    );
    // Scaffolding never started
    assert!(fs.read_file(root("app").join("src/pages/HomePage.jsx")).is_none());
}

#[test]
fn missing_boilerplate_fails_by_default() {
    let fs = MemoryFilesystem::new();
    let seed = fs.clone();
    let runner = RecordingCommandRunner::with_hook(move |command, cwd| {
        if command.args().first().map(String::as_str) == Some("create") {
            seed.create_app_without_logo(&cwd.join("app"))?;
        }
        Ok(())
    });

    let err = service(DefaultsPrompter, &runner, &fs, WorkflowOptions::default())
        .create(&name("app"), Path::new(BASE))
        .unwrap_err();

    assert_eq!(
        err,
        VitestrapError::Application(ApplicationError::BoilerplateMissing {
            path: root("app").join("src/assets/react.svg"),
        })
    );
}

#[test]
fn missing_boilerplate_is_skipped_when_configured() {
    let fs = MemoryFilesystem::new();
    let seed = fs.clone();
    let runner = RecordingCommandRunner::with_hook(move |command, cwd| {
        if command.args().first().map(String::as_str) == Some("create") {
            seed.create_app_without_logo(&cwd.join("app"))?;
        }
        Ok(())
    });
    let options = WorkflowOptions {
        missing_files: MissingFilePolicy::Skip,
        ..WorkflowOptions::default()
    };

    let report = service(DefaultsPrompter, &runner, &fs, options)
        .create(&name("app"), Path::new(BASE))
        .unwrap();

    assert_eq!(
        report.scaffold.skipped,
        vec![PathBuf::from("src/assets/react.svg")]
    );
    assert!(fs.read_file(root("app").join("src/pages/HomePage.jsx")).is_some());
}

/// Skeleton minus the React logo.
trait WithoutLogo {
    fn create_app_without_logo(&self, app: &Path) -> vitestrap_core::error::VitestrapResult<()>;
}

impl WithoutLogo for MemoryFilesystem {
    fn create_app_without_logo(&self, app: &Path) -> vitestrap_core::error::VitestrapResult<()> {
        use vitestrap_core::application::ports::Filesystem;

        self.seed_vite_skeleton(app, ViteTemplate::React)?;
        self.remove_file(&app.join("src/assets/react.svg"))
    }
}

#[derive(Clone, Default)]
struct StepLog(Arc<Mutex<Vec<WorkflowStep>>>);

impl Progress for StepLog {
    fn step(&self, step: WorkflowStep) {
        self.0.lock().unwrap().push(step);
    }
}

#[test]
fn steps_are_announced_in_order() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let prompter = ScriptedPrompter::new([
        Reply::Select(1),
        Reply::Confirm(true),
        Reply::Default,
        Reply::Default,
        Reply::Default,
    ]);
    let steps = StepLog::default();

    service(prompter, &runner, &fs, WorkflowOptions::default())
        .with_progress(Box::new(steps.clone()))
        .create(&name("loud"), Path::new(BASE))
        .unwrap();

    assert_eq!(
        *steps.0.lock().unwrap(),
        vec![
            WorkflowStep::Generating,
            WorkflowStep::Installing,
            WorkflowStep::ConfiguringTailwind,
            WorkflowStep::Scaffolding,
        ]
    );
}

#[test]
fn runs_without_ui_library_skip_the_configure_step() {
    let fs = MemoryFilesystem::new();
    let runner = generator_runner(&fs, ViteTemplate::React);
    let steps = StepLog::default();

    service(DefaultsPrompter, &runner, &fs, WorkflowOptions::default())
        .with_progress(Box::new(steps.clone()))
        .create(&name("quiet"), Path::new(BASE))
        .unwrap();

    assert!(!steps.0.lock().unwrap().contains(&WorkflowStep::ConfiguringTailwind));
    assert_eq!(steps.0.lock().unwrap().len(), 3);
}
