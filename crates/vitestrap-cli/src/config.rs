//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`WorkflowOptions`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied by the command, not here)
//! 2. Environment variables, `VITESTRAP_<SECTION>__<KEY>`
//! 3. Config file (`--config`, or `config.toml` in the per-user config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vitestrap_core::{
    application::WorkflowOptions,
    domain::{
        Answers, DataFetching, FormHandling, MissingFilePolicy, PackageManager, StateManagement,
        UiLibrary, ViteTemplate,
    },
};

const ENV_PREFIX: &str = "VITESTRAP";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pre-selected answers for the prompts and for `--yes`.
    pub defaults: DefaultsConfig,
    pub toolchain: ToolchainConfig,
    pub scaffold: ScaffoldConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub ui_library: UiLibrary,
    pub router: bool,
    pub state_management: StateManagement,
    pub data_fetching: DataFetching,
    pub form_handling: FormHandling,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let answers = Answers::default();
        Self {
            ui_library: answers.ui_library(),
            router: answers.router(),
            state_management: answers.state_management(),
            data_fetching: answers.data_fetching(),
            form_handling: answers.form_handling(),
        }
    }
}

impl From<DefaultsConfig> for Answers {
    fn from(d: DefaultsConfig) -> Self {
        Answers::builder()
            .ui_library(d.ui_library)
            .router(d.router)
            .state_management(d.state_management)
            .data_fetching(d.data_fetching)
            .form_handling(d.form_handling)
            .build()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub package_manager: PackageManager,
    pub template: ViteTemplate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub on_missing_boilerplate: MissingFilePolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::from_sources(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn from_sources(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration value")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vitestrap.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "vitestrap", "vitestrap")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vitestrap.toml"))
    }

    /// Core options from this config. CLI overrides are applied by the caller.
    pub fn workflow_options(&self) -> WorkflowOptions {
        WorkflowOptions {
            package_manager: self.toolchain.package_manager,
            template: self.toolchain.template,
            missing_files: self.scaffold.on_missing_boilerplate,
            defaults: self.defaults.into(),
        }
    }
}
