//! Post-install configuration for UI libraries that need source wiring.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{PackageManager, TailwindVitePatch, UiLibrary, ViteTemplate},
    error::VitestrapResult,
};

/// A manual step the user has to perform after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub message: String,
    pub command: String,
}

/// What the configurator did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigureOutcome {
    /// Root-relative paths of patched files.
    pub patched: Vec<PathBuf>,
    pub guidance: Vec<Guidance>,
}

/// Wires the chosen UI library into the generated project.
pub struct PostInstallConfigurator<'a> {
    fs: &'a dyn Filesystem,
    package_manager: PackageManager,
    template: ViteTemplate,
}

impl<'a> PostInstallConfigurator<'a> {
    pub fn new(
        fs: &'a dyn Filesystem,
        package_manager: PackageManager,
        template: ViteTemplate,
    ) -> Self {
        Self {
            fs,
            package_manager,
            template,
        }
    }

    /// Root-relative file that [`Self::configure`] would patch, if any.
    pub fn patch_target(&self, ui: UiLibrary) -> Option<PathBuf> {
        match ui {
            UiLibrary::TailwindCss => Some(PathBuf::from(self.template.config_file())),
            UiLibrary::None | UiLibrary::Mui | UiLibrary::Shadcn => None,
        }
    }

    /// Manual steps for `ui`, if any.
    pub fn guidance(&self, ui: UiLibrary) -> Vec<Guidance> {
        match ui {
            UiLibrary::Shadcn => vec![Guidance {
                message: "Shadcn UI requires an interactive setup. \
                          Please run the following command inside your project:"
                    .into(),
                command: format!("{} shadcn-ui@latest init", self.package_manager.exec_prefix()),
            }],
            UiLibrary::None | UiLibrary::TailwindCss | UiLibrary::Mui => Vec::new(),
        }
    }

    /// Apply source edits for `ui` under `root`.
    #[instrument(skip_all, fields(ui = %ui))]
    pub fn configure(&self, ui: UiLibrary, root: &Path) -> VitestrapResult<ConfigureOutcome> {
        let mut outcome = ConfigureOutcome {
            guidance: self.guidance(ui),
            ..ConfigureOutcome::default()
        };

        if let Some(relative) = self.patch_target(ui) {
            info!(file = %relative.display(), "Configuring Tailwind CSS for Vite");
            self.patch_tailwind(&root.join(&relative), &relative)
                .inspect_err(|e| error!(error = %e, "Failed to configure Tailwind CSS"))?;
            outcome.patched.push(relative);
        }

        Ok(outcome)
    }

    fn patch_tailwind(&self, path: &Path, relative: &Path) -> VitestrapResult<()> {
        let source = self.fs.read_to_string(path)?;
        let patched = TailwindVitePatch.apply(&relative.display().to_string(), &source)?;
        self.fs.write_file(path, &patched)
    }
}
