//! Scaffold writer - materializes a [`ScaffoldLayout`] under the project root.
//!
//! Order is fixed: directories, then removals, then writes. Writes always
//! overwrite.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{MissingFilePolicy, ScaffoldLayout},
    error::VitestrapResult,
};

/// Root-relative record of what the writer touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldOutcome {
    pub directories: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
}

/// Applies the folder convention and boilerplate replacements.
pub struct ScaffoldWriter<'a> {
    fs: &'a dyn Filesystem,
    missing_files: MissingFilePolicy,
}

impl<'a> ScaffoldWriter<'a> {
    pub fn new(fs: &'a dyn Filesystem, missing_files: MissingFilePolicy) -> Self {
        Self { fs, missing_files }
    }

    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn write(&self, layout: &ScaffoldLayout, root: &Path) -> VitestrapResult<ScaffoldOutcome> {
        info!("Creating common folder structure and files");
        let mut outcome = ScaffoldOutcome::default();

        for dir in layout.directories() {
            self.fs.create_dir_all(&root.join(dir))?;
            outcome.directories.push(dir.clone());
        }

        for file in layout.removals() {
            let path = root.join(file);
            if !self.fs.exists(&path) {
                match self.missing_files {
                    MissingFilePolicy::Fail => {
                        return Err(ApplicationError::BoilerplateMissing { path }.into());
                    }
                    MissingFilePolicy::Skip => {
                        warn!(file = %file.display(), "Boilerplate file missing, skipping");
                        outcome.skipped.push(file.clone());
                        continue;
                    }
                }
            }
            self.fs.remove_file(&path)?;
            debug!(file = %file.display(), "Removed boilerplate");
            outcome.removed.push(file.clone());
        }

        for file in layout.files() {
            self.fs.write_file(&root.join(&file.path), &file.content)?;
            debug!(file = %file.path.display(), "Wrote file");
            outcome.written.push(file.path.clone());
        }

        Ok(outcome)
    }
}
