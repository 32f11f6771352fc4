//! Project root resolution.
//!
//! The root is computed once from the base directory and the project name
//! and then passed explicitly to every later step. Nothing here changes the
//! process working directory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ProjectName,
    error::VitestrapResult,
};

/// Absolute path of the project being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// `base_dir/name`. `base_dir` is expected to be absolute.
    pub fn resolve(base_dir: &Path, name: &ProjectName) -> Self {
        Self(base_dir.join(name.as_str()))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve a root-relative path.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.0.join(relative)
    }

    /// Fail with `ProjectExists` if the directory is already there.
    pub fn ensure_vacant(&self, fs: &dyn Filesystem) -> VitestrapResult<()> {
        if fs.exists(&self.0) {
            return Err(ApplicationError::ProjectExists {
                path: self.0.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Fail fast with `ProjectRootMissing` if the generator did not create
    /// the directory.
    pub fn ensure_present(&self, fs: &dyn Filesystem) -> VitestrapResult<()> {
        if !fs.exists(&self.0) {
            return Err(ApplicationError::ProjectRootMissing {
                path: self.0.clone(),
            }
            .into());
        }
        debug!(root = %self.0.display(), "Project root present");
        Ok(())
    }
}
