//! The folder convention and boilerplate replacements applied on top of the
//! generator output.
//!
//! The layout is data only; the scaffold writer service materializes it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{UiLibrary, ViteTemplate};

/// Directories ensured under the project root.
pub const SCAFFOLD_DIRECTORIES: [&str; 6] = [
    "src/components",
    "src/pages",
    "src/assets",
    "src/hooks",
    "src/utils",
    "src/services",
];

/// Body of `src/index.css` when Tailwind is selected.
pub const TAILWIND_STYLESHEET: &str = "@import \"tailwindcss\";\n\n";

/// Body of `src/index.css` for every other UI library.
pub const GENERIC_STYLESHEET: &str = "body { font-family: sans-serif; }";

const APP_COMPONENT: &str = "import React from 'react'

const App = () => {
  return (
    <div >App</div>
  )
}

export default App";

const HOME_PAGE: &str = "import React from 'react';

const HomePage = () => {
  return <div>Welcome to the Home Page!</div>;
};

export default HomePage;";

/// A file the scaffold writer creates or overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

/// Fixed directories, deletions and writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldLayout {
    directories: Vec<PathBuf>,
    removals: Vec<PathBuf>,
    files: Vec<FileToWrite>,
}

impl ScaffoldLayout {
    /// Build the layout for a template and UI library.
    ///
    /// Only the stylesheet depends on `ui`.
    pub fn new(template: ViteTemplate, ui: UiLibrary) -> Self {
        let ext = template.component_ext();
        let app = PathBuf::from(format!("src/App.{ext}"));

        let directories = SCAFFOLD_DIRECTORIES.iter().map(PathBuf::from).collect();

        let removals = vec![
            PathBuf::from("src/App.css"),
            PathBuf::from("src/assets/react.svg"),
            app.clone(),
        ];

        let files = vec![
            FileToWrite {
                path: app,
                content: APP_COMPONENT.into(),
            },
            FileToWrite {
                path: PathBuf::from("src/index.css"),
                content: stylesheet_for(ui).into(),
            },
            FileToWrite {
                path: PathBuf::from(format!("src/pages/HomePage.{ext}")),
                content: HOME_PAGE.into(),
            },
        ];

        Self {
            directories,
            removals,
            files,
        }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn removals(&self) -> &[PathBuf] {
        &self.removals
    }

    pub fn files(&self) -> &[FileToWrite] {
        &self.files
    }

    /// Content that will be written to `path`, if any.
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path.as_ref())
            .map(|f| f.content.as_str())
    }
}

/// Stylesheet body for a UI library.
pub const fn stylesheet_for(ui: UiLibrary) -> &'static str {
    match ui {
        UiLibrary::TailwindCss => TAILWIND_STYLESHEET,
        UiLibrary::None | UiLibrary::Mui | UiLibrary::Shadcn => GENERIC_STYLESHEET,
    }
}
