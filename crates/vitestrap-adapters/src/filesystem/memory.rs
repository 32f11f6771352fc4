//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use vitestrap_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::ViteTemplate,
    error::VitestrapResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle while the service owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Insert a file and its parent directories.
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) -> VitestrapResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    /// Lay down the files `create vite` produces for `template` under `root`.
    pub fn seed_vite_skeleton(&self, root: &Path, template: ViteTemplate) -> VitestrapResult<()> {
        let ext = template.component_ext();
        let entries = [
            ("package.json".to_string(), SKELETON_PACKAGE_JSON),
            ("index.html".to_string(), SKELETON_INDEX_HTML),
            (template.config_file().to_string(), SKELETON_VITE_CONFIG),
            (format!("src/App.{ext}"), SKELETON_APP),
            (format!("src/main.{ext}"), SKELETON_MAIN),
            ("src/App.css".to_string(), SKELETON_APP_CSS),
            ("src/index.css".to_string(), SKELETON_INDEX_CSS),
            ("src/assets/react.svg".to_string(), SKELETON_SVG),
        ];

        for (relative, content) in entries {
            self.seed_file(root.join(relative), content)?;
        }
        Ok(())
    }

    fn read(&self) -> VitestrapResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StateLockError.into())
    }

    fn write(&self) -> VitestrapResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StateLockError.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> VitestrapResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> VitestrapResult<String> {
        let inner = self.read()?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> VitestrapResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> VitestrapResult<()> {
        let mut inner = self.write()?;
        match inner.files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

const SKELETON_PACKAGE_JSON: &str = r#"{
  "name": "vite-project",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  }
}
"#;

const SKELETON_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

const SKELETON_VITE_CONFIG: &str = "import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

// https://vite.dev/config/
export default defineConfig({
  plugins: [react()],
})
";

const SKELETON_APP: &str = "import './App.css'

function App() {
  return <h1>Vite + React</h1>
}

export default App
";

const SKELETON_MAIN: &str = "import { StrictMode } from 'react'
import { createRoot } from 'react-dom/client'
import './index.css'
import App from './App'

createRoot(document.getElementById('root')).render(
  <StrictMode>
    <App />
  </StrictMode>,
)
";

const SKELETON_APP_CSS: &str = "#root { max-width: 1280px; }\n";

const SKELETON_INDEX_CSS: &str = ":root { line-height: 1.5; }\n";

const SKELETON_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>\n";
