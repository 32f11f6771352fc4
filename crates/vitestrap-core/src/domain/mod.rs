//! Core domain layer for vitestrap.
//!
//! This module contains pure business logic with no I/O.
//! Prompting, processes and filesystem access are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or terminal calls
//! - **Immutable entities**: `Answers` has no setters
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    Answers, AnswersBuilder, CommandSpec, FileToWrite, InstallPlan, ProjectName, ScaffoldLayout,
    TailwindVitePatch,
    config_patch::{PLUGINS_MARKER, TAILWIND_IMPORT, TAILWIND_PLUGIN_CALL},
    scaffold_layout::{GENERIC_STYLESHEET, SCAFFOLD_DIRECTORIES, TAILWIND_STYLESHEET, stylesheet_for},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    Choice, DataFetching, FormHandling, MissingFilePolicy, PackageManager, StateManagement,
    UiLibrary, ViteTemplate,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity checks
    // ========================================================================

    #[test]
    fn tailwind_answers_drive_plan_layout_and_patch() {
        let answers = Answers::builder()
            .ui_library(UiLibrary::TailwindCss)
            .router(false)
            .build();

        let plan = InstallPlan::from_answers(&answers);
        assert!(plan.runtime().contains(&"@tailwindcss/vite"));

        let layout = ScaffoldLayout::new(ViteTemplate::React, answers.ui_library());
        assert_eq!(layout.content_of("src/index.css"), Some(TAILWIND_STYLESHEET));

        let patched = TailwindVitePatch
            .apply("vite.config.js", "export default defineConfig({\n  plugins: [react()],\n})\n")
            .unwrap();
        assert!(patched.contains(TAILWIND_IMPORT));
    }

    #[test]
    fn generator_and_install_commands_share_package_manager() {
        let name = ProjectName::new("shop").unwrap();
        let create = CommandSpec::create_vite(PackageManager::Bun, &name, ViteTemplate::React);
        let install = CommandSpec::install(PackageManager::Bun, &["axios"], false).unwrap();
        assert_eq!(create.program(), install.program());
    }

    #[test]
    fn domain_errors_have_suggestions() {
        let err = ProjectName::new("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());

        let err = TailwindVitePatch.apply("vite.config.js", "").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("tailwindcss()")));
    }
}
