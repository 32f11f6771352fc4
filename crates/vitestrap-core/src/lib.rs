//! vitestrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the vitestrap
//! React project bootstrapper, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vitestrap-cli (CLI)            │
//! │   (clap, dialoguer prompter, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectService → collector, generator, │
//! │  installer, configurator, writer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Prompter, CommandRunner, Fs)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   vitestrap-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemCommandRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Answers, InstallPlan, ScaffoldLayout)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vitestrap_core::prelude::*;
//!
//! let service = ProjectService::new(prompter, runner, filesystem, WorkflowOptions::default());
//! let name = ProjectName::new("my-app")?;
//! let report = service.create(&name, &std::env::current_dir()?)?;
//! println!("cd {}", report.project);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectService, WorkflowOptions, WorkflowPlan, WorkflowReport,
        ports::{CommandRunner, Filesystem, Progress, Prompter, WorkflowStep},
    };
    pub use crate::domain::{
        Answers, CommandSpec, DataFetching, FormHandling, InstallPlan, MissingFilePolicy,
        PackageManager, ProjectName, ScaffoldLayout, StateManagement, UiLibrary, ViteTemplate,
    };
    pub use crate::error::{VitestrapError, VitestrapResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
