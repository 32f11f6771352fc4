//! Application layer for vitestrap.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectService and one service per step)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Package mapping, layout and patch rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ChoiceCollector, ConfigureOutcome, DependencyInstaller, GeneratorInvoker, Guidance,
    PostInstallConfigurator, ProjectRoot, ProjectService, ScaffoldOutcome, ScaffoldWriter,
    WorkflowOptions, WorkflowPlan, WorkflowReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, Progress, Prompter, WorkflowStep};

pub use error::ApplicationError;
