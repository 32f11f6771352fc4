//! Application services - orchestrate use cases.
//!
//! One service per workflow step, plus [`ProjectService`] which runs them in
//! order.

pub mod choice_collector;
pub mod configurator;
pub mod generator;
pub mod installer;
pub mod project_root;
pub mod project_service;
pub mod scaffold_writer;

pub use choice_collector::ChoiceCollector;
pub use configurator::{ConfigureOutcome, Guidance, PostInstallConfigurator};
pub use generator::GeneratorInvoker;
pub use installer::DependencyInstaller;
pub use project_root::ProjectRoot;
pub use project_service::{ProjectService, WorkflowOptions, WorkflowPlan, WorkflowReport};
pub use scaffold_writer::{ScaffoldOutcome, ScaffoldWriter};
