//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `vitestrap-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CommandRunner`: External processes (generator, package manager)
//!   - `Prompter`: Interactive questions
//!   - `Progress`: Step announcements
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, Filesystem, Progress, Prompter, WorkflowStep};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
