//! Infrastructure adapters for vitestrap.
//!
//! This crate implements the ports defined in `vitestrap-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, SystemCommandRunner};
pub use prompt::{DefaultsPrompter, ScriptedPrompter};
