//! Non-interactive prompt adapters.
//!
//! The interactive terminal prompter lives in the CLI crate next to
//! `dialoguer`.

mod scripted;

pub use scripted::{DefaultsPrompter, Reply, ScriptedPrompter};
