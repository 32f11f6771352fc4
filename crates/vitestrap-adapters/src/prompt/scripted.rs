//! Prompters that answer without a terminal.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tracing::debug;
use vitestrap_core::{
    application::{ApplicationError, ports::Prompter},
    error::VitestrapResult,
};

/// Accepts every pre-selected default. Backs `--yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> VitestrapResult<usize> {
        debug!(prompt, choice = ?items.get(default), "Using default");
        Ok(default)
    }

    fn confirm(&self, prompt: &str, default: bool) -> VitestrapResult<bool> {
        debug!(prompt, default, "Using default");
        Ok(default)
    }
}

/// A canned answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Select(usize),
    Confirm(bool),
    /// Take whatever default the question offers.
    Default,
    /// Behave like the user pressed Esc.
    Cancel,
}

/// Replays a queue of replies and records each prompt it was shown.
///
/// Running out of replies, or a reply of the wrong kind, fails with
/// `PromptFailed`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            asked: Arc::default(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    fn next(&self, prompt: &str) -> VitestrapResult<Reply> {
        self.asked
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .push(prompt.to_string());

        self.replies
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?
            .pop_front()
            .ok_or_else(|| {
                ApplicationError::PromptFailed {
                    reason: format!("no scripted reply for '{prompt}'"),
                }
                .into()
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, _items: &[&str], default: usize) -> VitestrapResult<usize> {
        match self.next(prompt)? {
            Reply::Select(index) => Ok(index),
            Reply::Default => Ok(default),
            Reply::Cancel => Err(ApplicationError::Cancelled.into()),
            Reply::Confirm(_) => Err(mismatch(prompt)),
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> VitestrapResult<bool> {
        match self.next(prompt)? {
            Reply::Confirm(value) => Ok(value),
            Reply::Default => Ok(default),
            Reply::Cancel => Err(ApplicationError::Cancelled.into()),
            Reply::Select(_) => Err(mismatch(prompt)),
        }
    }
}

fn mismatch(prompt: &str) -> vitestrap_core::error::VitestrapError {
    ApplicationError::PromptFailed {
        reason: format!("scripted reply has the wrong kind for '{prompt}'"),
    }
    .into()
}
