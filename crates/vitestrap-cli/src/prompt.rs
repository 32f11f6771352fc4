//! Terminal prompter backed by `dialoguer`.

use std::io;

use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use tracing::debug;

use vitestrap_core::{
    application::{ApplicationError, ports::Prompter},
    error::{VitestrapError, VitestrapResult},
};

/// Arrow-key selects and y/n confirms. Esc or Ctrl-C cancels the run.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> VitestrapResult<usize> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?;

        debug!(prompt, ?choice, "Selected");
        choice.ok_or_else(|| ApplicationError::Cancelled.into())
    }

    fn confirm(&self, prompt: &str, default: bool) -> VitestrapResult<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(map_prompt_error)?;

        debug!(prompt, ?answer, "Confirmed");
        answer.ok_or_else(|| ApplicationError::Cancelled.into())
    }
}

fn map_prompt_error(err: dialoguer::Error) -> VitestrapError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            ApplicationError::Cancelled.into()
        }
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}
