//! Choice collection - asks the five questions and builds [`Answers`].

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Prompter},
    domain::{Answers, Choice, DataFetching, FormHandling, StateManagement, UiLibrary},
    error::VitestrapResult,
};

pub const UI_LIBRARY_PROMPT: &str = "Choose a UI Library:";
pub const ROUTER_PROMPT: &str = "Do you want to install React Router?";
pub const STATE_MANAGEMENT_PROMPT: &str = "Choose a State Management library:";
pub const DATA_FETCHING_PROMPT: &str = "Choose a Data Fetching library:";
pub const FORM_HANDLING_PROMPT: &str = "Choose a Form Handling library:";

/// Asks the fixed question sequence through a [`Prompter`].
///
/// `defaults` pre-selects an option for every question; the user may accept
/// or change it.
pub struct ChoiceCollector<'a> {
    prompter: &'a dyn Prompter,
    defaults: Answers,
}

impl<'a> ChoiceCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter, defaults: Answers) -> Self {
        Self { prompter, defaults }
    }

    /// Ask all five questions in order.
    #[instrument(skip_all)]
    pub fn collect(&self) -> VitestrapResult<Answers> {
        let d = self.defaults;

        let ui_library: UiLibrary = self.select(UI_LIBRARY_PROMPT, d.ui_library())?;
        let router = self.prompter.confirm(ROUTER_PROMPT, d.router())?;
        let state_management: StateManagement =
            self.select(STATE_MANAGEMENT_PROMPT, d.state_management())?;
        let data_fetching: DataFetching = self.select(DATA_FETCHING_PROMPT, d.data_fetching())?;
        let form_handling: FormHandling = self.select(FORM_HANDLING_PROMPT, d.form_handling())?;

        let answers = Answers::builder()
            .ui_library(ui_library)
            .router(router)
            .state_management(state_management)
            .data_fetching(data_fetching)
            .form_handling(form_handling)
            .build();

        debug!(%answers, "Choices collected");
        Ok(answers)
    }

    fn select<C: Choice>(&self, prompt: &str, default: C) -> VitestrapResult<C> {
        let labels: Vec<&str> = C::ALL.iter().map(Choice::label).collect();
        let index = self.prompter.select(prompt, &labels, default.index())?;

        C::ALL.get(index).copied().ok_or_else(|| {
            ApplicationError::InvalidSelection {
                prompt: prompt.into(),
                index,
                options: C::ALL.len(),
            }
            .into()
        })
    }
}
