//! The `Answers` record and its builder.
//!
//! `Answers` is produced once by the choice collector and read by every
//! downstream step. Fields are private and there are no setters; the only
//! way to get a different record is to build a new one.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DataFetching, FormHandling, StateManagement, UiLibrary};

/// The user's five choices.
///
/// Every field has a default (`none`, or `true` for the router), so a record
/// is always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    ui_library: UiLibrary,
    router: bool,
    state_management: StateManagement,
    data_fetching: DataFetching,
    form_handling: FormHandling,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            ui_library: UiLibrary::default(),
            router: true,
            state_management: StateManagement::default(),
            data_fetching: DataFetching::default(),
            form_handling: FormHandling::default(),
        }
    }
}

impl Answers {
    /// Start building from the defaults.
    pub fn builder() -> AnswersBuilder {
        AnswersBuilder::new()
    }

    pub const fn ui_library(&self) -> UiLibrary {
        self.ui_library
    }
    pub const fn router(&self) -> bool {
        self.router
    }
    pub const fn state_management(&self) -> StateManagement {
        self.state_management
    }
    pub const fn data_fetching(&self) -> DataFetching {
        self.data_fetching
    }
    pub const fn form_handling(&self) -> FormHandling {
        self.form_handling
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ui={} router={} state={} data={} forms={}",
            self.ui_library,
            self.router,
            self.state_management,
            self.data_fetching,
            self.form_handling
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Answers`]. Unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct AnswersBuilder {
    inner: Answers,
}

impl AnswersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every field from an existing record.
    pub fn from_answers(answers: Answers) -> Self {
        Self { inner: answers }
    }

    pub fn ui_library(mut self, value: UiLibrary) -> Self {
        self.inner.ui_library = value;
        self
    }

    pub fn router(mut self, value: bool) -> Self {
        self.inner.router = value;
        self
    }

    pub fn state_management(mut self, value: StateManagement) -> Self {
        self.inner.state_management = value;
        self
    }

    pub fn data_fetching(mut self, value: DataFetching) -> Self {
        self.inner.data_fetching = value;
        self
    }

    pub fn form_handling(mut self, value: FormHandling) -> Self {
        self.inner.form_handling = value;
        self
    }

    pub fn build(self) -> Answers {
        self.inner
    }
}
