//! Mapping from [`Answers`] to npm package names.

use serde::Serialize;

use crate::domain::{
    entities::answers::Answers,
    value_objects::{DataFetching, FormHandling, StateManagement, UiLibrary},
};

/// Packages to install, split into the runtime and development batches.
///
/// Both lists are ordered (field order of [`Answers`]) and free of
/// duplicates. Either may be empty, in which case no install runs for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    runtime: Vec<&'static str>,
    dev: Vec<&'static str>,
}

impl InstallPlan {
    /// Derive the plan from the user's answers.
    pub fn from_answers(answers: &Answers) -> Self {
        let mut plan = Self::default();

        plan.add_runtime(ui_packages(answers.ui_library()));
        if answers.router() {
            plan.add_runtime(&["react-router-dom"]);
        }
        plan.add_runtime(state_packages(answers.state_management()));
        plan.add_runtime(data_packages(answers.data_fetching()));
        plan.add_runtime(form_packages(answers.form_handling()));

        // No current choice maps to a dev-only package; the batch exists so
        // the installer keeps its two-invocation shape.
        plan
    }

    pub fn runtime(&self) -> &[&'static str] {
        &self.runtime
    }

    pub fn dev(&self) -> &[&'static str] {
        &self.dev
    }

    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }

    fn add_runtime(&mut self, packages: &[&'static str]) {
        push_unique(&mut self.runtime, packages);
    }
}

fn push_unique(list: &mut Vec<&'static str>, packages: &[&'static str]) {
    for pkg in packages {
        if !list.contains(pkg) {
            list.push(pkg);
        }
    }
}

const fn ui_packages(ui: UiLibrary) -> &'static [&'static str] {
    match ui {
        UiLibrary::TailwindCss => &["tailwindcss", "@tailwindcss/vite"],
        UiLibrary::Mui => &["@mui/material", "@emotion/react", "@emotion/styled"],
        // shadcn ships its own interactive init; nothing to install up front.
        UiLibrary::Shadcn | UiLibrary::None => &[],
    }
}

const fn state_packages(state: StateManagement) -> &'static [&'static str] {
    match state {
        StateManagement::Zustand => &["zustand"],
        StateManagement::ReduxToolkit => &["@reduxjs/toolkit", "react-redux"],
        StateManagement::None => &[],
    }
}

const fn data_packages(data: DataFetching) -> &'static [&'static str] {
    match data {
        DataFetching::Axios => &["axios"],
        DataFetching::ReactQuery => &["@tanstack/react-query"],
        DataFetching::None => &[],
    }
}

const fn form_packages(forms: FormHandling) -> &'static [&'static str] {
    match forms {
        FormHandling::ReactHookForm => &["react-hook-form"],
        FormHandling::Formik => &["formik"],
        FormHandling::None => &[],
    }
}
