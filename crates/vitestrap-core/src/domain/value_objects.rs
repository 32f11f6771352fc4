//! Domain value objects: the answer enums and the toolchain settings
//! (`PackageManager`, `ViteTemplate`, `MissingFilePolicy`).
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, their prompt labels, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `label` and `FromStr` arms here
//! 3. Append it to `ALL` (prompt order)
//! 4. Map it to packages in `entities/install_plan.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An option the user can pick from a single-select prompt.
///
/// `ALL` is the prompt order; `label` is what the user sees.
pub trait Choice: Copy + PartialEq + fmt::Display + 'static {
    /// Every option, in the order it is presented.
    const ALL: &'static [Self];

    /// Human-readable prompt label.
    fn label(&self) -> &'static str;

    /// Position of `self` within [`Self::ALL`].
    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

// ── UiLibrary ─────────────────────────────────────────────────────────────────

/// Styling / component library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "lowercase")]
pub enum UiLibrary {
    #[default]
    None,
    #[serde(rename = "tailwindcss")]
    TailwindCss,
    Mui,
    Shadcn,
}

impl UiLibrary {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TailwindCss => "tailwindcss",
            Self::Mui => "mui",
            Self::Shadcn => "shadcn",
        }
    }
}

impl Choice for UiLibrary {
    const ALL: &'static [Self] = &[Self::None, Self::TailwindCss, Self::Mui, Self::Shadcn];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::TailwindCss => "Tailwind CSS",
            Self::Mui => "MUI (Material UI)",
            Self::Shadcn => "Shadcn UI",
        }
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiLibrary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "tailwindcss" | "tailwind" => Ok(Self::TailwindCss),
            "mui" | "material-ui" => Ok(Self::Mui),
            "shadcn" | "shadcn-ui" => Ok(Self::Shadcn),
            other => Err(DomainError::InvalidChoice {
                field: "UI library",
                value: other.into(),
            }),
        }
    }
}

// ── StateManagement ───────────────────────────────────────────────────────────

/// Client-side state library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "kebab-case")]
pub enum StateManagement {
    #[default]
    None,
    Zustand,
    ReduxToolkit,
}

impl StateManagement {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Zustand => "zustand",
            Self::ReduxToolkit => "redux-toolkit",
        }
    }
}

impl Choice for StateManagement {
    const ALL: &'static [Self] = &[Self::None, Self::Zustand, Self::ReduxToolkit];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Zustand => "Zustand",
            Self::ReduxToolkit => "Redux Toolkit",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "zustand" => Ok(Self::Zustand),
            "redux-toolkit" | "redux" | "rtk" => Ok(Self::ReduxToolkit),
            other => Err(DomainError::InvalidChoice {
                field: "state management library",
                value: other.into(),
            }),
        }
    }
}

// ── DataFetching ──────────────────────────────────────────────────────────────

/// HTTP / data-fetching layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "kebab-case")]
pub enum DataFetching {
    #[default]
    None,
    Axios,
    ReactQuery,
}

impl DataFetching {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Axios => "axios",
            Self::ReactQuery => "react-query",
        }
    }
}

impl Choice for DataFetching {
    const ALL: &'static [Self] = &[Self::None, Self::Axios, Self::ReactQuery];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Axios => "Axios",
            Self::ReactQuery => "React Query",
        }
    }
}

impl fmt::Display for DataFetching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFetching {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "axios" => Ok(Self::Axios),
            "react-query" | "tanstack-query" => Ok(Self::ReactQuery),
            other => Err(DomainError::InvalidChoice {
                field: "data fetching library",
                value: other.into(),
            }),
        }
    }
}

// ── FormHandling ──────────────────────────────────────────────────────────────

/// Form-state library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "kebab-case")]
pub enum FormHandling {
    #[default]
    None,
    ReactHookForm,
    Formik,
}

impl FormHandling {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ReactHookForm => "react-hook-form",
            Self::Formik => "formik",
        }
    }
}

impl Choice for FormHandling {
    const ALL: &'static [Self] = &[Self::None, Self::ReactHookForm, Self::Formik];

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::ReactHookForm => "React Hook Form",
            Self::Formik => "Formik",
        }
    }
}

impl fmt::Display for FormHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormHandling {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "react-hook-form" | "rhf" => Ok(Self::ReactHookForm),
            "formik" => Ok(Self::Formik),
            other => Err(DomainError::InvalidChoice {
                field: "form handling library",
                value: other.into(),
            }),
        }
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// The JavaScript package manager that drives generation and installs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Executable name.
    pub const fn program(&self) -> &'static str {
        self.as_str()
    }

    /// Subcommand that adds packages to `package.json`.
    pub const fn add_verb(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }

    /// Flag marking an install as development-only.
    pub const fn dev_flag(&self) -> &'static str {
        match self {
            Self::Npm => "--save-dev",
            Self::Pnpm | Self::Yarn | Self::Bun => "-D",
        }
    }

    /// Prefix used to run a package binary once without installing it.
    pub const fn exec_prefix(&self) -> &'static str {
        match self {
            Self::Npm => "npx",
            Self::Pnpm => "pnpm dlx",
            Self::Yarn => "yarn dlx",
            Self::Bun => "bunx",
        }
    }

    /// Shell line that starts the dev server.
    pub fn dev_script(&self) -> String {
        format!("{} run dev", self.program())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            "yarn" => Ok(Self::Yarn),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::InvalidChoice {
                field: "package manager",
                value: other.into(),
            }),
        }
    }
}

// ── ViteTemplate ──────────────────────────────────────────────────────────────

/// The `create vite` template the skeleton is generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "kebab-case")]
pub enum ViteTemplate {
    #[default]
    React,
    ReactTs,
}

impl ViteTemplate {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::ReactTs => "react-ts",
        }
    }

    /// Extension of component source files.
    pub const fn component_ext(&self) -> &'static str {
        match self {
            Self::React => "jsx",
            Self::ReactTs => "tsx",
        }
    }

    /// Name of the generated Vite configuration file.
    pub const fn config_file(&self) -> &'static str {
        match self {
            Self::React => "vite.config.js",
            Self::ReactTs => "vite.config.ts",
        }
    }
}

impl fmt::Display for ViteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViteTemplate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "react-ts" => Ok(Self::ReactTs),
            other => Err(DomainError::InvalidChoice {
                field: "template",
                value: other.into(),
            }),
        }
    }
}

// ── MissingFilePolicy ─────────────────────────────────────────────────────────

/// What the scaffold writer does when a boilerplate file it must delete is
/// already gone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "lowercase")]
pub enum MissingFilePolicy {
    /// Abort the run.
    #[default]
    Fail,
    /// Log a warning and carry on.
    Skip,
}

impl MissingFilePolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for MissingFilePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingFilePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(DomainError::InvalidChoice {
                field: "missing boilerplate policy",
                value: other.into(),
            }),
        }
    }
}

// Config files and env vars go through the same lenient parsers.
macro_rules! deserialize_via_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = DomainError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.trim().parse()
                }
            }
        )+
    };
}

deserialize_via_from_str!(
    UiLibrary,
    StateManagement,
    DataFetching,
    FormHandling,
    PackageManager,
    ViteTemplate,
    MissingFilePolicy,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(UiLibrary::TailwindCss.to_string(), "tailwindcss");
        assert_eq!(StateManagement::ReduxToolkit.to_string(), "redux-toolkit");
        assert_eq!(DataFetching::ReactQuery.to_string(), "react-query");
        assert_eq!(FormHandling::ReactHookForm.to_string(), "react-hook-form");
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(
            "TailwindCSS".parse::<UiLibrary>().unwrap(),
            UiLibrary::TailwindCss
        );
        assert_eq!(
            "Redux-Toolkit".parse::<StateManagement>().unwrap(),
            StateManagement::ReduxToolkit
        );
    }

    #[test]
    fn from_str_unknown_errors() {
        assert!("bootstrap".parse::<UiLibrary>().is_err());
        assert!("mobx".parse::<StateManagement>().is_err());
        assert!("swr".parse::<DataFetching>().is_err());
        assert!("".parse::<FormHandling>().is_err());
        assert!("deno".parse::<PackageManager>().is_err());
    }

    #[test]
    fn every_option_round_trips_through_display() {
        for ui in UiLibrary::ALL {
            assert_eq!(ui.to_string().parse::<UiLibrary>().unwrap(), *ui);
        }
        for sm in StateManagement::ALL {
            assert_eq!(sm.to_string().parse::<StateManagement>().unwrap(), *sm);
        }
    }

    #[test]
    fn defaults_are_none() {
        assert_eq!(UiLibrary::default(), UiLibrary::None);
        assert_eq!(StateManagement::default(), StateManagement::None);
        assert_eq!(DataFetching::default(), DataFetching::None);
        assert_eq!(FormHandling::default(), FormHandling::None);
    }

    #[test]
    fn none_is_first_in_prompt_order() {
        assert_eq!(UiLibrary::None.index(), 0);
        assert_eq!(StateManagement::None.index(), 0);
        assert_eq!(FormHandling::Formik.index(), 2);
        assert_eq!(UiLibrary::Shadcn.index(), 3);
    }

    #[test]
    fn labels_match_prompt_text() {
        assert_eq!(UiLibrary::Mui.label(), "MUI (Material UI)");
        assert_eq!(DataFetching::ReactQuery.label(), "React Query");
    }

    #[test]
    fn package_manager_verbs() {
        assert_eq!(PackageManager::Npm.add_verb(), "install");
        assert_eq!(PackageManager::Pnpm.add_verb(), "add");
        assert_eq!(PackageManager::Npm.dev_flag(), "--save-dev");
        assert_eq!(PackageManager::Bun.exec_prefix(), "bunx");
        assert_eq!(PackageManager::Yarn.dev_script(), "yarn run dev");
    }

    #[test]
    fn template_file_names() {
        assert_eq!(ViteTemplate::React.component_ext(), "jsx");
        assert_eq!(ViteTemplate::ReactTs.config_file(), "vite.config.ts");
        assert_eq!("react-ts".parse::<ViteTemplate>().unwrap(), ViteTemplate::ReactTs);
    }

    #[test]
    fn serde_uses_kebab_case_values() {
        let json = serde_json::to_string(&StateManagement::ReduxToolkit).unwrap();
        assert_eq!(json, "\"redux-toolkit\"");
        let ui: UiLibrary = serde_json::from_str("\"tailwindcss\"").unwrap();
        assert_eq!(ui, UiLibrary::TailwindCss);
    }

    #[test]
    fn deserialize_accepts_any_case_and_aliases() {
        let ui: UiLibrary = serde_json::from_str("\"TailwindCSS\"").unwrap();
        assert_eq!(ui, UiLibrary::TailwindCss);
        let pm: PackageManager = serde_json::from_str("\"PNPM\"").unwrap();
        assert_eq!(pm, PackageManager::Pnpm);
        let sm: StateManagement = serde_json::from_str("\"rtk\"").unwrap();
        assert_eq!(sm, StateManagement::ReduxToolkit);
        let policy: MissingFilePolicy = serde_json::from_str("\"Skip\"").unwrap();
        assert_eq!(policy, MissingFilePolicy::Skip);
    }

    #[test]
    fn deserialize_reports_unknown_choice() {
        let err = serde_json::from_str::<DataFetching>("\"swr\"").unwrap_err();
        assert!(err.to_string().contains("Unknown data fetching library option 'swr'"));
    }
}
