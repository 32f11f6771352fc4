//! External command descriptions.
//!
//! A [`CommandSpec`] is plain data: which program to run with which
//! arguments. Running it is the job of the `CommandRunner` port.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::project_name::ProjectName,
    value_objects::{PackageManager, ViteTemplate},
};

/// A program plus its argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `create vite` invocation for a new project.
    ///
    /// npm needs the `--` separator so `--template` reaches the generator
    /// rather than npm itself.
    pub fn create_vite(pm: PackageManager, name: &ProjectName, template: ViteTemplate) -> Self {
        let mut args = vec!["create".to_string()];
        match pm {
            PackageManager::Npm => {
                args.push("vite@latest".into());
                args.push(name.to_string());
                args.push("--".into());
            }
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => {
                args.push("vite".into());
                args.push(name.to_string());
            }
        }
        args.push("--template".into());
        args.push(template.as_str().into());

        Self {
            program: pm.program().into(),
            args,
        }
    }

    /// Install invocation for one batch. `None` when `packages` is empty.
    pub fn install(pm: PackageManager, packages: &[&str], dev: bool) -> Option<Self> {
        if packages.is_empty() {
            return None;
        }

        let mut args = vec![pm.add_verb().to_string()];
        if dev {
            args.push(pm.dev_flag().into());
        }
        args.extend(packages.iter().map(|p| p.to_string()));

        Some(Self {
            program: pm.program().into(),
            args,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ProjectName {
        ProjectName::new("my-app").unwrap()
    }

    #[test]
    fn npm_create_uses_separator() {
        let cmd = CommandSpec::create_vite(PackageManager::Npm, &name(), ViteTemplate::React);
        assert_eq!(
            cmd.to_string(),
            "npm create vite@latest my-app -- --template react"
        );
    }

    #[test]
    fn pnpm_create_has_no_separator() {
        let cmd = CommandSpec::create_vite(PackageManager::Pnpm, &name(), ViteTemplate::ReactTs);
        assert_eq!(cmd.to_string(), "pnpm create vite my-app --template react-ts");
    }

    #[test]
    fn install_runtime_batch() {
        let cmd = CommandSpec::install(PackageManager::Npm, &["axios", "zustand"], false).unwrap();
        assert_eq!(cmd.program(), "npm");
        assert_eq!(cmd.args(), &["install", "axios", "zustand"]);
    }

    #[test]
    fn install_dev_batch_adds_flag() {
        let cmd = CommandSpec::install(PackageManager::Yarn, &["vitest"], true).unwrap();
        assert_eq!(cmd.to_string(), "yarn add -D vitest");
    }

    #[test]
    fn empty_batch_yields_no_command() {
        assert!(CommandSpec::install(PackageManager::Npm, &[], false).is_none());
        assert!(CommandSpec::install(PackageManager::Npm, &[], true).is_none());
    }
}
