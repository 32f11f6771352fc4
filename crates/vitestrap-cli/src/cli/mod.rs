//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums. No business logic lives here.

use clap::{Parser, ValueEnum};

use vitestrap_core::domain::{PackageManager, ViteTemplate};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "vitestrap",
    bin_name = "vitestrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bootstrap a React + Vite project with your favourite libraries",
    long_about = "vitestrap runs `create vite`, installs the UI, routing, state, \
                  data-fetching and form libraries you pick, wires Tailwind into \
                  the Vite config, and lays out a conventional src/ tree.",
    after_help = "EXAMPLES:\n\
        \x20 vitestrap my-app\n\
        \x20 vitestrap my-app --yes\n\
        \x20 vitestrap my-app --package-manager pnpm --template react-ts\n\
        \x20 vitestrap my-app --dry-run --yes --output-format json",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Name of the directory to create in the current directory.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: String,

    /// Skip the questions and use the configured defaults.
    #[arg(short = 'y', long = "yes", help = "Accept all defaults without prompting")]
    pub yes: bool,

    /// Ask the questions, print what would run, change nothing.
    #[arg(long = "dry-run", help = "Show the plan without running anything")]
    pub dry_run: bool,

    /// Overrides `[toolchain] package_manager`.
    #[arg(
        long = "package-manager",
        value_name = "PM",
        value_enum,
        help = "Package manager used to generate and install"
    )]
    pub package_manager: Option<PackageManagerArg>,

    /// Overrides `[toolchain] template`.
    #[arg(
        long = "template",
        value_name = "TEMPLATE",
        value_enum,
        help = "create-vite template"
    )]
    pub template: Option<TemplateArg>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackageManagerArg {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
            PackageManagerArg::Bun => PackageManager::Bun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateArg {
    /// JavaScript + JSX.
    React,
    /// TypeScript + TSX.
    #[value(name = "react-ts", alias = "ts")]
    ReactTs,
}

impl From<TemplateArg> for ViteTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::React => ViteTemplate::React,
            TemplateArg::ReactTs => ViteTemplate::ReactTs,
        }
    }
}
