//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tolgee-toolbox",
    bin_name = "tolgee-toolbox",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Sync local message files with Tolgee",
    long_about = "tolgee-toolbox pushes source message files to Tolgee and pulls \
                  translations back into target files, as configured by \
                  tolgee-toolbox.toml files below the base path.",
    after_help = "EXAMPLES:\n\
        \x20 tolgee-toolbox projects\n\
        \x20 tolgee-toolbox push --base-path ./services\n\
        \x20 TOLGEE_TOOLBOX_API_KEY=tgpak_... tolgee-toolbox pull\n\
        \x20 tolgee-toolbox completions bash > /usr/share/bash-completion/completions/tolgee-toolbox",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download translations into the target files.
    #[command(
        about = "Pull translations from Tolgee",
        after_help = "EXAMPLES:\n\
            \x20 tolgee-toolbox pull\n\
            \x20 tolgee-toolbox pull --project 12"
    )]
    Pull(SyncArgs),

    /// Upload source files through a two-step import.
    #[command(
        about = "Push source files to Tolgee",
        after_help = "EXAMPLES:\n\
            \x20 tolgee-toolbox push\n\
            \x20 tolgee-toolbox -vv push --base-path ./app"
    )]
    Push(SyncArgs),

    /// Upload source files through single-step imports.
    #[command(
        name = "push-single-step",
        about = "Push source files with single-step imports (overrides existing values)"
    )]
    PushSingleStep(SyncArgs),

    /// Show the resolved projects and their local source files.
    #[command(
        visible_alias = "ls",
        about = "List configured projects and discovered source files",
        after_help = "EXAMPLES:\n\
            \x20 tolgee-toolbox projects\n\
            \x20 tolgee-toolbox projects --format json"
    )]
    Projects(ProjectsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tolgee-toolbox completions bash > ~/.local/share/bash-completion/completions/tolgee-toolbox\n\
            \x20 tolgee-toolbox completions zsh  > ~/.zfunc/_tolgee-toolbox\n\
            \x20 tolgee-toolbox completions fish > ~/.config/fish/completions/tolgee-toolbox.fish"
    )]
    Completions(CompletionsArgs),
}

// ── pull / push ───────────────────────────────────────────────────────────────

/// Arguments shared by `pull`, `push` and `push-single-step`.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Only process projects with these Tolgee ids.
    #[arg(
        short = 'p',
        long = "project",
        value_name = "ID",
        help = "Restrict to a Tolgee project id (repeatable)"
    )]
    pub projects: Vec<u64>,
}

// ── projects ──────────────────────────────────────────────────────────────────

/// Arguments for `tolgee-toolbox projects`.
#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Skip source file discovery.
    #[arg(long = "no-files", help = "Do not list discovered source files")]
    pub no_files: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `projects` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable listing.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tolgee-toolbox completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parse_pull_command() {
        let cli = Cli::parse_from(["tolgee-toolbox", "pull"]);
        assert!(matches!(cli.command, Commands::Pull(_)));
        assert_eq!(cli.global.base_path, Path::new("."));
    }

    #[test]
    fn project_filter_is_repeatable() {
        let cli = Cli::parse_from(["tolgee-toolbox", "push", "-p", "3", "--project", "9"]);
        match cli.command {
            Commands::Push(args) => assert_eq!(args.projects, vec![3, 9]),
            other => panic!("expected push, got {other:?}"),
        }
    }

    #[test]
    fn single_step_uses_kebab_name() {
        let cli = Cli::parse_from(["tolgee-toolbox", "push-single-step"]);
        assert!(matches!(cli.command, Commands::PushSingleStep(_)));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tolgee-toolbox",
            "projects",
            "--base-path",
            "/srv/app",
            "-vv",
            "--format",
            "json",
        ]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.base_path, Path::new("/srv/app"));
        match cli.command {
            Commands::Projects(args) => assert_eq!(args.format, ListFormat::Json),
            other => panic!("expected projects, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["tolgee-toolbox", "--quiet", "--verbose", "pull"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_project_id_is_rejected() {
        let result = Cli::try_parse_from(["tolgee-toolbox", "pull", "--project", "abc"]);
        assert!(result.is_err());
    }
}
