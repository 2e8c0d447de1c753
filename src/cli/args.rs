//! Command-line interface definitions.

use crate::callout::CalloutSeverity;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site configuration and callout tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented docsite.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Resolve and validate the configuration
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the resolved configuration as JSON
    Show {
        #[command(flatten)]
        args: ResolveArgs,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render a single callout
    Callout {
        /// Severity: info, tip, warning, danger, caution, note
        severity: CalloutSeverity,

        /// Content to wrap (read from stdin when omitted)
        content: Option<String>,

        /// Treat content as plain text and escape it
        #[arg(short, long)]
        text: bool,

        /// Print the notice box as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
}

/// Overrides applied on top of the declared configuration.
///
/// Useful for CI/CD deployments where the production URL differs from the
/// one in docsite.toml, without editing the file.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Override `site.url`
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override `site.base_url`
    #[arg(short = 'B', long = "base-url")]
    pub base_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve arguments of commands that load the configuration.
    pub const fn resolve_args(&self) -> Option<&ResolveArgs> {
        match &self.command {
            Commands::Check { args } | Commands::Show { args, .. } => Some(args),
            Commands::Init { .. } | Commands::Callout { .. } => None,
        }
    }

    pub const fn needs_config(&self) -> bool {
        self.resolve_args().is_some()
    }
}
