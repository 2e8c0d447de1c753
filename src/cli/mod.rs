//! Command-line interface module.

mod args;
pub mod callout;
pub mod check;
pub mod init;
pub mod show;

pub use args::{Cli, Commands, ResolveArgs};

use crate::{
    config::{SiteConfig, init_config},
    logger,
};
use anyhow::Result;

/// Run a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    if let Some(args) = cli.resolve_args() {
        logger::set_verbose(args.verbose);
    }

    match &cli.command {
        Commands::Init { name, dry } => init::new_site(name.as_deref(), *dry),
        Commands::Check { .. } => {
            let config = init_config(SiteConfig::load(cli)?)?;
            check::check_site(&config)
        }
        Commands::Show { pretty, .. } => {
            let config = init_config(SiteConfig::load(cli)?)?;
            show::show_config(&config, *pretty)
        }
        Commands::Callout {
            severity,
            content,
            text,
            json,
        } => callout::run_callout(*severity, content.as_deref(), *text, *json),
    }
}
