//! Raman SPC command-line host.
//!
//! Types and command handlers behind the `raman-spc` binary: argument
//! parsing, configuration precedence, and the `convert`/`inspect` commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use cli::{Cli, Commands};

/// Dispatch a parsed [`Cli`] to its command handler.
pub fn run(cli: Cli) -> error::CliResult<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            file,
            base,
            builder,
            output,
            engine,
        } => {
            let config = config::resolve(config_path, &engine, builder)?;
            let base = config::base_identifier(&file, base.as_deref(), &config.identifier)?;
            commands::convert::run(&file, &base, output.as_deref(), config, cli.quiet)
        }

        Commands::Inspect { file, engine } => {
            let config = config::resolve(config_path, &engine, None)?;
            commands::inspect::run(&file, &config)
        }
    }
}
