use anyhow::Result;
use clap::Parser;
use renombra_core::{OutputFormatter, RenombraError, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod check;
mod cli;
mod logging;
mod run;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    logging::init(cli.debug);

    let result = match cli.command {
        Commands::Run {
            directory,
            dry_run,
            skip_normalize,
            output,
            quiet,
        } => run::handle_run(&directory, dry_run, skip_normalize, output, quiet, use_color),

        Commands::Check { names, output } => check::handle_check(&names, output),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");

            let exit_code = if matches!(
                e.downcast_ref::<RenombraError>(),
                Some(RenombraError::NotADirectory(_))
            ) {
                2 // Invalid input
            } else {
                3 // Filesystem or internal error
            };

            process::exit(exit_code);
        },
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "renombra".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()).trim_end());
    Ok(())
}
