//! Command-line entry point for `cuke`.

use std::process::ExitCode;

use clap::Parser;
use cuke::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match CommandContext::load(cli.report) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match &cli.command {
        Commands::Search(cmd) => commands::search::run(&ctx, cmd),
        Commands::Ls(cmd) => commands::ls::run(&ctx, cmd),
        Commands::Summary(cmd) => commands::summary::run(&ctx, cmd),
    }
}
