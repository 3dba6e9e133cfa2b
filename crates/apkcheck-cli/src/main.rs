//! Apkcheck CLI - Command-line utility for structural verification of
//! Android APKs.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.preview);

    commands::inspect::execute(&cli, &*formatter)
}
