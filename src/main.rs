use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Scan(cmd) => commands::handle_scan(cmd),
        Commands::Submit { command } => commands::handle_submit(command),
    }
}
