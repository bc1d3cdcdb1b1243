mod bench;
mod cli;
mod menu;

use std::io;

use clap::Parser;
use slot_hashing::Table;
use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::menu::Menu;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("benchmark failed: {0}")]
    Benchmark(String),
}

fn main() -> anyhow::Result<()> {
    let cli: Cli = Cli::parse();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(stdin.lock(), stdout.lock(), Table::create(cli.capacity), cli.verbose);
            menu.run()?;
        }
        Command::Bench { samples } => {
            let stdout = io::stdout();
            bench::run(cli.capacity, samples, &mut stdout.lock())?;
        }
    }

    Ok(())
}
