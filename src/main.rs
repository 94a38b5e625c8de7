use std::io;

use clap::Parser;
use color_eyre::Result;

use rednose::cli::args::Args;
use rednose::cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let stdout = io::stdout();
    commands::run(&args, &mut stdout.lock())
}
