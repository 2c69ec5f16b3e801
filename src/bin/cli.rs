// src/bin/cli.rs
use clap::Parser;
use iggy_wiki::cli::{ self, Cli };

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _ = iggy_wiki::log::init();
    cli::run(Cli::parse())
}
