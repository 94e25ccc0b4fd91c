//! rubrix CLI — awesome-list index extraction tool.
//!
//! Turns an awesome-list markdown document into a human-readable listing
//! and a lossless JSON export of its rubric/entry tree.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
