//! CLI entry point for the map coloring solver

use clap::Parser;
use mapcolor::io::cli::{Cli, MapProcessor};

fn main() -> mapcolor::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut processor = MapProcessor::new(cli);
    processor.process()
}
