//! CLI entry point for wave function collapse tile map generation

use clap::Parser;
use tilewave::io::cli::{Cli, FileProcessor};

fn main() -> tilewave::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
