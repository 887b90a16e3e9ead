//! CLI entry point for the diagonal-tile pattern renderer

use clap::Parser;
use tilepattern::io::cli::{Cli, PatternExporter};

fn main() -> tilepattern::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    PatternExporter::new(cli).run()?;
    Ok(())
}
