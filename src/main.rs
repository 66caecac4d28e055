use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of dispatch lines to generate
    ///
    /// Line i ties i+1 fields, so the chain covers aggregates of
    /// 1 up to COUNT fields. Zero or negative counts generate nothing.
    #[arg(allow_negative_numbers = true)]
    count: i64,

    /// Wrap the chain in the header's generated-section markers
    #[arg(long)]
    markers: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let output = if cli.markers {
        tiegen::chain_with_markers(cli.count)
    } else {
        tiegen::chain(cli.count)
    };

    io::stdout().lock().write_all(output.as_bytes())?;

    Ok(())
}
