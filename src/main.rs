mod cmd;
mod log;
use crate::cmd::Config;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let config = Config::parse();

    log::init()?;
    tracing::debug!(input = %config.input, "parsed arguments");

    // The input file is carried but not read yet.
    Ok(())
}
