//! arraysum - sums a fixed array of integers and prints the result
//!
//! Running the binary prints exactly one line to stdout:
//!
//! ```text
//! The sum of the array is: 15
//! ```
//!
//! No arguments or input are read.
//!
//! ## Logging
//!
//! Diagnostics go to stderr and are silent by default. Set `RUST_LOG=debug`,
//! or `logging.level` in an optional `arraysum.yaml`, to see them.

use anyhow::Result;
use arraysum::{config::Config, logging::init_logging};
use tracing::{debug, warn};

fn main() -> Result<()> {
    let config = Config::load();
    let level = match &config {
        Ok(config) => config.logging.level.clone(),
        Err(_) => Config::default().logging.level,
    };
    init_logging(&level)?;

    if let Err(e) = config {
        warn!("Ignoring configuration: {:#}", e);
    }

    debug!("arraysum starting");
    arraysum::run(&mut std::io::stdout().lock())?;
    Ok(())
}
