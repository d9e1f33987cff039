use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

pub mod config;
pub mod logging;
pub mod sum;

// Re-export the main types for easy access
pub use config::Config;
pub use sum::{sum_array, Additive};

/// The fixed sequence summed by the binary
pub const SAMPLE: [i32; 5] = [1, 2, 3, 4, 5];

/// Render the result sentence, without a trailing newline
pub fn format_report(result: i32) -> String {
    format!("The sum of the array is: {}", result)
}

/// Sum [`SAMPLE`] and write the result line to `out`, returning the sum
pub fn run<W: Write>(out: &mut W) -> Result<i32> {
    let result: i32 = sum_array(&SAMPLE);
    debug!(sample = ?SAMPLE, result, "computed sum");

    writeln!(out, "{}", format_report(result))
        .context("Failed to write result")?;
    out.flush().context("Failed to flush output")?;
    Ok(result)
}
