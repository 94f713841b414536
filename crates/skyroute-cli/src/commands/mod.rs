//! Handlers for the CLI subcommands.
//!
//! `main.rs` parses arguments and dispatches here; each module owns one
//! subcommand.

pub mod import;
pub mod route;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use skyroute_lib::{load_flight_data, try_parse_flight_data, ParsedData};
use tracing::debug;

/// Read and parse the import text from `input`, or from stdin when the path
/// is absent or `-`.
pub fn load_input(input: Option<&Path>) -> Result<ParsedData> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("loading flight data from {}", path.display());
            load_flight_data(path)
                .with_context(|| format!("failed to load flight data from {}", path.display()))
        }
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read flight data from stdin")?;
            debug!("read {} bytes of flight data from stdin", raw.len());
            try_parse_flight_data(&raw).context("failed to parse flight data from <stdin>")
        }
    }
}
