//! Import command handler summarising a parsed flight network.

use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::load_input;
use crate::output::{ImportReport, OutputFormat};

/// Handle the import subcommand.
pub fn handle_import_command(input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let parsed = load_input(input)?;
    let report = ImportReport::from_parsed(&parsed);
    format
        .render_import(&report)
        .context("failed to write import summary")
}
