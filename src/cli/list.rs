//! List command implementation.

use super::output::{format_list, JsonListEntry};
use super::{CliError, FormatArgs, OutputFormat};
use officewars::load_summaries;
use std::path::Path;

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or decoded.
pub(crate) fn execute(path: &Path, format: OutputFormat, text: FormatArgs) -> Result<(), CliError> {
    let games = load_summaries(path, &text.decoder())?;

    match format {
        OutputFormat::Text => print!("{}", format_list(&games)),
        OutputFormat::Json => {
            let entries: Vec<JsonListEntry<'_>> =
                games.iter().map(JsonListEntry::from_summary).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
