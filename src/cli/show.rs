//! Show command implementation.

use super::output::JsonGame;
use super::{CliError, FormatArgs, OutputFormat};
use officewars::{load_game, render_report};
use std::path::Path;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or decoded, or if `turn`
/// is past the last recorded turn.
pub(crate) fn execute(
    path: &Path,
    turn: Option<usize>,
    format: OutputFormat,
    text: FormatArgs,
) -> Result<(), CliError> {
    let game = load_game(path, &text.decoder())?;

    let last = game.turn_count().checked_sub(1);
    let turn = match (turn, last) {
        (Some(turn), Some(last)) if turn > last => {
            return Err(CliError::new(format!(
                "Turn {turn} out of range: {} has {} recorded turns",
                path.display(),
                game.turn_count()
            )));
        }
        (Some(turn), _) => Some(turn),
        (None, last) => last,
    };

    match format {
        OutputFormat::Text => print!("{}", render_report(&game, turn.unwrap_or(0))),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonGame::from_game(&game, turn))?;
            println!("{json}");
        }
    }

    Ok(())
}
