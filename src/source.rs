//! Reading game text from files and streams.
//!
//! All I/O and UTF-8 failures surface before any decoder runs.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::codec::{encode_game, GameDecoder};
use crate::error::LoadError;
use crate::game::{Game, GameSummary};

/// Read all of `reader` as UTF-8 text.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails or [`LoadError::Encoding`] if
/// the bytes are not UTF-8.
pub fn read_text<R: Read>(mut reader: R) -> Result<String, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Load and decode a full game record.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or does not decode.
pub fn load_game(path: &Path, decoder: &GameDecoder) -> Result<Game, LoadError> {
    let text = read_text(File::open(path)?)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded game text");
    Ok(decoder.decode(&text)?)
}

/// Load and decode a list of games.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or does not decode.
pub fn load_summaries(path: &Path, decoder: &GameDecoder) -> Result<Vec<GameSummary>, LoadError> {
    let text = read_text(File::open(path)?)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded game list text");
    Ok(decoder.decode_list(&text)?)
}

/// Encode `game` with the decoder's format options and write it to `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be written.
pub fn save_game(path: &Path, game: &Game, decoder: &GameDecoder) -> Result<(), LoadError> {
    let mut file = File::create(path)?;
    file.write_all(encode_game(game, decoder.config()).as_bytes())?;
    Ok(())
}
