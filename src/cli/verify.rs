//! Verify command implementation.

use super::{CliError, FormatArgs};
use officewars::codec::encode_game;
use officewars::{load_game, ConnectivityScan, GameInspector, InspectConfig, InspectorAdapter};
use std::path::Path;

/// Execute the verify command.
///
/// Decodes the file, then rebuilds the game through the inspector and through
/// a re-encoding and checks both agree with the decoded game.
///
/// # Errors
///
/// Returns an error if the file does not decode or a cross-check fails.
pub(crate) fn execute(
    path: &Path,
    scan: ConnectivityScan,
    text: FormatArgs,
) -> Result<(), CliError> {
    let decoder = text.decoder();
    let config = *decoder.config();

    println!("Verifying: {}", path.display());
    println!();

    let game = load_game(path, &decoder)?;
    print_check("Decode", true);

    let mut inspector = GameInspector::with_scale(&game, config.coordinate_scale);
    let rebuilt = InspectorAdapter::new(InspectConfig {
        coordinate_scale: config.coordinate_scale,
        connectivity: scan,
    })
    .build(&mut inspector)?;
    let inspector_ok = rebuilt.same_structure(&game);
    print_check("Inspector rebuild", inspector_ok);

    let reencoded = decoder.decode(&encode_game(&game, &config))?;
    let encoder_ok = reencoded.same_structure(&game) && reencoded.rounds == game.rounds;
    print_check("Re-encode", encoder_ok);

    println!();
    println!("Summary:");
    println!("  Players:  {}", game.players.len());
    println!("  Nodes:    {} ({} edges)", game.nodes.len(), game.edge_count());
    println!("  Rounds:   {}", game.rounds.len());
    println!("  Turns:    {}", game.turn_count());
    println!();

    if !inspector_ok {
        return Err(CliError::new("Inspector rebuild differs from decoded game"));
    }
    if !encoder_ok {
        return Err(CliError::new("Re-encoded game differs from decoded game"));
    }

    println!("Verification successful!");
    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
