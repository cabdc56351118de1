//! Plain text summary of a decoded game.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use crate::game::{Game, NodeId, Phase, State};

/// Render a game as text, with ownership as of `turn`.
///
/// Output format:
/// ```text
/// === Office Party (ab12cd) ===
/// Phase: in game
/// Turn 1 of 2
///
/// PLAYERS:
/// - P0 Alice #ff0000: 2 nodes
/// - P1 Bob #00ff00: 1 node
///
/// NODES:
/// - N0 at (1.00, 2.00, -0.10) owner P0, neighbours [1, 2]
///
/// ROUND 1 ORDERS:
/// - P0 attack N1 -> N2
/// ```
#[must_use]
pub fn render_report(game: &Game, turn: usize) -> String {
    let mut output = String::new();
    let state = game.state_at(turn);

    render_header(&mut output, game, turn);
    render_players(&mut output, game, state);
    render_nodes(&mut output, game, state);
    render_round(&mut output, game, turn);

    output
}

fn render_header(output: &mut String, game: &Game, turn: usize) {
    output.push_str(&format!("=== {} ({}) ===\n", game.name, game.id));
    let phase = game.phase().map_or("unknown", Phase::label);
    output.push_str(&format!("Phase: {phase}\n"));
    if game.turn_count() == 0 {
        output.push_str("No recorded turns\n\n");
    } else {
        let shown = turn.saturating_add(1);
        output.push_str(&format!("Turn {shown} of {}\n\n", game.turn_count()));
    }
}

fn render_players(output: &mut String, game: &Game, state: Option<&State>) {
    output.push_str("PLAYERS:\n");
    for (id, player) in game.players.iter().enumerate() {
        let owned = state.map_or(0, |state| state.nodes_owned_by(id).count());
        let unit = if owned == 1 { "node" } else { "nodes" };
        output.push_str(&format!(
            "- P{id} {} {}: {owned} {unit}\n",
            player.name, player.color
        ));
    }
    output.push('\n');
}

fn render_nodes(output: &mut String, game: &Game, state: Option<&State>) {
    output.push_str("NODES:\n");
    for node in &game.nodes {
        let owner = state
            .and_then(|state| state.owner_of(node.id))
            .map_or_else(|| "none".to_string(), |owner| format!("P{owner}"));
        let neighbours: Vec<String> = node.connections.iter().map(NodeId::to_string).collect();
        let position = node.position;
        output.push_str(&format!(
            "- N{} at ({:.2}, {:.2}, {:.2}) owner {owner}, neighbours [{}]\n",
            node.id,
            position.x,
            position.y,
            position.z,
            neighbours.join(", ")
        ));
    }
}

fn render_round(output: &mut String, game: &Game, turn: usize) {
    let Some(round) = game.rounds.get(turn) else {
        return;
    };
    output.push_str(&format!("\nROUND {} ORDERS:\n", turn.saturating_add(1)));
    if round.is_empty() {
        output.push_str("- none\n");
    }
    for action in round {
        output.push_str(&format!(
            "- P{} {} N{} -> N{}\n",
            action.player,
            action.kind.name(),
            action.from,
            action.to
        ));
    }
}
