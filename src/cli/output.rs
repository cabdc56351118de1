//! Output formatting utilities for CLI.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use officewars::game::Phase;
use officewars::{Game, GameSummary, Node, State};
use serde::Serialize;

/// JSON-serializable decoded game.
#[derive(Debug, Serialize)]
pub(super) struct JsonGame<'a> {
    /// Session id.
    pub(super) id: &'a str,
    /// Display name.
    pub(super) name: &'a str,
    /// Lifecycle phase (null if the state line is unrecognized).
    pub(super) phase: Option<Phase>,
    /// Turn ownership is reported for (null if no turns are recorded).
    pub(super) turn: Option<usize>,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayer<'a>>,
    /// Node graph.
    pub(super) nodes: &'a [Node],
    /// Number of action rounds.
    pub(super) rounds: usize,
    /// Ownership at the reported turn.
    pub(super) state: Option<&'a State>,
}

/// JSON-serializable player.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayer<'a> {
    /// Player index.
    pub(super) id: usize,
    /// Player name.
    pub(super) name: &'a str,
    /// Player color.
    pub(super) color: &'a str,
    /// Nodes owned at the reported turn.
    pub(super) nodes_owned: usize,
}

impl<'a> JsonGame<'a> {
    /// Create from a decoded game, reporting ownership at `turn`.
    pub(super) fn from_game(game: &'a Game, turn: Option<usize>) -> Self {
        let state = turn.and_then(|turn| game.state_at(turn));
        Self {
            id: &game.id,
            name: &game.name,
            phase: game.phase(),
            turn,
            players: game
                .players
                .iter()
                .enumerate()
                .map(|(id, player)| JsonPlayer {
                    id,
                    name: &player.name,
                    color: &player.color,
                    nodes_owned: state.map_or(0, |state| state.nodes_owned_by(id).count()),
                })
                .collect(),
            nodes: &game.nodes,
            rounds: game.rounds.len(),
            state,
        }
    }
}

/// JSON-serializable list entry.
#[derive(Debug, Serialize)]
pub(super) struct JsonListEntry<'a> {
    /// Session id.
    pub(super) id: &'a str,
    /// Display name.
    pub(super) name: &'a str,
    /// Lifecycle phase (null if the state line is unrecognized).
    pub(super) phase: Option<Phase>,
    /// Player names.
    pub(super) players: Vec<&'a str>,
    /// Number of nodes.
    pub(super) nodes: usize,
}

impl<'a> JsonListEntry<'a> {
    /// Create from a list entry.
    pub(super) fn from_summary(summary: &'a GameSummary) -> Self {
        Self {
            id: &summary.id,
            name: &summary.name,
            phase: summary.phase(),
            players: summary.players.iter().map(|p| p.name.as_str()).collect(),
            nodes: summary.nodes.len(),
        }
    }
}

/// Format a game list as human-readable text.
pub(super) fn format_list(games: &[GameSummary]) -> String {
    let mut output = format!("{} games\n", games.len());
    for game in games {
        let phase = game.phase().map_or("unknown", Phase::label);
        let names: Vec<&str> = game.players.iter().map(|p| p.name.as_str()).collect();
        output.push_str(&format!(
            "  {} {} [{phase}] {} nodes, players: {}\n",
            game.id,
            game.name,
            game.nodes.len(),
            names.join(", ")
        ));
    }
    output
}
