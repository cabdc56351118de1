//! Rebuilding a [`Game`] from a stateful accessor instead of text.
//!
//! A host runtime that already holds a decoded game exposes it through
//! [`Inspector`]. [`InspectorAdapter`] queries it field by field and steps
//! through its history to produce the same aggregate the text decoder does.

mod lazy;

pub use lazy::GameInspector;

use crate::config::{ConnectivityScan, InspectConfig};
use crate::error::{DecodeError, DecodeResult, Entity, SectionKind};
use crate::game::{
    link_nodes, verify_graph, Axis, Edge, Game, NodeId, Player, PlayerId, Position, State,
};

/// Accessor over a game held by a host runtime.
///
/// Owner queries answer for the turn selected by the most recent
/// [`step_history`](Inspector::step_history) call.
pub trait Inspector {
    /// Display name of the game.
    fn name(&self) -> String;
    /// Session id.
    fn id(&self) -> String;
    /// Number of players.
    fn player_count(&self) -> usize;
    /// Name of player `player`.
    fn player_name(&self, player: PlayerId) -> String;
    /// Color of player `player`.
    fn player_color(&self, player: PlayerId) -> String;
    /// Number of nodes.
    fn node_count(&self) -> usize;
    /// Whether `a` has a connection to `b`.
    fn nodes_connected(&self, a: NodeId, b: NodeId) -> bool;
    /// Raw coordinate of `node` along `axis`, before the render transform.
    fn node_coordinate(&self, node: NodeId, axis: Axis) -> f32;
    /// Owner of `node` at the selected turn.
    fn node_owner(&self, node: NodeId) -> Option<PlayerId>;
    /// Number of recorded turns.
    fn turn_count(&self) -> usize;
    /// Select the turn owner queries answer for.
    fn step_history(&mut self, turn: usize);
}

/// Builds a [`Game`] by querying an [`Inspector`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InspectorAdapter {
    config: InspectConfig,
}

impl InspectorAdapter {
    /// Create an adapter with the given options.
    #[must_use]
    pub const fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Rebuild the game held by `inspector`.
    ///
    /// Secrets and the status line are left empty and no rounds are produced;
    /// the inspector does not expose them. Owner errors report the 1-based
    /// turn in place of a line number.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::StructuralInvariant`] if the inspector answers
    /// connectivity asymmetrically, or [`DecodeError::Referential`] if it
    /// reports an owner outside the player list.
    pub fn build<I: Inspector + ?Sized>(&self, inspector: &mut I) -> DecodeResult<Game> {
        let players: Vec<Player> = (0..inspector.player_count())
            .map(|player| {
                Player::new(
                    inspector.player_name(player),
                    inspector.player_color(player),
                    String::new(),
                )
            })
            .collect();

        let count = inspector.node_count();
        let edges = self.edges(inspector, count)?;
        let positions = (0..count)
            .map(|node| {
                let raw = Axis::ALL.map(|axis| inspector.node_coordinate(node, axis));
                Position::from_raw(raw, self.config.coordinate_scale)
            })
            .collect();
        let nodes = link_nodes(positions, &edges);
        verify_graph(&nodes)?;

        let turns = inspector.turn_count();
        let mut states = Vec::with_capacity(turns);
        for turn in 0..turns {
            inspector.step_history(turn);
            let owners = (0..count)
                .map(|node| match inspector.node_owner(node) {
                    Some(owner) if owner >= players.len() => Err(DecodeError::Referential {
                        section: SectionKind::States,
                        line: turn + 1,
                        entity: Entity::Player,
                        index: owner,
                        bound: players.len(),
                    }),
                    owner => Ok(owner),
                })
                .collect::<DecodeResult<Vec<_>>>()?;
            states.push(State::new(owners));
        }

        let game = Game {
            id: inspector.id(),
            name: inspector.name(),
            status: String::new(),
            players,
            nodes,
            rounds: Vec::new(),
            states,
        };
        tracing::info!(
            id = %game.id,
            players = game.players.len(),
            nodes = game.nodes.len(),
            turns = game.states.len(),
            "rebuilt game from inspector"
        );
        Ok(game)
    }

    fn edges<I: Inspector + ?Sized>(self, inspector: &I, count: usize) -> DecodeResult<Vec<Edge>> {
        let mirrored = self.config.connectivity == ConnectivityScan::UpperTriangle;
        let mut edges = Vec::new();
        for a in 0..count {
            for b in a + 1..count {
                let forward = inspector.nodes_connected(a, b);
                if !mirrored && forward != inspector.nodes_connected(b, a) {
                    return Err(DecodeError::StructuralInvariant {
                        node: a,
                        other: b,
                        reason: "inspector reports a one-way connection",
                    });
                }
                if forward {
                    edges.push((a, b));
                }
            }
        }
        Ok(edges)
    }
}
