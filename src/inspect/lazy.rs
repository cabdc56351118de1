//! An in-process [`Inspector`] over an already decoded game.

use crate::game::{Axis, Game, NodeId, PlayerId, DEFAULT_COORDINATE_SCALE};
use crate::inspect::Inspector;

/// Serves a decoded [`Game`] through the [`Inspector`] interface.
///
/// Coordinates are reported raw, undoing the render transform with the
/// configured scale. Owner queries read the snapshot selected by
/// [`step_history`](Inspector::step_history); before any step, or past the
/// last snapshot, every node is unowned.
#[derive(Debug, Clone, Copy)]
pub struct GameInspector<'a> {
    game: &'a Game,
    coordinate_scale: f32,
    turn: Option<usize>,
}

impl<'a> GameInspector<'a> {
    /// Inspect `game`, whose positions were built with the default scale.
    #[must_use]
    pub const fn new(game: &'a Game) -> Self {
        Self::with_scale(game, DEFAULT_COORDINATE_SCALE)
    }

    /// Inspect `game`, whose positions were built with `coordinate_scale`.
    #[must_use]
    pub const fn with_scale(game: &'a Game, coordinate_scale: f32) -> Self {
        Self {
            game,
            coordinate_scale,
            turn: None,
        }
    }

    /// Turn selected by the last step, if any.
    #[must_use]
    pub const fn turn(&self) -> Option<usize> {
        self.turn
    }
}

impl Inspector for GameInspector<'_> {
    fn name(&self) -> String {
        self.game.name.clone()
    }

    fn id(&self) -> String {
        self.game.id.clone()
    }

    fn player_count(&self) -> usize {
        self.game.players.len()
    }

    fn player_name(&self, player: PlayerId) -> String {
        self.game
            .player(player)
            .map(|player| player.name.clone())
            .unwrap_or_default()
    }

    fn player_color(&self, player: PlayerId) -> String {
        self.game
            .player(player)
            .map(|player| player.color.clone())
            .unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.game.nodes.len()
    }

    fn nodes_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.game.node(a).is_some_and(|node| node.is_connected_to(b))
    }

    fn node_coordinate(&self, node: NodeId, axis: Axis) -> f32 {
        self.game.node(node).map_or(0.0, |node| {
            node.position.axis(axis) / axis.factor(self.coordinate_scale)
        })
    }

    fn node_owner(&self, node: NodeId) -> Option<PlayerId> {
        self.turn
            .and_then(|turn| self.game.state_at(turn))
            .and_then(|state| state.owner_of(node))
    }

    fn turn_count(&self) -> usize {
        self.game.turn_count()
    }

    fn step_history(&mut self, turn: usize) {
        self.turn = Some(turn);
    }
}
