//! The `Game` aggregate and the lighter list entry.

use serde::Serialize;

use crate::game::{Node, NodeId, Player, PlayerId, Round, State};

/// Tolerance used when comparing positions from different construction paths.
pub const POSITION_EPSILON: f32 = 1e-4;

/// Lifecycle phase encoded in the header state line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players may still join.
    Pregame,
    /// The game has started.
    InGame,
}

impl Phase {
    /// Interpret a header state line (`0` pregame, `1` in game).
    #[must_use]
    pub fn from_status(status: &str) -> Option<Self> {
        match status.trim() {
            "0" => Some(Phase::Pregame),
            "1" => Some(Phase::InGame),
            _ => None,
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Pregame => "pregame",
            Phase::InGame => "in game",
        }
    }
}

/// A fully decoded game.
///
/// Actions and states refer to players and nodes by index into
/// [`Game::players`] and [`Game::nodes`]; the decoders validate every index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    /// Session id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw header state line. Empty when built from an inspector.
    pub status: String,
    /// Players in index order.
    pub players: Vec<Player>,
    /// Nodes in index order.
    pub nodes: Vec<Node>,
    /// Orders, one entry per round.
    pub rounds: Vec<Round>,
    /// Ownership snapshots, one per historical turn.
    pub states: Vec<State>,
}

impl Game {
    /// Lifecycle phase, if the state line is recognized.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        Phase::from_status(&self.status)
    }

    /// Player at `id`.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Node at `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes connected to `id`.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.connections.iter())
            .filter_map(|&other| self.nodes.get(other))
    }

    /// Number of recorded turns.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.states.len()
    }

    /// Ownership snapshot after `turn`.
    #[must_use]
    pub fn state_at(&self, turn: usize) -> Option<&State> {
        self.states.get(turn)
    }

    /// Number of edges in the node graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// Compare everything both construction paths can produce.
    ///
    /// Ids, names, player names and colors, node ids, positions (within
    /// [`POSITION_EPSILON`]), connection sets and states must match. Rounds,
    /// secrets and the status line are not compared: the inspector path has no
    /// access to them.
    #[must_use]
    pub fn same_structure(&self, other: &Game) -> bool {
        let players_match = self.players.len() == other.players.len()
            && self
                .players
                .iter()
                .zip(&other.players)
                .all(|(a, b)| a.name == b.name && a.color == b.color);

        let nodes_match = self.nodes.len() == other.nodes.len()
            && self.nodes.iter().zip(&other.nodes).all(|(a, b)| {
                a.id == b.id
                    && a.position.approx_eq(b.position, POSITION_EPSILON)
                    && same_set(&a.connections, &b.connections)
            });

        self.id == other.id
            && self.name == other.name
            && players_match
            && nodes_match
            && self.states == other.states
    }

    /// The header, players and nodes of this game.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            players: self.players.clone(),
            nodes: self.nodes.clone(),
        }
    }
}

/// Header, players and nodes of a game, as found in a list of games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    /// Session id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw header state line.
    pub status: String,
    /// Players in index order.
    pub players: Vec<Player>,
    /// Nodes in index order.
    pub nodes: Vec<Node>,
}

impl GameSummary {
    /// Lifecycle phase, if the state line is recognized.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        Phase::from_status(&self.status)
    }
}

fn same_set(a: &[NodeId], b: &[NodeId]) -> bool {
    a.len() == b.len() && a.iter().all(|id| b.contains(id))
}
