//! In-memory model of an office wars game.
//!
//! - Players identified by their position in the player list
//! - Nodes linked into a symmetric connection graph
//! - Rounds of attack/support orders
//! - Per-turn ownership snapshots
//!
//! Everything is built once by a decoder and never mutated afterwards.

mod action;
mod aggregate;
mod graph;
mod player;
mod snapshot;

pub use action::{Action, ActionKind, Round};
pub use aggregate::{Game, GameSummary, Phase, POSITION_EPSILON};
pub use graph::{
    link_nodes, verify_graph, Axis, Edge, Node, NodeId, Position, DEFAULT_COORDINATE_SCALE,
};
pub use player::{Player, PlayerId, REDACTED_SECRET};
pub use snapshot::State;
