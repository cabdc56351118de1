//! Per-turn ownership snapshots.

use serde::Serialize;

use crate::game::{NodeId, PlayerId};

/// Ownership of every node at the end of one historical turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct State {
    /// Owner of each node, indexed by node id. `None` means no owner.
    pub owners: Vec<Option<PlayerId>>,
}

impl State {
    /// Create a snapshot from per-node owners.
    #[must_use]
    pub fn new(owners: Vec<Option<PlayerId>>) -> Self {
        Self { owners }
    }

    /// Owner of `node`, or `None` when it is unowned or out of range.
    #[must_use]
    pub fn owner_of(&self, node: NodeId) -> Option<PlayerId> {
        self.owners.get(node).copied().flatten()
    }

    /// Nodes held by `player`, in node order.
    pub fn nodes_owned_by(&self, player: PlayerId) -> impl Iterator<Item = NodeId> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(move |(_, owner)| **owner == Some(player))
            .map(|(node, _)| node)
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.owners.len()
    }
}
