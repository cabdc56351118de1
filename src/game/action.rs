//! Orders issued during a round.

use serde::Serialize;

use crate::game::{NodeId, PlayerId};

/// What an order does with the units at its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ActionKind {
    /// Move against the target node.
    Attack = 0,
    /// Reinforce the target node.
    Support = 1,
}

impl ActionKind {
    /// Decode the numeric type code used in the game text.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(ActionKind::Attack),
            1 => Some(ActionKind::Support),
            _ => None,
        }
    }

    /// Numeric type code used in the game text.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Attack => "attack",
            ActionKind::Support => "support",
        }
    }
}

/// A single order, scoped to one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Issuing player.
    pub player: PlayerId,
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Order type.
    pub kind: ActionKind,
}

/// Orders of one round, in file order.
pub type Round = Vec<Action>;
