//! Player records.

use serde::Serialize;

/// Index of a player in the decoded player list.
pub type PlayerId = usize;

/// A single player of a game.
///
/// A player's identity is its position in [`Game::players`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Color as written by the server, e.g. `#aa00ee`.
    pub color: String,
    /// Opaque access token. Never serialized.
    #[serde(skip_serializing)]
    pub secret: String,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            secret: secret.into(),
        }
    }

    /// Whether the secret was withheld by the server for this player.
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.secret.is_empty() || self.secret == REDACTED_SECRET
    }
}

/// Placeholder the server writes instead of another player's secret.
pub const REDACTED_SECRET: &str = "REDACT";
