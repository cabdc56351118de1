//! Decoder and inspector configuration.

use clap::ValueEnum;

use crate::game::DEFAULT_COORDINATE_SCALE;

/// How the four integers of an action record are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ActionLayout {
    /// One line holding `player from to type`, whitespace separated.
    #[default]
    Inline,
    /// One integer per line, four lines per action (as the server writes it).
    Stacked,
}

impl ActionLayout {
    /// Lines occupied by a single action record.
    #[must_use]
    pub const fn lines_per_action(self) -> usize {
        match self {
            ActionLayout::Inline => 1,
            ActionLayout::Stacked => 4,
        }
    }
}

/// What to do with non-blank lines after the last section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TrailingPolicy {
    /// Log a warning and keep the decoded game.
    #[default]
    Ignore,
    /// Fail with [`DecodeError::TrailingInput`](crate::DecodeError::TrailingInput).
    Reject,
}

/// Options shared by the text decoder and encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatConfig {
    /// Factor applied to raw node coordinates (default: 10.0).
    pub coordinate_scale: f32,
    /// Layout of action records.
    pub action_layout: ActionLayout,
    /// Handling of input after the last section.
    pub trailing: TrailingPolicy,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            coordinate_scale: DEFAULT_COORDINATE_SCALE,
            action_layout: ActionLayout::Inline,
            trailing: TrailingPolicy::Ignore,
        }
    }
}

/// How node connectivity is queried from an inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConnectivityScan {
    /// Query every ordered pair and check the answers are symmetric.
    #[default]
    AllPairs,
    /// Query each unordered pair once and mirror the answer.
    UpperTriangle,
}

/// Options for rebuilding a game from an inspector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InspectConfig {
    /// Factor applied to raw node coordinates (default: 10.0).
    pub coordinate_scale: f32,
    /// Connectivity query strategy.
    pub connectivity: ConnectivityScan,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            coordinate_scale: DEFAULT_COORDINATE_SCALE,
            connectivity: ConnectivityScan::AllPairs,
        }
    }
}
