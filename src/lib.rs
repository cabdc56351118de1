// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Officewars: decoder for the office wars game text format.
//!
//! A game is served as plain text with no section delimiters: a header, then
//! player, node, action and state blocks back to back. This crate provides:
//! - Section decoders that size themselves from count lines
//! - A game assembler that chains them into a [`Game`]
//! - An adapter that rebuilds the same [`Game`] from a stateful [`Inspector`]
//! - An encoder writing games back into the text format
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  Text (GameDecoder)  │   │ Inspector (Adapter)  │
//! ├──────────────────────┤   └──────────┬───────────┘
//! │ Header → Players →   │              │
//! │ Nodes → Actions →    │              │
//! │ States               │              │
//! └──────────┬───────────┘              │
//!            └──────────► Game ◄────────┘
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod game;
pub mod inspect;
pub mod report;
pub mod source;

pub use codec::GameDecoder;
pub use config::{ActionLayout, ConnectivityScan, FormatConfig, InspectConfig, TrailingPolicy};
pub use error::{DecodeError, DecodeResult, Entity, LoadError, SectionKind};

// Re-export key model types at crate root for convenience
pub use game::{
    Action, ActionKind, Game, GameSummary, Node, NodeId, Player, PlayerId, Position, State,
};
pub use inspect::{GameInspector, Inspector, InspectorAdapter};
pub use report::render_report;
pub use source::{load_game, load_summaries, read_text, save_game};
