//! Line-oriented game text codec.
//!
//! The text has no section delimiters. Each section decoder implements
//! [`SectionDecoder`]: a size probe that reads only count lines, and a parser
//! that consumes exactly the probed lines. [`GameDecoder`] chains them.

mod actions;
mod assembler;
mod cursor;
mod encode;
mod nodes;
mod players;
mod section;
mod states;

pub use actions::ActionDecoder;
pub use assembler::{GameDecoder, HEADER_LINES};
pub use cursor::{split_lines, LineCursor};
pub use encode::{
    encode_game, encode_list, encode_nodes, encode_players, encode_rounds, encode_states,
    encode_summary,
};
pub use nodes::NodeDecoder;
pub use players::PlayerDecoder;
pub use section::{decode_section, Roster, SectionDecoder};
pub use states::{StateDecoder, NO_OWNER};
