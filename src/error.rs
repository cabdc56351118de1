//! Error types for game decoding.

use std::fmt;

/// Section of the game text an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// The four header lines (id, name, state, separator).
    Header,
    /// Player block.
    Players,
    /// Node block (adjacency rows and positions).
    Nodes,
    /// Round-structured action log.
    Actions,
    /// Per-turn ownership snapshots.
    States,
    /// Count line of a list of games.
    GameList,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Header => "header",
            SectionKind::Players => "player",
            SectionKind::Nodes => "node",
            SectionKind::Actions => "action",
            SectionKind::States => "state",
            SectionKind::GameList => "game list",
        };
        write!(f, "{name} section")
    }
}

/// Kind of entity an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A player index.
    Player,
    /// A node index.
    Node,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Player => write!(f, "player"),
            Entity::Node => write!(f, "node"),
        }
    }
}

/// Failure while decoding a game.
///
/// Line numbers are absolute and 1-based, counted from the start of the
/// decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A section declares more lines than the input holds.
    Truncated {
        /// Section being decoded.
        section: SectionKind,
        /// Lines the section needs.
        needed: usize,
        /// Lines that were available.
        available: usize,
    },
    /// A token failed to parse as the expected integer, float or enum.
    MalformedField {
        /// Section being decoded.
        section: SectionKind,
        /// Line holding the token.
        line: usize,
        /// What the token was supposed to be.
        field: &'static str,
        /// The offending text.
        value: String,
    },
    /// An index resolves outside the decoded players or nodes.
    Referential {
        /// Section being decoded.
        section: SectionKind,
        /// Line holding the index.
        line: usize,
        /// What the index refers to.
        entity: Entity,
        /// The index found in the input.
        index: usize,
        /// Number of entities available.
        bound: usize,
    },
    /// The node graph is asymmetric or self referential.
    StructuralInvariant {
        /// Node whose connection list is wrong.
        node: usize,
        /// The other end of the offending connection.
        other: usize,
        /// Description of the violation.
        reason: &'static str,
    },
    /// Non-blank input remains after the last section.
    TrailingInput {
        /// First trailing line.
        line: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Truncated {
                section,
                needed,
                available,
            } => write!(
                f,
                "truncated input in {section}: needs {needed} lines, {available} available"
            ),
            DecodeError::MalformedField {
                section,
                line,
                field,
                value,
            } => write!(f, "malformed {field} in {section} at line {line}: {value:?}"),
            DecodeError::Referential {
                section,
                line,
                entity,
                index,
                bound,
            } => write!(
                f,
                "{entity} index {index} out of range (have {bound}) in {section} at line {line}"
            ),
            DecodeError::StructuralInvariant {
                node,
                other,
                reason,
            } => write!(f, "node graph invariant broken between {node} and {other}: {reason}"),
            DecodeError::TrailingInput { line } => {
                write!(f, "unexpected input after the last section at line {line}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding steps.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure while reading game text before it reaches the decoder.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read.
    Io(std::io::Error),
    /// The source is not valid UTF-8.
    Encoding(std::string::FromUtf8Error),
    /// The text was read but did not decode.
    Decode(DecodeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read game data: {e}"),
            LoadError::Encoding(e) => write!(f, "game data is not UTF-8: {e}"),
            LoadError::Decode(e) => write!(f, "failed to decode game: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Encoding(e) => Some(e),
            LoadError::Decode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for LoadError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::Encoding(e)
    }
}

impl From<DecodeError> for LoadError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_display_names_section() {
        let err = DecodeError::Truncated {
            section: SectionKind::Players,
            needed: 16,
            available: 11,
        };
        let msg = format!("{err}");
        assert!(msg.contains("player section"));
        assert!(msg.contains("16"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn test_referential_display() {
        let err = DecodeError::Referential {
            section: SectionKind::Actions,
            line: 30,
            entity: Entity::Node,
            index: 9,
            bound: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("node index 9"));
        assert!(msg.contains("line 30"));
    }

    #[test]
    fn test_load_error_source() {
        let err = LoadError::from(DecodeError::TrailingInput { line: 3 });
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{err}").contains("line 3"));
    }
}
