//! Sequences the section decoders into whole games.

use crate::codec::{
    decode_section, split_lines, ActionDecoder, LineCursor, NodeDecoder, PlayerDecoder, Roster,
    StateDecoder,
};
use crate::config::{FormatConfig, TrailingPolicy};
use crate::error::{DecodeError, DecodeResult, SectionKind};
use crate::game::{Game, GameSummary};

/// Lines in the game header: id, name, state, separator.
pub const HEADER_LINES: usize = 4;

/// The opaque header of a game record.
#[derive(Debug, Clone, Copy)]
struct Header<'a> {
    id: &'a str,
    name: &'a str,
    status: &'a str,
}

impl<'a> Header<'a> {
    fn read(lines: LineCursor<'a>) -> DecodeResult<(Self, LineCursor<'a>)> {
        let (header, rest) = lines.within(SectionKind::Header).split_at(HEADER_LINES)?;
        Ok((
            Self {
                id: header.line(0)?,
                name: header.line(1)?,
                status: header.line(2)?,
            },
            rest,
        ))
    }
}

/// Decodes game text into [`Game`] and [`GameSummary`] values.
///
/// Each section is sized with its decoder's `required_lines` over the
/// remaining input, sliced, and parsed; the next section starts where the
/// previous one ended. The decoder holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameDecoder {
    config: FormatConfig,
}

impl GameDecoder {
    /// Create a decoder with the given format options.
    #[must_use]
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Format options in use.
    #[must_use]
    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Decode a full game record.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any section; no partial game is
    /// produced.
    pub fn decode(&self, text: &str) -> DecodeResult<Game> {
        let lines = split_lines(text);
        self.decode_lines(&lines)
    }

    /// Decode a full game record from pre-split lines.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any section.
    pub fn decode_lines(&self, lines: &[&str]) -> DecodeResult<Game> {
        let cursor = LineCursor::new(lines);
        let (game, rest) = self.game_at(cursor)?;
        self.finish(rest)?;

        tracing::info!(
            id = %game.id,
            players = game.players.len(),
            nodes = game.nodes.len(),
            rounds = game.rounds.len(),
            turns = game.states.len(),
            "decoded game"
        );
        Ok(game)
    }

    /// Decode the header, players and nodes of a game record.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any section.
    pub fn decode_summary(&self, text: &str) -> DecodeResult<GameSummary> {
        let lines = split_lines(text);
        let (summary, rest) = self.summary_at(LineCursor::new(&lines))?;
        self.finish(rest)?;
        Ok(summary)
    }

    /// Decode a list of games: a count line followed by summary records.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any record.
    pub fn decode_list(&self, text: &str) -> DecodeResult<Vec<GameSummary>> {
        let lines = split_lines(text);
        let cursor = LineCursor::new(&lines).within(SectionKind::GameList);
        let count = cursor.count(0)?;
        let (_, mut rest) = cursor.split_at(1)?;

        let mut games = Vec::with_capacity(count.min(lines.len()));
        for _ in 0..count {
            let (summary, next) = self.summary_at(rest)?;
            games.push(summary);
            rest = next;
        }
        self.finish(rest)?;

        tracing::info!(games = games.len(), "decoded game list");
        Ok(games)
    }

    fn summary_at<'a>(self, lines: LineCursor<'a>) -> DecodeResult<(GameSummary, LineCursor<'a>)> {
        let (header, rest) = Header::read(lines)?;
        let (players, rest) = decode_section(&PlayerDecoder, rest, ())?;
        let (nodes, rest) = decode_section(&self.node_decoder(), rest, ())?;

        Ok((
            GameSummary {
                id: header.id.to_string(),
                name: header.name.to_string(),
                status: header.status.to_string(),
                players,
                nodes,
            },
            rest,
        ))
    }

    fn game_at<'a>(self, lines: LineCursor<'a>) -> DecodeResult<(Game, LineCursor<'a>)> {
        let (summary, rest) = self.summary_at(lines)?;
        let roster = Roster::new(&summary.players, &summary.nodes);
        let (rounds, rest) = decode_section(&self.action_decoder(), rest, roster)?;
        let (states, rest) = decode_section(&StateDecoder, rest, roster)?;

        let GameSummary {
            id,
            name,
            status,
            players,
            nodes,
        } = summary;
        Ok((
            Game {
                id,
                name,
                status,
                players,
                nodes,
                rounds,
                states,
            },
            rest,
        ))
    }

    fn finish(self, rest: LineCursor<'_>) -> DecodeResult<()> {
        let Some(index) = rest.first_non_blank() else {
            return Ok(());
        };
        let line = rest.line_number(index);
        match self.config.trailing {
            TrailingPolicy::Ignore => {
                tracing::warn!(line, "ignoring input after the last section");
                Ok(())
            }
            TrailingPolicy::Reject => Err(DecodeError::TrailingInput { line }),
        }
    }

    const fn node_decoder(self) -> NodeDecoder {
        NodeDecoder::new(self.config.coordinate_scale)
    }

    const fn action_decoder(self) -> ActionDecoder {
        ActionDecoder::new(self.config.action_layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionLayout;
    use crate::game::ActionKind;

    const GAME: &str = "\
ab12cd
Office Party
1

2
Alice
#ff0000
secretA
Bob
#00ff00
secretB
3
011
001
000
0.1,0.2,0.01
-0.3,0.4,0
0.5,-0.6,0.02
2
1
0 1 2 0
0
2
0,1,0
0,0,-1
";

    #[test]
    fn test_decode_full_game() {
        let game = GameDecoder::default().decode(GAME).unwrap();
        assert_eq!(game.id, "ab12cd");
        assert_eq!(game.name, "Office Party");
        assert_eq!(game.status, "1");
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.nodes.len(), 3);
        assert_eq!(game.rounds.len(), 2);
        assert_eq!(game.rounds[0][0].kind, ActionKind::Attack);
        assert!(game.rounds[1].is_empty());
        assert_eq!(game.states.len(), 2);
        assert_eq!(game.states[1].owner_of(2), None);
    }

    #[test]
    fn test_summary_of_full_game_ignores_the_rest() {
        let summary = GameDecoder::default().decode_summary(GAME).unwrap();
        assert_eq!(summary.players[1].name, "Bob");
        assert_eq!(summary.nodes.len(), 3);
    }

    #[test]
    fn test_reject_trailing_input() {
        let config = FormatConfig {
            trailing: TrailingPolicy::Reject,
            ..FormatConfig::default()
        };
        let decoder = GameDecoder::new(config);
        assert!(decoder.decode(GAME).is_ok());

        let text = format!("{GAME}garbage\n");
        assert_eq!(
            decoder.decode(&text).unwrap_err(),
            DecodeError::TrailingInput { line: 26 }
        );
    }

    #[test]
    fn test_header_truncated() {
        assert!(matches!(
            GameDecoder::default().decode("id\nname"),
            Err(DecodeError::Truncated {
                section: SectionKind::Header,
                needed: 4,
                available: 2,
            })
        ));
    }

    #[test]
    fn test_error_in_late_section_aborts() {
        let text = GAME.replace("0,0,-1", "0,0,9");
        assert!(matches!(
            GameDecoder::default().decode(&text),
            Err(DecodeError::Referential {
                section: SectionKind::States,
                line: 25,
                ..
            })
        ));
    }

    #[test]
    fn test_stacked_actions() {
        let text = GAME.replace("0 1 2 0", "0\n1\n2\n0");
        let config = FormatConfig {
            action_layout: ActionLayout::Stacked,
            ..FormatConfig::default()
        };
        let game = GameDecoder::new(config).decode(&text).unwrap();
        assert_eq!(game.rounds[0][0].to, 2);
        assert_eq!(game.states.len(), 2);
    }

    #[test]
    fn test_decode_list() {
        let entry = "g1\nFirst\n0\n\n1\nAlice\n#ff0000\nREDACT\n1\n0\n0,0,0\n";
        let second = "g2\nSecond\n1\n\n0\n2\n01\n00\n0,0,0\n1,1,1\n";
        let text = format!("2\n{entry}{second}");

        let games = GameDecoder::default().decode_list(&text).unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, "g1");
        assert_eq!(games[0].players.len(), 1);
        assert_eq!(games[1].name, "Second");
        assert_eq!(games[1].nodes[0].connections, vec![1]);
    }

    #[test]
    fn test_decode_list_truncated() {
        let text = "2\ng1\nFirst\n0\n\n0\n0\n";
        assert!(matches!(
            GameDecoder::default().decode_list(text),
            Err(DecodeError::Truncated {
                section: SectionKind::Header,
                ..
            })
        ));
    }
}
