//! Ownership snapshots: a turn count, then one owner list per turn.

use crate::codec::{LineCursor, Roster, SectionDecoder};
use crate::error::{DecodeResult, Entity, SectionKind};
use crate::game::{PlayerId, State};

/// Owner token meaning "no owner".
pub const NO_OWNER: &str = "-1";

/// The server writes an unsigned `-1` for unowned nodes.
const NO_OWNER_UNSIGNED: u64 = 4_294_967_295;

/// Decoder for per-turn ownership snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateDecoder;

impl StateDecoder {
    fn owner(
        lines: LineCursor<'_>,
        index: usize,
        token: &str,
        players: usize,
    ) -> DecodeResult<Option<PlayerId>> {
        let token = token.trim();
        if token == NO_OWNER {
            return Ok(None);
        }
        let value: u64 = lines.parse_token(index, token, "owner index")?;
        if value == NO_OWNER_UNSIGNED {
            return Ok(None);
        }
        let value =
            usize::try_from(value).map_err(|_| lines.malformed(index, "owner index", token))?;
        lines.resolve(index, Entity::Player, value, players).map(Some)
    }
}

impl SectionDecoder for StateDecoder {
    type Output = Vec<State>;
    type Context<'c> = Roster<'c>;

    const KIND: SectionKind = SectionKind::States;

    fn required_lines(&self, lines: LineCursor<'_>) -> DecodeResult<usize> {
        Ok(lines.within(Self::KIND).count(0)?.saturating_add(1))
    }

    fn parse(&self, lines: LineCursor<'_>, roster: Roster<'_>) -> DecodeResult<Vec<State>> {
        let lines = lines.within(Self::KIND);
        lines.ensure(self.required_lines(lines)?)?;
        let turns = lines.count(0)?;

        (1..=turns)
            .map(|index| {
                let text = lines.line(index)?;
                let tokens: Vec<&str> = if text.trim().is_empty() {
                    Vec::new()
                } else {
                    text.split(',').collect()
                };
                if tokens.len() != roster.nodes.len() {
                    return Err(lines.malformed(index, "owner list", text));
                }

                tokens
                    .into_iter()
                    .map(|token| Self::owner(lines, index, token, roster.players.len()))
                    .collect::<DecodeResult<Vec<_>>>()
                    .map(State::new)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::split_lines;
    use crate::error::DecodeError;
    use crate::game::{link_nodes, Node, Player, Position};

    fn fixtures() -> (Vec<Player>, Vec<Node>) {
        let players = vec![
            Player::new("Alice", "#ff0000", "a"),
            Player::new("Bob", "#00ff00", "b"),
        ];
        let nodes = link_nodes(vec![Position::default(); 3], &[(0, 1), (1, 2)]);
        (players, nodes)
    }

    #[test]
    fn test_single_snapshot() {
        let (players, nodes) = fixtures();
        let lines = split_lines("1\n0,1,0");
        let cursor = LineCursor::new(&lines);

        assert_eq!(StateDecoder.required_lines(cursor).unwrap(), 2);
        let states = StateDecoder.parse(cursor, Roster::new(&players, &nodes)).unwrap();
        assert_eq!(states, vec![State::new(vec![Some(0), Some(1), Some(0)])]);
    }

    #[test]
    fn test_no_owner_sentinels() {
        let (players, nodes) = fixtures();
        let lines = split_lines("2\n-1,1,4294967295\n 1 , 1 , -1 ");
        let states = StateDecoder
            .parse(LineCursor::new(&lines), Roster::new(&players, &nodes))
            .unwrap();
        assert_eq!(states[0].owners, vec![None, Some(1), None]);
        assert_eq!(states[1].owners, vec![Some(1), Some(1), None]);
    }

    #[test]
    fn test_no_turns() {
        let (players, nodes) = fixtures();
        let lines = ["0"];
        let cursor = LineCursor::new(&lines);
        assert_eq!(StateDecoder.required_lines(cursor).unwrap(), 1);
        assert!(StateDecoder.parse(cursor, Roster::new(&players, &nodes)).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_token_count() {
        let (players, nodes) = fixtures();
        let lines = split_lines("1\n0,1");
        assert_eq!(
            StateDecoder
                .parse(LineCursor::new(&lines), Roster::new(&players, &nodes))
                .unwrap_err(),
            DecodeError::MalformedField {
                section: SectionKind::States,
                line: 2,
                field: "owner list",
                value: "0,1".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_player() {
        let (players, nodes) = fixtures();
        let lines = split_lines("1\n0,2,0");
        assert!(matches!(
            StateDecoder.parse(LineCursor::new(&lines), Roster::new(&players, &nodes)),
            Err(DecodeError::Referential {
                entity: Entity::Player,
                index: 2,
                bound: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_owner() {
        let (players, nodes) = fixtures();
        let lines = split_lines("1\n0,x,0");
        assert!(matches!(
            StateDecoder.parse(LineCursor::new(&lines), Roster::new(&players, &nodes)),
            Err(DecodeError::MalformedField {
                field: "owner index",
                ..
            })
        ));
    }

    #[test]
    fn test_truncated_snapshots() {
        let (players, nodes) = fixtures();
        let lines = split_lines("3\n0,1,0");
        assert!(matches!(
            StateDecoder.parse(LineCursor::new(&lines), Roster::new(&players, &nodes)),
            Err(DecodeError::Truncated {
                section: SectionKind::States,
                needed: 4,
                available: 2,
            })
        ));
    }
}
