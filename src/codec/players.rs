//! Player block: a count line followed by `(name, color, secret)` triples.

use crate::codec::{LineCursor, SectionDecoder};
use crate::error::{DecodeResult, SectionKind};
use crate::game::Player;

/// Lines per player record.
const LINES_PER_PLAYER: usize = 3;

/// Decoder for the player block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerDecoder;

impl PlayerDecoder {
    fn player_count(lines: LineCursor<'_>) -> DecodeResult<usize> {
        lines.embedded_count(0)
    }
}

impl SectionDecoder for PlayerDecoder {
    type Output = Vec<Player>;
    type Context<'c> = ();

    const KIND: SectionKind = SectionKind::Players;

    fn required_lines(&self, lines: LineCursor<'_>) -> DecodeResult<usize> {
        let count = Self::player_count(lines.within(Self::KIND))?;
        Ok(count.saturating_mul(LINES_PER_PLAYER).saturating_add(1))
    }

    fn parse(&self, lines: LineCursor<'_>, (): ()) -> DecodeResult<Vec<Player>> {
        let lines = lines.within(Self::KIND);
        lines.ensure(self.required_lines(lines)?)?;

        let count = Self::player_count(lines)?;
        (0..count)
            .map(|player| {
                let first = 1 + player * LINES_PER_PLAYER;
                Ok(Player::new(
                    lines.line(first)?,
                    lines.line(first + 1)?,
                    lines.line(first + 2)?,
                ))
            })
            .collect()
    }
}
